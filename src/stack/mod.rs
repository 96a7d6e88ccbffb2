//! Stack operations as stateful actions.
//!
//! The stack is an [`im::Vector`]: pushing and popping build new vectors that
//! share structure with the old one, so a state captured earlier in a chain
//! is never disturbed. Everything here is written against the public
//! combinators in [`crate::core`].
//!
//! # Example
//!
//! ```rust
//! use stateless::stack::{pop, push, stackful, Stack};
//! use stateless::state_do;
//!
//! let sum = state_do! {
//!     push(1);
//!     push(2);
//!     a <- pop::<i32>();
//!     b <- pop::<i32>();
//!     return a.zip(b).map(|(a, b)| a + b)
//! };
//!
//! assert_eq!(stackful(sum.into_action()), (Some(3), Stack::new()));
//! ```
//!
//! [`pop`] yields `Option<T>` and treats an empty stack as `None`.
//! [`try_pop`] and [`try_pop_n`] report it as a [`StackError`] instead.

pub mod error;

pub use error::StackError;

use crate::core::{get, gets, pure, put, Action};
use im::Vector;

/// The state threaded through stack actions; the top is the back.
pub type Stack<T> = Vector<T>;

/// Push `value` on top of the stack.
pub fn push<T: Clone + 'static>(value: T) -> Action<Stack<T>, ()> {
    get().bind(move |stack: Stack<T>| {
        let mut next = stack;
        next.push_back(value.clone());
        put(next)
    })
}

/// Remove and return the top of the stack, or `None` if it is empty.
///
/// Popping an empty stack is not an error here: the action yields `None`
/// and leaves the state alone. Use [`try_pop`] when an empty stack should
/// be reported as [`StackError::Underflow`].
///
/// ```rust
/// use stateless::stack::{pop, stackful, Stack};
///
/// assert_eq!(stackful(pop::<i32>()), (None, Stack::new()));
/// ```
pub fn pop<T: Clone + 'static>() -> Action<Stack<T>, Option<T>> {
    get().bind(|stack: Stack<T>| {
        let mut rest = stack;
        match rest.pop_back() {
            Some(top) => put(rest).then(pure(Some(top))),
            None => pure(None),
        }
    })
}

/// Remove and return the top of the stack, or fail with
/// [`StackError::Underflow`] if it is empty.
///
/// This is the checked counterpart of [`pop`], which yields `None` instead.
///
/// ```rust
/// use stateless::stack::{push, stackful, try_pop, StackError};
///
/// let (top, _) = stackful(push(7).then(try_pop::<i32>()));
/// assert_eq!(top, Ok(7));
///
/// let (empty, _) = stackful(try_pop::<i32>());
/// assert_eq!(empty, Err(StackError::Underflow { needed: 1, depth: 0 }));
/// ```
pub fn try_pop<T: Clone + 'static>() -> Action<Stack<T>, Result<T, StackError>> {
    pop().map(|top| top.ok_or(StackError::Underflow { needed: 1, depth: 0 }))
}

/// Remove the top `count` elements, returned top first.
///
/// Fails without touching the stack if it holds fewer than `count`.
pub fn try_pop_n<T: Clone + 'static>(
    count: usize,
) -> Action<Stack<T>, Result<Vec<T>, StackError>> {
    get().bind(move |stack: Stack<T>| {
        let depth = stack.len();
        if depth < count {
            return pure(Err(StackError::Underflow {
                needed: count,
                depth,
            }));
        }
        let mut rest = stack;
        let taken = rest.split_off(depth - count);
        let top_first: Vec<T> = taken.iter().rev().cloned().collect();
        put(rest).then(pure(Ok(top_first)))
    })
}

/// The top of the stack, if any, without removing it.
pub fn peek<T: Clone + 'static>() -> Action<Stack<T>, Option<T>> {
    gets(|stack: &Stack<T>| stack.last().cloned())
}

/// Number of elements on the stack.
pub fn depth<T: Clone + 'static>() -> Action<Stack<T>, usize> {
    gets(|stack: &Stack<T>| stack.len())
}

/// Run `computation` against an empty stack.
pub fn stackful<T: Clone + 'static, A: 'static>(
    computation: Action<Stack<T>, A>,
) -> (A, Stack<T>) {
    stackful_from(computation, Stack::new())
}

/// Run `computation` against `initial`.
pub fn stackful_from<T: Clone + 'static, A: 'static>(
    computation: Action<Stack<T>, A>,
    initial: Stack<T>,
) -> (A, Stack<T>) {
    computation.run(initial)
}
