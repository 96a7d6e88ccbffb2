//! The `Action` type: a pure state transition `S -> (A, S)`.
//!
//! Actions are immutable values. Composing them builds new actions and never
//! touches the originals, and nothing runs until [`Action::run`] is called.

use std::fmt;
use std::rc::Rc;

/// What a transition hands back to the runner.
///
/// `bind` answers with `Continue` instead of running its second half itself,
/// which lets [`Action::run`] drive right-nested chains with a loop.
enum Step<S, A> {
    Done(A, S),
    Continue(Action<S, A>, S),
}

type Transition<S, A> = Rc<dyn Fn(S) -> Step<S, A>>;

/// A computation that, given a state, produces a value and a new state.
///
/// `Action<S, A>` wraps exactly one transition function `S -> (A, S)`.
/// The function is expected to be pure: running the same action twice from
/// the same state must give the same pair.
///
/// Cloning an action is cheap (the transition is reference counted).
///
/// # Example
///
/// ```rust
/// use stateless::core::Action;
///
/// let double_and_count: Action<u32, u32> = Action::new(|count| (count * 2, count + 1));
///
/// assert_eq!(double_and_count.run(10), (20, 11));
/// assert_eq!(double_and_count.evaluate(10), 20);
/// assert_eq!(double_and_count.execute(10), 11);
/// ```
pub struct Action<S, A> {
    transition: Transition<S, A>,
}

impl<S: 'static, A: 'static> Action<S, A> {
    /// Create an action from a transition function.
    ///
    /// The function receives the incoming state and returns
    /// `(result, new_state)`.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self::from_step(move |state| {
            let (value, state) = transition(state);
            Step::Done(value, state)
        })
    }

    fn from_step<F>(transition: F) -> Self
    where
        F: Fn(S) -> Step<S, A> + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// An action that ignores the state and yields `value`.
    ///
    /// This is the identity for [`bind`](Action::bind).
    ///
    /// ```rust
    /// use stateless::core::Action;
    ///
    /// let answer: Action<&str, i32> = Action::pure(42);
    /// assert_eq!(answer.run("untouched"), (42, "untouched"));
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Run this action from `state`, returning `(result, final_state)`.
    ///
    /// Panics raised by the transition (or anything it composes) propagate
    /// unchanged. Nothing is retried.
    pub fn run(&self, state: S) -> (A, S) {
        let mut step = (self.transition)(state);
        loop {
            match step {
                Step::Done(value, state) => return (value, state),
                Step::Continue(next, state) => step = (next.transition)(state),
            }
        }
    }

    /// Run and keep only the result.
    pub fn evaluate(&self, state: S) -> A {
        self.run(state).0
    }

    /// Run and keep only the final state.
    pub fn execute(&self, state: S) -> S {
        self.run(state).1
    }

    /// Transform the result of this action, leaving its effect on the state
    /// as is.
    ///
    /// ```rust
    /// use stateless::core::{get, Action};
    ///
    /// let length = get::<String>().map(|s| s.len());
    /// assert_eq!(length.run("abc".to_string()), (3, "abc".to_string()));
    /// ```
    pub fn map<B, F>(&self, f: F) -> Action<S, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let inner = self.clone();
        Action::new(move |state| {
            let (value, state) = inner.run(state);
            (f(value), state)
        })
    }

    /// Sequence this action with one computed from its result.
    ///
    /// The returned action runs `self` on the incoming state to get
    /// `(a, s2)`, then runs `f(a)` from `s2`.
    ///
    /// ```rust
    /// use stateless::core::{get, put, Action};
    ///
    /// let increment = get::<i32>().bind(|n| put(n + 1).then(Action::pure(n)));
    /// assert_eq!(increment.run(41), (41, 42));
    /// ```
    ///
    /// # Long chains
    ///
    /// Only the second half of a `bind` is handed back to [`run`](Action::run)
    /// as a tail call. A right-nested chain such as
    /// `a.bind(|_| b.bind(|_| c))` therefore runs in constant stack, while a
    /// left-nested one such as `a.bind(..).bind(..).bind(..)` uses one stack
    /// frame per level. Chains of many thousands of steps should be built
    /// right-nested, for example by folding from the last step backwards or
    /// by producing the rest of the chain inside the continuation:
    ///
    /// ```rust
    /// use stateless::core::{modify, Action};
    ///
    /// fn count_down(remaining: u32) -> Action<u32, u32> {
    ///     if remaining == 0 {
    ///         Action::new(|n| (n, n))
    ///     } else {
    ///         modify(|n: u32| n + 1).bind(move |()| count_down(remaining - 1))
    ///     }
    /// }
    ///
    /// assert_eq!(count_down(100_000).run(0), (100_000, 100_000));
    /// ```
    pub fn bind<B, F>(&self, f: F) -> Action<S, B>
    where
        B: 'static,
        F: Fn(A) -> Action<S, B> + 'static,
    {
        let first = self.clone();
        Action::from_step(move |state| {
            let (value, state) = first.run(state);
            Step::Continue(f(value), state)
        })
    }

    /// Run `self`, discard its result, then run `next`.
    pub fn then<B>(&self, next: Action<S, B>) -> Action<S, B>
    where
        B: 'static,
    {
        self.bind(move |_| next.clone())
    }
}

impl<S, A> Clone for Action<S, A> {
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, A> fmt::Debug for Action<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").finish_non_exhaustive()
    }
}
