//! Suspension points of a do-notation script.

use crate::core::{Action, Bindable};
use std::fmt;

use super::interpreter::interpret;

/// One step of a suspend/resume script.
///
/// A script is either finished with a value, or suspended on something
/// [`Bindable`] together with the code that resumes it once that result is
/// known. Scripts are consumed by [`interpret`], so a script value can only
/// be driven once.
///
/// Scripts are usually written with the [`state_do!`](crate::state_do) macro
/// rather than built by hand.
///
/// # Example
///
/// ```rust
/// use stateless::core::{get, put};
/// use stateless::notation::{do_return, Script};
///
/// let script: Script<i32, i32> = Script::suspend(get(), |n: i32| {
///     Script::suspend(put(n + 1), move |_| do_return(n * 10))
/// });
///
/// assert_eq!(script.into_action().run(4), (40, 5));
/// ```
pub enum Script<S, A> {
    /// The script is done; `A` is its final result.
    Return(A),

    /// The script is waiting on an action's result.
    Suspend(Suspension<S, A>),
}

/// A suspended script: the pending bindable plus its continuation.
pub struct Suspension<S, A> {
    resume: Box<dyn Resume<S, A>>,
}

impl<S, A> Suspension<S, A> {
    /// Bind the pending action to the continuation, interpreting whatever
    /// the script produces next.
    pub(crate) fn into_action(self) -> Action<S, A> {
        self.resume.bind_continuation()
    }
}

trait Resume<S, A> {
    fn bind_continuation(self: Box<Self>) -> Action<S, A>;
}

struct Pending<M, K> {
    bindable: M,
    continuation: K,
}

impl<S, A, M, K> Resume<S, A> for Pending<M, K>
where
    S: 'static,
    A: Clone + 'static,
    M: Bindable<S>,
    K: Fn(M::Output) -> Script<S, A> + 'static,
{
    fn bind_continuation(self: Box<Self>) -> Action<S, A> {
        let Pending {
            bindable,
            continuation,
        } = *self;
        bindable.bind(move |value| interpret(continuation(value)))
    }
}

impl<S: 'static, A: Clone + 'static> Script<S, A> {
    /// Suspend on `bindable`; `continuation` receives its result and
    /// produces the rest of the script.
    ///
    /// The continuation may be called once per run of the composed action,
    /// so it is `Fn` rather than `FnOnce`.
    ///
    /// Only [`Bindable`] values can be suspended on. Anything else is
    /// rejected when the script is compiled:
    ///
    /// ```compile_fail
    /// use stateless::notation::{do_return, Script};
    ///
    /// let _: Script<i32, ()> = Script::suspend(42, |_| do_return(()));
    /// ```
    ///
    /// Interpreting consumes the script, so the same script cannot be
    /// driven a second time:
    ///
    /// ```compile_fail
    /// use stateless::core::get;
    /// use stateless::notation::{do_return, interpret, Script};
    ///
    /// let script: Script<i32, i32> = Script::suspend(get::<i32>(), |n: i32| do_return(n));
    /// let first = interpret(script);
    /// let second = interpret(script);
    /// ```
    pub fn suspend<M, K>(bindable: M, continuation: K) -> Self
    where
        M: Bindable<S> + 'static,
        K: Fn(M::Output) -> Script<S, A> + 'static,
    {
        Script::Suspend(Suspension {
            resume: Box::new(Pending {
                bindable,
                continuation,
            }),
        })
    }

    /// Fold the whole script into one composed action.
    pub fn into_action(self) -> Action<S, A> {
        interpret(self)
    }
}

impl<S, A> Script<S, A> {
    /// Whether this step is a final result.
    pub fn is_finished(&self) -> bool {
        matches!(self, Script::Return(_))
    }
}

impl<S, A: fmt::Debug> fmt::Debug for Script<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Return(value) => f.debug_tuple("Return").field(value).finish(),
            Script::Suspend(_) => f.write_str("Suspend(..)"),
        }
    }
}
