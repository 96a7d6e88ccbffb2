//! The sequencing capability the do-notation interpreter relies on.

use super::action::Action;

/// Anything a script may suspend on.
///
/// A bindable value produces an `Output` when run against a state of type
/// `S`, and can be sequenced with a continuation that picks the next
/// [`Action`] from that output. The interpreter in [`crate::notation`] only
/// ever talks to this trait.
pub trait Bindable<S> {
    /// The result handed to the continuation.
    type Output;

    /// Sequence `self` with `f`, producing the composed action.
    fn bind<B, F>(&self, f: F) -> Action<S, B>
    where
        B: 'static,
        F: Fn(Self::Output) -> Action<S, B> + 'static;
}

impl<S: 'static, A: 'static> Bindable<S> for Action<S, A> {
    type Output = A;

    fn bind<B, F>(&self, f: F) -> Action<S, B>
    where
        B: 'static,
        F: Fn(A) -> Action<S, B> + 'static,
    {
        Action::bind(self, f)
    }
}
