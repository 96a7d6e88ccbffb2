//! Folding scripts into composed actions.

use super::script::Script;
use crate::core::Action;
use tracing::{debug, trace};

/// Fold `script` into a single action.
///
/// A finished script becomes `pure(value)`. A suspended one becomes
/// `bindable.bind(|result| interpret(continuation(result)))`, so each later
/// suspension point is only reached when the composed action is run.
/// Nothing state-dependent executes here.
///
/// A panic raised inside a continuation while the action runs is never
/// caught or turned into a result.
pub fn interpret<S, A>(script: Script<S, A>) -> Action<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    trace!(finished = script.is_finished(), "interpreting script step");
    match script {
        Script::Return(value) => Action::pure(value),
        Script::Suspend(suspension) => suspension.into_action(),
    }
}

/// Mark `value` as the final result of a script.
///
/// ```rust
/// use stateless::notation::{do_return, interpret};
///
/// let done = interpret(do_return::<(), _>("finished"));
/// assert_eq!(done.evaluate(()), "finished");
/// ```
pub fn do_return<S, A>(value: A) -> Script<S, A> {
    Script::Return(value)
}

/// Turn a script function into a function returning composed actions.
///
/// Each call invokes `script_fn` to get a fresh script and interprets it.
/// Script functions that take several inputs take them as a tuple; ones
/// with no input take `()`.
///
/// ```rust
/// use stateless::core::{modify, Action};
/// use stateless::notation::do_notation;
/// use stateless::state_do;
///
/// let add = do_notation(|amount: i32| {
///     state_do! {
///         modify(move |total: i32| total + amount);
///         return amount
///     }
/// });
///
/// let action: Action<i32, i32> = add(5).then(add(6));
/// assert_eq!(action.run(100), (6, 111));
/// ```
pub fn do_notation<Args, S, A, F>(script_fn: F) -> impl Fn(Args) -> Action<S, A>
where
    S: 'static,
    A: Clone + 'static,
    F: Fn(Args) -> Script<S, A>,
{
    move |args| {
        debug!(
            result = std::any::type_name::<A>(),
            "composing script into action"
        );
        interpret(script_fn(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{get, modify, put, Action};
    use std::cell::Cell;
    use std::rc::Rc;

    fn increment_and_report() -> Script<u32, u32> {
        Script::suspend(get(), |before: u32| {
            Script::suspend(put(before + 1), move |_| do_return(before))
        })
    }

    #[test]
    fn return_becomes_pure() {
        let action = interpret::<&str, _>(do_return(9));
        assert_eq!(action.run("state"), (9, "state"));
    }

    #[test]
    fn matches_hand_written_chain() {
        let scripted = interpret(increment_and_report());
        let by_hand: Action<u32, u32> =
            get().bind(|before: u32| put(before + 1).then(Action::pure(before)));

        for initial in [0, 1, 41, 999] {
            assert_eq!(scripted.run(initial), by_hand.run(initial));
        }
    }

    #[test]
    fn composed_action_is_lazy() {
        let resumed = Rc::new(Cell::new(0));
        let seen = Rc::clone(&resumed);
        let script: Script<i32, i32> = Script::suspend(get(), move |n: i32| {
            seen.set(seen.get() + 1);
            do_return(n)
        });

        let action = interpret(script);
        assert_eq!(resumed.get(), 0);

        assert_eq!(action.run(3), (3, 3));
        assert_eq!(resumed.get(), 1);
    }

    #[test]
    fn early_return_skips_remaining_script() {
        let reached = Rc::new(Cell::new(false));
        let flag = Rc::clone(&reached);
        let script: Script<i32, &str> = Script::suspend(get(), move |n: i32| {
            if n > 10 {
                return do_return("too big");
            }
            let flag = Rc::clone(&flag);
            Script::suspend(put(0), move |_| {
                flag.set(true);
                do_return("reset")
            })
        });

        let action = interpret(script);
        assert_eq!(action.run(50), ("too big", 50));
        assert!(!reached.get());

        assert_eq!(action.run(5), ("reset", 0));
        assert!(reached.get());
    }

    #[test]
    fn reruns_give_identical_results() {
        let action = interpret(increment_and_report());
        assert_eq!(action.run(7), (7, 8));
        assert_eq!(action.run(7), (7, 8));
    }

    #[test]
    fn do_notation_builds_fresh_action_per_call() {
        let scale = do_notation(|factor: i32| {
            Script::suspend(modify(move |n: i32| n * factor), |_| {
                Script::suspend(get(), |n: i32| do_return(n))
            })
        });

        assert_eq!(scale(2).run(5), (10, 10));
        assert_eq!(scale(3).then(scale(4)).run(1), (12, 12));
    }

    #[test]
    #[should_panic(expected = "continuation failed")]
    fn continuation_panic_is_not_swallowed() {
        let script: Script<(), ()> = Script::suspend(get(), |_: ()| -> Script<(), ()> {
            panic!("continuation failed")
        });
        interpret(script).run(());
    }

    #[test]
    fn interprets_the_same_with_trace_logging_enabled() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            interpret(increment_and_report()).run(20)
        });
        assert_eq!(result, (20, 21));
    }

    #[test]
    fn long_script_does_not_grow_the_stack() {
        fn count_to(limit: u64) -> Script<u64, u64> {
            Script::suspend(modify(|n: u64| n + 1), move |_| {
                Script::suspend(get(), move |n: u64| {
                    if n >= limit {
                        do_return(n)
                    } else {
                        count_to(limit)
                    }
                })
            })
        }

        assert_eq!(interpret(count_to(100_000)).run(0), (100_000, 100_000));
    }
}
