//! Property-based tests for the combinator laws.
//!
//! These tests use proptest to check that the monad laws and the
//! state-access laws hold across many generated states and actions.

use proptest::prelude::*;
use stateless::core::{bind, evaluate, execute, get, map, modify, pure, put, run, Action};
use stateless::notation::interpret;
use stateless::stack::{pop, push, stackful, Stack};
use stateless::state_do;

/// A small family of actions over `i64` state, picked by index so that
/// proptest can generate and shrink them.
fn sample_action(kind: u8, k: i64) -> Action<i64, i64> {
    match kind % 5 {
        0 => pure(k),
        1 => get(),
        2 => put(k).then(pure(k)),
        3 => modify(move |s: i64| s.wrapping_add(k)).then(get()),
        _ => Action::new(move |s: i64| (s.wrapping_mul(k), s.wrapping_sub(k))),
    }
}

fn sample_fn(kind: u8, k: i64) -> impl Fn(i64) -> Action<i64, i64> + Clone + 'static {
    move |x: i64| sample_action(kind, x.wrapping_add(k))
}

prop_compose! {
    fn arbitrary_action()(kind in 0..5u8, k in -50i64..50) -> Action<i64, i64> {
        sample_action(kind, k)
    }
}

proptest! {
    #[test]
    fn left_identity(x in any::<i64>(), kind in 0..5u8, k in -50i64..50, s in any::<i64>()) {
        let f = sample_fn(kind, k);
        let lhs = bind(&pure(x), f.clone());
        prop_assert_eq!(evaluate(&lhs, s), evaluate(&f(x), s));
        prop_assert_eq!(run(&lhs, s), run(&f(x), s));
    }

    #[test]
    fn right_identity(m in arbitrary_action(), s in any::<i64>()) {
        let lhs = bind(&m, pure);
        prop_assert_eq!(run(&lhs, s), run(&m, s));
    }

    #[test]
    fn associativity(
        m in arbitrary_action(),
        f_kind in 0..5u8,
        f_k in -50i64..50,
        g_kind in 0..5u8,
        g_k in -50i64..50,
        s in any::<i64>(),
    ) {
        let f = sample_fn(f_kind, f_k);
        let g = sample_fn(g_kind, g_k);

        let left = bind(&bind(&m, f.clone()), g.clone());
        let right = bind(&m, move |x| bind(&f(x), g.clone()));
        prop_assert_eq!(run(&left, s), run(&right, s));
    }

    #[test]
    fn get_put_round_trip(s in any::<i64>()) {
        prop_assert_eq!(run(&bind(&get(), put), s), ((), s));
    }

    #[test]
    fn put_then_get_reads_back(first in any::<i64>(), second in any::<i64>()) {
        let action = put(second).then(get());
        prop_assert_eq!(run(&action, first), (second, second));
    }

    #[test]
    fn map_fidelity(m in arbitrary_action(), s in any::<i64>(), k in -50i64..50) {
        let f = move |x: i64| x.wrapping_mul(3).wrapping_add(k);
        let mapped = map(&m, f);

        prop_assert_eq!(evaluate(&mapped, s), f(evaluate(&m, s)));
        prop_assert_eq!(execute(&mapped, s), execute(&m, s));
        prop_assert_eq!(run(&mapped, s), run(&bind(&m, move |x| pure(f(x))), s));
    }

    #[test]
    fn runs_are_repeatable(m in arbitrary_action(), s in any::<i64>()) {
        prop_assert_eq!(run(&m, s), run(&m, s));
    }

    #[test]
    fn script_matches_bind_chain(s in any::<i64>(), k in -50i64..50) {
        let scripted = interpret(state_do! {
            a <- get::<i64>();
            put(a.wrapping_add(k));
            b <- get::<i64>();
            return a.wrapping_sub(b)
        });
        let by_hand = get::<i64>().bind(move |a| {
            put(a.wrapping_add(k)).then(get().map(move |b: i64| a.wrapping_sub(b)))
        });

        prop_assert_eq!(run(&scripted, s), run(&by_hand, s));
    }

    #[test]
    fn push_then_pop_restores_stack(
        initial in prop::collection::vec(any::<i32>(), 0..10),
        value in any::<i32>(),
    ) {
        let initial: Stack<i32> = initial.into_iter().collect();
        let action = push(value).then(pop::<i32>());
        let (popped, after) = action.run(initial.clone());

        prop_assert_eq!(popped, Some(value));
        prop_assert_eq!(after, initial);
    }

    #[test]
    fn pushes_stack_in_order(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let pushes = values
            .iter()
            .fold(Action::pure(()), |acc: Action<Stack<i32>, ()>, v| acc.then(push(*v)));
        let (stack_values, final_stack) = stackful(pushes.then(get()));

        prop_assert_eq!(stack_values.iter().copied().collect::<Vec<_>>(), values.clone());
        prop_assert_eq!(final_stack.len(), values.len());
    }
}
