//! Free-function combinators over [`Action`].
//!
//! Every function here is pure: it only builds actions. The `get`/`put`
//! pair is the primitive state access; everything else is expressed through
//! `bind` and `map`.

use super::action::Action;

/// An action yielding `value` with the state left unchanged.
pub fn pure<S: 'static, A: Clone + 'static>(value: A) -> Action<S, A> {
    Action::pure(value)
}

/// An action yielding the current state as its result: `s -> (s, s)`.
///
/// ```rust
/// use stateless::core::get;
///
/// assert_eq!(get().run(3), (3, 3));
/// ```
pub fn get<S: Clone + 'static>() -> Action<S, S> {
    Action::new(|state: S| (state.clone(), state))
}

/// An action replacing the state with `new_state`: `_ -> ((), new_state)`.
///
/// ```rust
/// use stateless::core::put;
///
/// assert_eq!(put("after").run("before"), ((), "after"));
/// ```
pub fn put<S: Clone + 'static>(new_state: S) -> Action<S, ()> {
    Action::new(move |_| ((), new_state.clone()))
}

/// An action replacing the state with `f(state)`.
///
/// Built as `bind(map(get(), f), put)`.
///
/// ```rust
/// use stateless::core::modify;
///
/// let shout = modify(|s: String| s.to_uppercase());
/// assert_eq!(shout.execute("quiet".to_string()), "QUIET");
/// ```
pub fn modify<S, F>(f: F) -> Action<S, ()>
where
    S: Clone + 'static,
    F: Fn(S) -> S + 'static,
{
    bind(&map(&get(), f), put)
}

/// An action yielding a projection of the state without changing it.
pub fn gets<S, A, F>(f: F) -> Action<S, A>
where
    S: 'static,
    A: 'static,
    F: Fn(&S) -> A + 'static,
{
    Action::new(move |state: S| (f(&state), state))
}

/// See [`Action::map`].
pub fn map<S, A, B, F>(action: &Action<S, A>, f: F) -> Action<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + 'static,
{
    action.map(f)
}

/// See [`Action::bind`].
pub fn bind<S, A, B, F>(action: &Action<S, A>, f: F) -> Action<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
    F: Fn(A) -> Action<S, B> + 'static,
{
    action.bind(f)
}

/// See [`Action::then`].
pub fn then<S: 'static, A: 'static, B: 'static>(
    first: &Action<S, A>,
    next: Action<S, B>,
) -> Action<S, B> {
    first.then(next)
}

/// See [`Action::run`].
pub fn run<S: 'static, A: 'static>(action: &Action<S, A>, initial: S) -> (A, S) {
    action.run(initial)
}

/// See [`Action::evaluate`].
pub fn evaluate<S: 'static, A: 'static>(action: &Action<S, A>, initial: S) -> A {
    action.evaluate(initial)
}

/// See [`Action::execute`].
pub fn execute<S: 'static, A: 'static>(action: &Action<S, A>, initial: S) -> S {
    action.execute(initial)
}

/// Run `actions` left to right, threading the state and collecting results.
///
/// ```rust
/// use stateless::core::{sequence, Action};
///
/// let tick: Action<u8, u8> = Action::new(|n| (n, n + 1));
/// let ticks = sequence(vec![tick.clone(), tick.clone(), tick]);
/// assert_eq!(ticks.run(0), (vec![0, 1, 2], 3));
/// ```
pub fn sequence<S, A, I>(actions: I) -> Action<S, Vec<A>>
where
    S: 'static,
    A: 'static,
    I: IntoIterator<Item = Action<S, A>>,
{
    let actions: Vec<Action<S, A>> = actions.into_iter().collect();
    Action::new(move |mut state| {
        let mut results = Vec::with_capacity(actions.len());
        for action in &actions {
            let (value, next) = action.run(state);
            results.push(value);
            state = next;
        }
        (results, state)
    })
}
