//! Macros for writing scripts in imperative style.

/// Write a script as a sequence of statements.
///
/// Supported statements:
///
/// - `pat <- action;` runs `action` and binds its result to `pat`
///   (a single token tree: an identifier, `_`, or a parenthesised tuple)
/// - `action;` runs `action` and discards its result
/// - `let pat = expr;` binds a plain value
/// - `return expr` finishes the script with `expr`
/// - a trailing expression without a semicolon must itself be a
///   [`Script`](crate::notation::Script), which allows branching and early
///   returns
///
/// Reaching the end of the block without `return` finishes with `()`.
///
/// Values bound before a suspension point are moved into the following
/// continuation, which may run once per run of the composed action. Clone
/// non-`Copy` values where they are used.
///
/// # Long blocks
///
/// Every statement adds one level of macro expansion, so a block with more
/// than roughly a hundred statements reaches the compiler's default
/// recursion limit. Either raise it at the crate root with
/// `#![recursion_limit = "512"]`, or split the block into smaller scripts
/// and run each one as a statement through [`interpret`]:
///
/// ```
/// use stateless::core::{modify, Action};
/// use stateless::notation::{interpret, Script};
/// use stateless::state_do;
///
/// fn setup() -> Script<Vec<&'static str>, ()> {
///     state_do! {
///         modify(|mut log: Vec<&'static str>| { log.push("open"); log });
///         modify(|mut log: Vec<&'static str>| { log.push("load"); log });
///     }
/// }
///
/// let session: Action<Vec<&'static str>, usize> = interpret(state_do! {
///     interpret(setup());
///     modify(|mut log: Vec<&'static str>| { log.push("close"); log });
///     return 3
/// });
///
/// assert_eq!(session.run(Vec::new()), (3, vec!["open", "load", "close"]));
/// ```
///
/// [`interpret`]: crate::notation::interpret
///
/// # Example
///
/// ```
/// use stateless::core::{get, put};
/// use stateless::notation::interpret;
/// use stateless::state_do;
///
/// let swap = interpret(state_do! {
///     (left, right) <- get::<(i32, i32)>();
///     put((right, left));
///     return left + right
/// });
///
/// assert_eq!(swap.run((1, 2)), (3, (2, 1)));
/// ```
#[macro_export]
macro_rules! state_do {
    () => {
        $crate::notation::Script::Return(())
    };

    (return $value:expr $(;)?) => {
        $crate::notation::do_return($value)
    };

    (let $pat:pat = $value:expr; $($rest:tt)*) => {{
        let $pat = $value;
        $crate::state_do!($($rest)*)
    }};

    ($pat:tt <- $action:expr; $($rest:tt)*) => {
        $crate::notation::Script::suspend($action, move |$pat| {
            $crate::state_do!($($rest)*)
        })
    };

    ($action:expr; $($rest:tt)*) => {
        $crate::notation::Script::suspend($action, move |_| {
            $crate::state_do!($($rest)*)
        })
    };

    ($tail:expr) => {
        $tail
    };
}
