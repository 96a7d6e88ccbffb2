//! Stateless: composable state actions with do-notation
//!
//! Stateless threads an immutable state value through a chain of
//! computations without passing it around by hand. The core is a small
//! combinator algebra over [`Action`], a pure transition `S -> (A, S)`.
//! On top of it, scripts written with [`state_do!`] read like imperative
//! code and are folded into a single composed action by the interpreter.
//!
//! # Core Concepts
//!
//! - **Action**: an immutable, cheaply cloneable state transition
//! - **Combinators**: `pure`, `get`, `put`, `modify`, `map`, `bind`, `then`
//! - **Scripts**: suspension points folded into an action with `bind`
//! - **Stack**: push/pop over a persistent vector, built on the core
//!
//! Nothing runs until [`Action::run`] (or `evaluate`/`execute`) is called,
//! and a composed action can be run any number of times.
//!
//! # Example
//!
//! ```rust
//! use stateless::core::{get, modify, Action};
//! use stateless::notation::interpret;
//! use stateless::state_do;
//!
//! let label_and_bump: Action<u32, String> = interpret(state_do! {
//!     before <- get::<u32>();
//!     modify(|n: u32| n + 1);
//!     after <- get::<u32>();
//!     return format!("{before} -> {after}")
//! });
//!
//! assert_eq!(label_and_bump.run(1), ("1 -> 2".to_string(), 2));
//! assert_eq!(label_and_bump.run(1), ("1 -> 2".to_string(), 2));
//! ```

pub mod core;
pub mod notation;
pub mod stack;

// Re-export commonly used types
pub use crate::core::{Action, Bindable};
pub use notation::{do_notation, do_return, interpret, Script};
