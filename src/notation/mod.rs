//! Do-notation: imperative-looking scripts over actions.
//!
//! A script is a chain of suspension points. Each point either suspends on a
//! [`Bindable`](crate::core::Bindable) action and names the code to resume
//! with its result, or returns a final value. The interpreter folds the chain
//! into one composed [`Action`](crate::core::Action) using only `bind`.
//!
//! # Key Concepts
//!
//! - **Script**: `Return(value)` or `Suspend(..)`, consumed once
//! - **Interpreter**: `interpret` turns a script into an action without
//!   running anything
//! - **Notation**: the `state_do!` macro writes scripts statement by statement
//!
//! # Laziness
//!
//! Only the first suspension point exists before the composed action runs.
//! Every later point is produced by a continuation during the run, so long
//! scripts are neither built nor interpreted up front.

mod interpreter;
pub mod macros;
mod script;

pub use interpreter::{do_notation, do_return, interpret};
pub use script::{Script, Suspension};
