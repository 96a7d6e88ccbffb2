//! The combinator core: actions and the functions that build them.
//!
//! This module contains the pure functional core of the crate:
//! - The `Action` type wrapping a state transition
//! - The `Bindable` capability used by the do-notation interpreter
//! - Free-function combinators (`pure`, `get`, `put`, `modify`, ...)
//!
//! Nothing in this module executes a transition except `run` and its
//! `evaluate`/`execute` projections.

mod action;
mod bindable;
mod combinators;

pub use action::Action;
pub use bindable::Bindable;
pub use combinators::{
    bind, evaluate, execute, get, gets, map, modify, pure, put, run, sequence, then,
};
