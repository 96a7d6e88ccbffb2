//! Stack errors.

use thiserror::Error;

/// Errors returned in-band by the fallible stack actions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StackError {
    #[error("Stack underflow: needed {needed} element(s), found {depth}")]
    Underflow { needed: usize, depth: usize },
}
