//! Structured error cases surfaced to callers.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown rule name: `{0}`")]
    UnknownRule(String),
}
