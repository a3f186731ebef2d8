//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent contract violations of the container operations.
/// Nothing is clamped or partially applied when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{op}: index {index} out of range (bound {bound})")]
    IndexOutOfRange {
        op: &'static str,
        index: usize,
        bound: usize,
    },

    #[error("{op}: collection is empty")]
    EmptyCollection { op: &'static str },

    #[error("unknown tree node: {0}")]
    UnknownNode(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
