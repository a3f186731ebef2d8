//! Application-level errors (wraps domain errors)

use std::num::ParseIntError;

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add conversion context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("invalid number: {value:?}")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid number at line {line}, column {column}: {value:?}")]
    InvalidCell {
        line: usize,
        column: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("integer overflow in {operation}")]
    Overflow { operation: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
