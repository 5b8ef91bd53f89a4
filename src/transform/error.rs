//! Transform error types

use thiserror::Error;

/// Errors that can occur while pivoting a result table
#[derive(Error, Debug)]
pub enum TransformError {
    /// A value that must be numeric (the time column) did not parse.
    /// Fatal for the whole transform: it signals a response whose shape
    /// violates the time-column-first contract, not a bad row.
    #[error("Cannot parse float {0}")]
    MalformedValue(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
