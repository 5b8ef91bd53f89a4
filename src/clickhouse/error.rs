//! Transport error types

use thiserror::Error;

/// Errors that can occur while talking to the ClickHouse endpoint
#[derive(Error, Debug)]
pub enum ClientError {
    /// The HTTP round trip itself failed
    #[error("Request is failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body came back but is not valid tabular JSON
    #[error("Cannot parse the response: {0}")]
    MalformedResponse(String),
}

/// Result type for transport operations
pub type ClientResult<T> = Result<T, ClientError>;
