//! Templater error types

use thiserror::Error;

/// Errors that can occur while substituting query macros
#[derive(Error, Debug)]
pub enum TemplateError {
    /// A required query document field is absent (the query text itself,
    /// or a resolvable time column for a time-dependent macro)
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A placeholder token survived all substitution passes
    #[error("Unsupported placeholder '{0}': only $table, $timeSeries, $timeFilter and $interval are supported")]
    UnsupportedPlaceholder(String),
}

/// Result type for templating operations
pub type TemplateResult<T> = Result<T, TemplateError>;
