//! Query Templater
//!
//! Rewrites a raw dashboard SQL template by substituting the four
//! recognized placeholder macros with generated SQL fragments:
//!
//! - `$table` — `<database>.<table>` from the query document
//! - `$interval` — the effective bucketing interval, in seconds
//! - `$timeSeries` — a bucketing expression over the time column
//! - `$timeFilter` — a boolean predicate bounding the time column
//!
//! This is deliberately not a SQL parser: each macro is a literal token
//! located by pattern matching and replaced textually, and any `$word`
//! token still present after all four passes fails the whole parse.

mod error;
mod parser;

pub use error::{TemplateError, TemplateResult};
pub use parser::{substitute, TimeColumn};
