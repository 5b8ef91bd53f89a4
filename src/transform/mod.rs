//! Result Pivot Transform
//!
//! Reshapes the columnar result set coming back from ClickHouse into named
//! time series. The first meta column is the timestamp; every other column
//! is classified per row as dimensional (its value does not parse as a
//! number, so it contributes to the series name) or as a measure (its value
//! does parse, so it contributes a point). The classification is
//! deliberately row-local: a column may name the series in one row and
//! carry a point in the next.

mod error;
mod pivot;

pub use error::{TransformError, TransformResult};
pub use pivot::pivot;
