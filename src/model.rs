//! Data Model
//!
//! Wire-facing types: the per-panel query specification as it arrives from
//! the dashboard, and the named time series handed back for charting. Field
//! names follow the dashboard's JSON document (`dateTimeColDataType`,
//! `intervalFactor`, ...) via serde renames; everything optional in the
//! document is optional here, with defaults applied at the point of use so
//! a malformed query fails on its own rather than sinking the whole batch
//! at deserialization time.

use serde::{Deserialize, Serialize};

/// Output format for the `time_series` dispatch. Only one format is
/// implemented; the string is kept verbatim so unsupported values can be
/// echoed back in the error message.
pub const FORMAT_TIME_SERIES: &str = "time_series";

/// Default database when the query document does not name one.
pub const DEFAULT_DATABASE: &str = "default";

/// Declared type of the datetime column when the document does not say.
pub const DEFAULT_DATE_TIME_TYPE: &str = "DATETIME";

/// One panel query as received from the dashboard, immutable for the
/// duration of its execution.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuerySpec {
    /// Identifier keying this query's slot in the batch response.
    #[serde(rename = "refId")]
    pub ref_id: String,

    /// Raw SQL template containing the placeholder macros.
    pub query: Option<String>,

    pub table: Option<String>,

    pub database: Option<String>,

    /// Name of the DATETIME-typed time column, if any.
    #[serde(rename = "dateTimeColDataType")]
    pub date_time_col: Option<String>,

    /// Name of the DATE-typed time column, used as fallback.
    #[serde(rename = "dateColDataType")]
    pub date_col: Option<String>,

    /// Declared type of the datetime column ("DATETIME" unless overridden).
    #[serde(rename = "dateTimeType")]
    pub date_time_type: Option<String>,

    /// Bucketing interval expression, e.g. "5m".
    pub interval: Option<String>,

    #[serde(rename = "intervalFactor")]
    pub interval_factor: Option<i64>,

    pub format: Option<String>,
}

impl QuerySpec {
    /// The requested output format, defaulting to `time_series`.
    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or(FORMAT_TIME_SERIES)
    }
}

/// A single charted point. `value` is nullable on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimePoint {
    pub value: Option<f64>,
    #[serde(rename = "timestampMs")]
    pub timestamp_ms: i64,
}

impl TimePoint {
    pub fn new(value: f64, timestamp_ms: i64) -> Self {
        Self {
            value: Some(value),
            timestamp_ms,
        }
    }
}

/// A named sequence of points. The name is built from the row's
/// dimensional column values, dot-joined, suffixed with the measure
/// column's name (".hostA.eth0.bytes").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub name: String,
    pub points: Vec<TimePoint>,
}

/// Outcome of one query in a batch: either series or an error message,
/// never both. One query's failure leaves its siblings untouched.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    #[serde(rename = "refId")]
    pub ref_id: String,
    pub series: Vec<TimeSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResult {
    pub fn series(ref_id: impl Into<String>, series: Vec<TimeSeries>) -> Self {
        Self {
            ref_id: ref_id.into(),
            series,
            error: None,
        }
    }

    pub fn error(ref_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ref_id: ref_id.into(),
            series: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_spec_from_json() {
        let spec: QuerySpec = serde_json::from_str(
            r#"{
                "refId": "A",
                "query": "SELECT $timeSeries, count() FROM $table WHERE $timeFilter GROUP BY t",
                "table": "events",
                "dateTimeColDataType": "ts",
                "interval": "5m",
                "intervalFactor": 2
            }"#,
        )
        .unwrap();

        assert_eq!(spec.ref_id, "A");
        assert_eq!(spec.table.as_deref(), Some("events"));
        assert_eq!(spec.date_time_col.as_deref(), Some("ts"));
        assert_eq!(spec.interval.as_deref(), Some("5m"));
        assert_eq!(spec.interval_factor, Some(2));
        assert!(spec.database.is_none());
        assert_eq!(spec.format(), FORMAT_TIME_SERIES);
    }

    #[test]
    fn test_query_spec_tolerates_sparse_document() {
        let spec: QuerySpec = serde_json::from_str(r#"{"refId": "B"}"#).unwrap();
        assert!(spec.query.is_none());
        assert!(spec.table.is_none());
        assert_eq!(spec.format(), FORMAT_TIME_SERIES);
    }

    #[test]
    fn test_query_result_constructors() {
        let ok = QueryResult::series("A", vec![]);
        assert!(!ok.is_error());

        let bad = QueryResult::error("B", "boom");
        assert!(bad.is_error());
        assert!(bad.series.is_empty());
    }
}
