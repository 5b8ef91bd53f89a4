//! `FORMAT JSON` response shape
//!
//! ClickHouse returns column metadata plus rows keyed by column name, with
//! scalars loosely typed (wide integers arrive as JSON strings). The
//! transform layer re-parses each scalar per row, so values stay as raw
//! `serde_json::Value` here.

use serde::Deserialize;
use serde_json::{Map, Value};

/// One column's metadata. The time column is conventionally first.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnMeta {
    pub name: String,
    pub r#type: String,
}

/// The tabular result of one query.
#[derive(Debug, Clone, Deserialize)]
pub struct TabularResponse {
    #[serde(default)]
    pub meta: Vec<ColumnMeta>,
    #[serde(default)]
    pub data: Vec<Map<String, Value>>,
    #[serde(default)]
    pub rows: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_format_json_body() {
        let body = r#"{
            "meta": [
                {"name": "t", "type": "UInt64"},
                {"name": "requests", "type": "UInt64"}
            ],
            "data": [
                {"t": "1600000000000", "requests": 42},
                {"t": "1600000300000", "requests": 17}
            ],
            "rows": 2
        }"#;

        let response: TabularResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.meta.len(), 2);
        assert_eq!(response.meta[0].name, "t");
        assert_eq!(response.meta[1].r#type, "UInt64");
        assert_eq!(response.rows, 2);
        assert_eq!(response.data[0]["requests"], 42);
    }

    #[test]
    fn test_deserialize_tolerates_missing_sections() {
        let response: TabularResponse = serde_json::from_str("{}").unwrap();
        assert!(response.meta.is_empty());
        assert!(response.data.is_empty());
        assert_eq!(response.rows, 0);
    }
}
