//! Tabular-to-timeseries pivot

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::clickhouse::TabularResponse;
use crate::model::{TimePoint, TimeSeries};
use crate::time_range::ResolvedTimeRange;
use crate::transform::error::{TransformError, TransformResult};

/// Render a wire scalar the way it will be matched and parsed: numbers and
/// booleans by their JSON text, strings by their content, null as "null".
fn scalar_str(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Pivot a columnar result set into named time series.
///
/// The time column is the first meta column; its value must parse as an
/// epoch-millisecond number in every retained row, or the whole transform
/// fails. Rows whose timestamp falls outside the supplied range contribute
/// nothing. Within a row, non-numeric columns build the series name prefix
/// in meta order and numeric columns each append a point to the series
/// keyed `<prefix>.<column>`. Output series appear in first-discovery
/// order; points stay in row-arrival order with no re-sorting.
pub fn pivot(
    table: &TabularResponse,
    range: Option<&ResolvedTimeRange>,
) -> TransformResult<Vec<TimeSeries>> {
    let time_column = match table.meta.first() {
        Some(meta) => meta.name.as_str(),
        None => return Ok(Vec::new()),
    };

    let mut order: Vec<String> = Vec::new();
    let mut points: HashMap<String, Vec<TimePoint>> = HashMap::new();

    for row in &table.data {
        let time_str = scalar_str(row.get(time_column).unwrap_or(&Value::Null));
        let timestamp: f64 = time_str
            .parse()
            .map_err(|_| TransformError::MalformedValue(time_str.clone()))?;

        if let Some(range) = range {
            if (range.from_ms() as f64) > timestamp || (range.to_ms() as f64) < timestamp {
                continue;
            }
        }

        // Dimensional columns for this row only: values that fail numeric
        // parse name the series, in meta order.
        let mut series_name = String::new();
        let mut string_columns: HashSet<&str> = HashSet::new();
        for meta in &table.meta {
            if meta.name == time_column {
                continue;
            }
            let value = scalar_str(row.get(&meta.name).unwrap_or(&Value::Null));
            if value.parse::<f64>().is_err() {
                string_columns.insert(meta.name.as_str());
                series_name.push('.');
                series_name.push_str(&value);
            }
        }

        for meta in &table.meta {
            if meta.name == time_column || string_columns.contains(meta.name.as_str()) {
                continue;
            }
            let value = match scalar_str(row.get(&meta.name).unwrap_or(&Value::Null)).parse::<f64>()
            {
                Ok(v) => v,
                Err(_) => continue,
            };

            let key = format!("{}.{}", series_name, meta.name);
            points
                .entry(key.clone())
                .or_insert_with(|| {
                    order.push(key);
                    Vec::new()
                })
                .push(TimePoint::new(value, timestamp as i64));
        }
    }

    Ok(order
        .into_iter()
        .map(|name| {
            let points = points.remove(&name).unwrap_or_default();
            TimeSeries { name, points }
        })
        .collect())
}
