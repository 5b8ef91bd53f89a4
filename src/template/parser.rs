//! Macro substitution passes
//!
//! Substitution order matters: `$interval` first (purely textual), then
//! `$timeSeries`, `$table`, `$timeFilter`, and finally a leftover scan for
//! any `$word` token the earlier passes did not consume. The leftover scan
//! is what rejects unknown macros, so every recognized pass must run before
//! it.
//!
//! Leniency is asymmetric on purpose: a missing `table` leaves the `$table`
//! token untouched (the leftover scan turns that into an error later), a
//! missing `database` falls back to `"default"`, but a time-dependent macro
//! with no resolvable time column fails immediately.

use regex::{NoExpand, Regex};

use crate::interval::effective_interval;
use crate::model::{QuerySpec, DEFAULT_DATABASE, DEFAULT_DATE_TIME_TYPE};
use crate::template::error::{TemplateError, TemplateResult};
use crate::time_range::TimeRange;

/// The time column resolved from a query document: its name and whether it
/// is DATETIME-typed (second-granular) as opposed to a plain DATE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeColumn {
    pub name: String,
    pub is_date_time: bool,
}

impl TimeColumn {
    /// Resolve which column carries time. The datetime column is preferred
    /// with its declared type (DATETIME unless overridden); an absent or
    /// empty datetime name falls back to the date column with its type
    /// forced to DATE. Neither present is an immediate error.
    pub fn resolve(spec: &QuerySpec) -> TemplateResult<Self> {
        if spec.date_time_col.is_none() && spec.date_col.is_none() {
            return Err(TemplateError::MissingField(
                "dateTimeColDataType".to_string(),
            ));
        }

        match spec.date_time_col.as_deref() {
            Some(name) if !name.is_empty() => Ok(Self {
                name: name.to_string(),
                is_date_time: spec
                    .date_time_type
                    .as_deref()
                    .unwrap_or(DEFAULT_DATE_TIME_TYPE)
                    == DEFAULT_DATE_TIME_TYPE,
            }),
            _ => Ok(Self {
                name: spec.date_col.clone().unwrap_or_default(),
                is_date_time: false,
            }),
        }
    }
}

/// Substitute all recognized macros in the query template, then reject any
/// placeholder token that remains.
pub fn substitute(spec: &QuerySpec, range: &TimeRange, now: i64) -> TemplateResult<String> {
    let query = spec
        .query
        .as_deref()
        .ok_or_else(|| TemplateError::MissingField("query".to_string()))?;

    let mut formatted = query.trim().to_string();
    formatted = substitute_interval(&formatted, spec);
    formatted = substitute_time_series(&formatted, spec)?;
    formatted = substitute_table(&formatted, spec);
    formatted = substitute_time_filter(&formatted, spec, range, now)?;

    let leftover = Regex::new(r"\$\w*").expect("placeholder regex");
    if let Some(m) = leftover.find(&formatted) {
        return Err(TemplateError::UnsupportedPlaceholder(m.as_str().to_string()));
    }

    Ok(formatted)
}

/// Replace `$interval` with the effective interval in seconds.
fn substitute_interval(query: &str, spec: &QuerySpec) -> String {
    let re = Regex::new(r"\$interval").expect("macro regex");
    if !re.is_match(query) {
        return query.to_string();
    }

    let interval = effective_interval(spec.interval.as_deref(), spec.interval_factor);
    re.replace_all(query, NoExpand(&interval.to_string()))
        .into_owned()
}

/// Replace `$timeSeries` with a bucketing expression over the time column:
/// integer-divide by the effective interval, multiply back, scale to
/// milliseconds. DATE columns are widened with `toUInt32` first since they
/// are not natively second-granular.
fn substitute_time_series(query: &str, spec: &QuerySpec) -> TemplateResult<String> {
    let re = Regex::new(r"\$timeSeries").expect("macro regex");
    if !re.is_match(query) {
        return Ok(query.to_string());
    }

    let column = TimeColumn::resolve(spec)?;
    let interval = effective_interval(spec.interval.as_deref(), spec.interval_factor);
    let expr = if column.is_date_time {
        format!(
            "(intDiv({}, {}) * {}) * 1000",
            column.name, interval, interval
        )
    } else {
        format!(
            "(intDiv(toUInt32({}), {}) * {}) * 1000",
            column.name, interval, interval
        )
    };

    Ok(re.replace_all(query, NoExpand(&expr)).into_owned())
}

/// Replace `$table` with `<database>.<table>`. A missing table leaves the
/// token in place; a missing database falls back to `"default"`.
fn substitute_table(query: &str, spec: &QuerySpec) -> String {
    let re = Regex::new(r"\$table").expect("macro regex");
    if !re.is_match(query) {
        return query.to_string();
    }

    let table = match spec.table.as_deref() {
        Some(table) => table,
        None => return query.to_string(),
    };
    let database = spec.database.as_deref().unwrap_or(DEFAULT_DATABASE);

    re.replace_all(query, NoExpand(&format!("{}.{}", database, table)))
        .into_owned()
}

/// Replace `$timeFilter` with a predicate bounding the time column by the
/// resolved range: single-sided `col >= from` when the range is open-ended
/// at "now", `col BETWEEN from AND to` otherwise.
fn substitute_time_filter(
    query: &str,
    spec: &QuerySpec,
    range: &TimeRange,
    now: i64,
) -> TemplateResult<String> {
    let re = Regex::new(r"\$timeFilter").expect("macro regex");
    if !re.is_match(query) {
        return Ok(query.to_string());
    }

    let column = TimeColumn::resolve(spec)?;
    let (from, to) = range.resolve(now).literals(column.is_date_time);

    let predicate = if range.to_is_now() {
        format!("{} >= {}", column.name, from)
    } else {
        format!("{} BETWEEN {} AND {}", column.name, from, to)
    };

    Ok(re.replace_all(query, NoExpand(&predicate)).into_owned())
}
