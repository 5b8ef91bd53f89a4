//! Time Range Normalization
//!
//! A dashboard time range arrives as two strings: `from` is a relative
//! offset in the interval grammar ("6h" meaning six hours ago), and `to` is
//! either the literal `"now"` or another relative expression carrying a `-`
//! separator. Normalization anchors both endpoints to a wall-clock instant
//! captured once per batch, so every query in the batch sees the same
//! window.

use serde::Deserialize;

use crate::interval::interval_to_seconds;

/// The raw `(from, to)` window bounding a query batch. Shared read-only
/// across all queries in one request.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

impl TimeRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Whether the upper endpoint is the literal `"now"`. Controls the
    /// single-sided form of the generated time filter.
    pub fn to_is_now(&self) -> bool {
        self.to == "now"
    }

    /// Resolve both endpoints against a captured `now` (epoch seconds).
    ///
    /// `from` is always treated as an offset back from `now`. `to` is `now`
    /// itself unless the string carries a `-` separator marking a relative
    /// "ago" expression. Malformed expressions fall back through the
    /// interval resolver's lenient 1-second default; this never fails.
    pub fn resolve(&self, now: i64) -> ResolvedTimeRange {
        let from = now - interval_to_seconds(&self.from);

        let mut to = now;
        if self.to.split('-').count() > 1 {
            to -= interval_to_seconds(&self.to);
        }

        ResolvedTimeRange { from, to }
    }
}

/// A time range with both endpoints resolved to concrete epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTimeRange {
    pub from: i64,
    pub to: i64,
}

impl ResolvedTimeRange {
    pub fn from_ms(&self) -> i64 {
        self.from * 1000
    }

    pub fn to_ms(&self) -> i64 {
        self.to * 1000
    }

    /// Render both endpoints as SQL literals. DATETIME columns compare
    /// against the raw epoch integer; DATE columns need the value wrapped
    /// in a `toDate(..)` cast because they are not second-granular.
    pub fn literals(&self, is_date_time: bool) -> (String, String) {
        if is_date_time {
            (self.from.to_string(), self.to.to_string())
        } else {
            (format!("toDate({})", self.from), format!("toDate({})", self.to))
        }
    }
}
