//! Interval Resolution
//!
//! Converts human-authored interval expressions ("5m", "30s") into a length
//! in seconds. The grammar is `<positive integer><unit>` with units
//! s/m/h/d. Any input that does not fit the grammar resolves to 1 second:
//! the resolver is total and never fails, so malformed intervals degrade to
//! the finest granularity instead of aborting the query. Callers that need
//! strict validation must pre-check the expression themselves.

use regex::Regex;

/// Seconds per recognized unit suffix.
fn unit_seconds(unit: &str) -> Option<i64> {
    match unit {
        "s" => Some(1),
        "m" => Some(60),
        "h" => Some(3600),
        "d" => Some(86400),
        _ => None,
    }
}

/// Convert an interval expression to seconds, e.g. `"5m"` => 300.
///
/// Empty, unparseable, unknown-unit, or non-positive input yields 1.
pub fn interval_to_seconds(expr: &str) -> i64 {
    if expr.is_empty() {
        return 1;
    }

    let re = Regex::new(r"^(\d+)(\w+)$").expect("interval grammar regex");
    if let Some(caps) = re.captures(expr) {
        let value: i64 = match caps[1].parse() {
            Ok(v) => v,
            Err(_) => return 1,
        };
        if let Some(step) = unit_seconds(&caps[2]) {
            if value > 0 {
                // Absurdly large values overflow; stay total and degrade.
                if let Some(seconds) = value.checked_mul(step) {
                    return seconds;
                }
            }
        }
    }

    1
}

/// Effective interval in seconds: the interval expression scaled by an
/// integer factor. A missing factor behaves as 1; a missing expression
/// resolves to 1 second.
pub fn effective_interval(expr: Option<&str>, factor: Option<i64>) -> i64 {
    factor
        .unwrap_or(1)
        .checked_mul(interval_to_seconds(expr.unwrap_or("")))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes() {
        assert_eq!(interval_to_seconds("5m"), 300);
    }

    #[test]
    fn test_hours() {
        assert_eq!(interval_to_seconds("2h"), 7200);
    }

    #[test]
    fn test_seconds_and_days() {
        assert_eq!(interval_to_seconds("30s"), 30);
        assert_eq!(interval_to_seconds("1d"), 86400);
    }

    #[test]
    fn test_empty_defaults_to_one() {
        assert_eq!(interval_to_seconds(""), 1);
    }

    #[test]
    fn test_garbage_defaults_to_one() {
        assert_eq!(interval_to_seconds("abc"), 1);
        assert_eq!(interval_to_seconds("5x"), 1);
        assert_eq!(interval_to_seconds("m5"), 1);
        assert_eq!(interval_to_seconds("5m-ago"), 1);
    }

    #[test]
    fn test_zero_value_defaults_to_one() {
        assert_eq!(interval_to_seconds("0m"), 1);
    }

    #[test]
    fn test_overflowing_value_defaults_to_one() {
        // One day past the largest representable day count.
        assert_eq!(interval_to_seconds("106751991167301d"), 1);
        // Too many digits for the value itself.
        assert_eq!(interval_to_seconds("99999999999999999999s"), 1);
    }

    #[test]
    fn test_effective_interval() {
        assert_eq!(effective_interval(Some("10s"), Some(3)), 30);
        assert_eq!(effective_interval(Some("5m"), None), 300);
        assert_eq!(effective_interval(None, Some(4)), 4);
        assert_eq!(effective_interval(None, None), 1);
    }

    #[test]
    fn test_effective_interval_overflow_defaults_to_one() {
        assert_eq!(effective_interval(Some("1d"), Some(i64::MAX)), 1);
    }
}
