//! Timestamp helpers for inspection records.
//!
//! Inspection timestamps arrive as free-form strings from the dashboard
//! (ISO 8601 with offset, naive date-times, or bare `YYYY-MM-DD` dates from
//! date pickers). Parsing is lenient and never fails loudly: an unparseable
//! value yields `None` and the caller decides what that means.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Abbreviated English month names, indexed by `month0()`.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parse a timestamp string into UTC.
///
/// Accepted forms, in order:
/// 1. RFC 3339 (`2024-01-15T08:30:00.000Z`, `2024-01-15T08:30:00+02:00`)
/// 2. Naive date-time, interpreted as UTC (`2024-01-15T08:30:00`)
/// 3. Bare date, interpreted as UTC midnight (`2024-01-15`)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    parse_date(raw).map(start_of_day)
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// First instant of `date` in UTC.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

/// Last millisecond of `date` in UTC (23:59:59.999).
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let last_ms = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or_default();
    Utc.from_utc_datetime(&date.and_time(last_ms))
}

/// Abbreviated month name of a timestamp ("Jan".."Dec").
pub fn month_abbreviation(dt: &DateTime<Utc>) -> &'static str {
    use chrono::Datelike;
    MONTH_ABBREVIATIONS[dt.month0() as usize]
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
