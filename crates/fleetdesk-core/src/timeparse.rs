//! Parsing for the stringly-typed date and time fields.
//!
//! Records keep dates, times-of-day and timestamps as strings; these helpers
//! are the single place they get parsed, so every surface degrades the same
//! way on malformed input.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeParseError {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    Date(String),

    #[error("invalid time {0:?}, expected HH:MM")]
    TimeOfDay(String),

    #[error("invalid timestamp {0:?}, expected RFC 3339")]
    Timestamp(String),
}

/// Parses a service date (`YYYY-MM-DD`).
pub fn parse_date(value: &str) -> Result<NaiveDate, TimeParseError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| TimeParseError::Date(value.to_owned()))
}

/// Parses a time-of-day (`HH:MM`, seconds tolerated).
pub fn parse_time(value: &str) -> Result<NaiveTime, TimeParseError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| TimeParseError::TimeOfDay(value.to_owned()))
}

/// Parses an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TimeParseError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| TimeParseError::Timestamp(value.to_owned()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_iso_date() {
        let d = parse_date("2025-06-15").unwrap();
        assert_eq!(format_date(d), "2025-06-15");
    }

    #[test]
    fn rejects_garbage_date() {
        assert!(parse_date("15/06/2025").is_err());
        assert!(parse_date("").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[test]
    fn parses_time_with_and_without_seconds() {
        assert_eq!(parse_time("07:30").unwrap(), parse_time("07:30:00").unwrap());
        assert_eq!(format_time(parse_time("7:05").unwrap()), "07:05");
    }

    #[test]
    fn rejects_garbage_time() {
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("soon").is_err());
        assert!(parse_time("").is_err());
    }

    #[test]
    fn parses_rfc3339_timestamp() {
        let ts = parse_timestamp("2025-06-15T08:30:00Z").unwrap();
        assert_eq!(ts.date_naive(), parse_date("2025-06-15").unwrap());
    }

    #[test]
    fn rejects_garbage_timestamp() {
        assert!(parse_timestamp("2025-06-15").is_err());
        assert!(parse_timestamp("yesterday").is_err());
    }
}
