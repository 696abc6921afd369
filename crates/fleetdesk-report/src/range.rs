//! Inclusive calendar-date ranges.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive date range. The default reporting range is the current
/// calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// First through last day of `today`'s month.
    pub fn current_month(today: NaiveDate) -> Self {
        let from = today.with_day(1).unwrap_or(today);
        let (next_year, next_month) = if today.month() == 12 {
            (today.year() + 1, 1)
        } else {
            (today.year(), today.month() + 1)
        };
        let to = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .map(|first_of_next| first_of_next - Duration::days(1))
            .unwrap_or(today);
        Self { from, to }
    }

    /// Both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn current_month_spans_first_to_last_day() {
        let range = DateRange::current_month(d("2025-06-15"));
        assert_eq!(range.from, d("2025-06-01"));
        assert_eq!(range.to, d("2025-06-30"));
    }

    #[test]
    fn current_month_handles_december() {
        let range = DateRange::current_month(d("2025-12-03"));
        assert_eq!(range.from, d("2025-12-01"));
        assert_eq!(range.to, d("2025-12-31"));
    }

    #[test]
    fn current_month_handles_february() {
        let range = DateRange::current_month(d("2024-02-10"));
        assert_eq!(range.to, d("2024-02-29"));
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let range = DateRange::new(d("2025-06-01"), d("2025-06-30"));
        assert!(range.contains(d("2025-06-01")));
        assert!(range.contains(d("2025-06-30")));
        assert!(!range.contains(d("2025-05-31")));
        assert!(!range.contains(d("2025-07-01")));
    }
}
