//! Schedule time windows.

use chrono::{Duration, NaiveDateTime};

use fleetdesk_core::schedule::Schedule;
use fleetdesk_core::timeparse::{self, TimeParseError};

/// Minutes before departure during which a vehicle counts as preparing.
pub const PREP_MINUTES: i64 = 15;

/// Which window of a schedule contains a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Preparing,
    Running,
}

/// A schedule's resolved start and end instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceWindow {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
}

impl ServiceWindow {
    /// Resolves a schedule's service date and times-of-day into instants.
    ///
    /// An end time-of-day strictly earlier than the start means the trip
    /// runs past midnight, so the end instant moves to the following
    /// calendar day.
    pub fn from_schedule(schedule: &Schedule) -> Result<Self, TimeParseError> {
        let date = timeparse::parse_date(&schedule.service_date)?;
        let departs = timeparse::parse_time(&schedule.departs_at)?;
        let ends = timeparse::parse_time(&schedule.ends_at)?;

        let starts_at = date.and_time(departs);
        let mut ends_at = date.and_time(ends);
        if ends_at < starts_at {
            ends_at += Duration::days(1);
        }

        Ok(Self { starts_at, ends_at })
    }

    /// Start of the preparation window.
    pub fn prep_starts_at(&self) -> NaiveDateTime {
        self.starts_at - Duration::minutes(PREP_MINUTES)
    }

    /// Preparation window is `[start - 15min, start)`; active window is
    /// `[start, end]`, inclusive on both ends.
    pub fn phase_at(&self, now: NaiveDateTime) -> Option<Phase> {
        if now >= self.prep_starts_at() && now < self.starts_at {
            Some(Phase::Preparing)
        } else if now >= self.starts_at && now <= self.ends_at {
            Some(Phase::Running)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn schedule(date: &str, departs: &str, ends: &str) -> Schedule {
        Schedule {
            code: "LC001".into(),
            service_date: date.into(),
            departs_at: departs.into(),
            ends_at: ends.into(),
            ..Default::default()
        }
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        timeparse::parse_date(date)
            .unwrap()
            .and_time(timeparse::parse_time(time).unwrap())
    }

    #[test]
    fn same_day_window() {
        let w = ServiceWindow::from_schedule(&schedule("2025-06-15", "07:30", "09:00")).unwrap();
        assert_eq!(w.starts_at, at("2025-06-15", "07:30"));
        assert_eq!(w.ends_at, at("2025-06-15", "09:00"));
    }

    #[test]
    fn overnight_end_rolls_to_next_day() {
        let w = ServiceWindow::from_schedule(&schedule("2025-06-15", "09:00", "08:00")).unwrap();
        assert_eq!(w.ends_at, at("2025-06-16", "08:00"));
        // Well into the night the trip is still active.
        assert_eq!(w.phase_at(at("2025-06-16", "02:00")), Some(Phase::Running));
    }

    #[test]
    fn end_equal_to_start_does_not_wrap() {
        let w = ServiceWindow::from_schedule(&schedule("2025-06-15", "09:00", "09:00")).unwrap();
        assert_eq!(w.ends_at, at("2025-06-15", "09:00"));
        assert_eq!(w.phase_at(at("2025-06-15", "09:00")), Some(Phase::Running));
    }

    #[test]
    fn preparation_window_boundaries() {
        let w = ServiceWindow::from_schedule(&schedule("2025-06-15", "08:00", "10:00")).unwrap();
        // Exactly 15 minutes out: preparing.
        assert_eq!(w.phase_at(at("2025-06-15", "07:45")), Some(Phase::Preparing));
        assert_eq!(w.phase_at(at("2025-06-15", "07:50")), Some(Phase::Preparing));
        // 20 minutes out: nothing yet.
        assert_eq!(w.phase_at(at("2025-06-15", "07:40")), None);
        // The departure instant itself is running, not preparing.
        assert_eq!(w.phase_at(at("2025-06-15", "08:00")), Some(Phase::Running));
    }

    #[test]
    fn active_window_is_inclusive_at_the_end() {
        let w = ServiceWindow::from_schedule(&schedule("2025-06-15", "08:00", "10:00")).unwrap();
        assert_eq!(w.phase_at(at("2025-06-15", "10:00")), Some(Phase::Running));
        assert_eq!(w.phase_at(at("2025-06-15", "10:01")), None);
    }

    #[test]
    fn malformed_fields_are_errors() {
        assert!(ServiceWindow::from_schedule(&schedule("soon", "08:00", "10:00")).is_err());
        assert!(ServiceWindow::from_schedule(&schedule("2025-06-15", "8am", "10:00")).is_err());
        assert!(ServiceWindow::from_schedule(&schedule("2025-06-15", "08:00", "")).is_err());
    }
}
