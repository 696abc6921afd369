//! Clock abstraction so ticks are testable.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Source of "now" for the inference engine.
///
/// The wall-clock value drives the window checks (schedules are naive local
/// dates and times); the UTC instant stamps `updated_at` on records.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
    fn now_wall(&self) -> NaiveDateTime;
}

/// System time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn now_wall(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A pinned clock for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    wall: NaiveDateTime,
}

impl FixedClock {
    pub fn at(wall: NaiveDateTime) -> Self {
        Self { wall }
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        // Tests treat the pinned wall clock as UTC; only the stamp uses it.
        Utc.from_utc_datetime(&self.wall)
    }

    fn now_wall(&self) -> NaiveDateTime {
        self.wall
    }
}
