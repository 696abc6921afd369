//! One evaluation tick of the status derivation rule.

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::debug;

use fleetdesk_core::bus::Bus;
use fleetdesk_core::schedule::Schedule;
use fleetdesk_core::state::{StatusMap, StatusRecord, VehicleState};
use fleetdesk_core::timeparse::TimeParseError;

use crate::window::{Phase, ServiceWindow};

/// A schedule skipped during evaluation because its date or time could not
/// be parsed. Recorded for diagnostics only; it never aborts the tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSchedule {
    pub schedule_code: String,
    pub bus_plate: String,
    pub error: TimeParseError,
}

/// Outcome of one tick.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    /// The new status map. Replaces the previous one wholesale.
    pub statuses: StatusMap,

    /// Plates whose record changed (or was dropped) this tick. Empty means
    /// there is nothing to persist.
    pub changed: Vec<String>,

    /// Schedules skipped as malformed.
    pub skipped: Vec<SkippedSchedule>,
}

impl TickOutcome {
    pub fn has_changes(&self) -> bool {
        !self.changed.is_empty()
    }
}

/// Evaluates the whole fleet against `now`.
///
/// Pure: reads the prior map and returns a new one. Per vehicle:
/// - an operator-set `maintenance`/`broken` record is preserved untouched;
///   inference never clears it;
/// - with no schedule entries the vehicle is `ready`;
/// - otherwise the first schedule in input order whose preparation or active
///   window contains `now` decides the state, tagged with the schedule code
///   (an explicit tie-break, not chronological);
/// - with no matching window the vehicle is `ready` and any tag drops.
///
/// Plates no longer in the fleet fall out of the map. A record is only
/// replaced when its state or tag differs from the prior one, so timestamps
/// are untouched on quiet ticks. `now_utc` stamps `updated_at` on records
/// that do change.
pub fn evaluate_fleet(
    now: NaiveDateTime,
    now_utc: DateTime<Utc>,
    buses: &[Bus],
    schedules: &[Schedule],
    prior: &StatusMap,
) -> TickOutcome {
    let mut outcome = TickOutcome {
        statuses: StatusMap::new(),
        changed: Vec::new(),
        skipped: Vec::new(),
    };

    for bus in buses {
        let previous = prior.get(&bus.plate);

        if let Some(record) = previous {
            if record.state.is_operator_locked() {
                outcome.statuses.insert(bus.plate.clone(), record.clone());
                continue;
            }
        }

        let desired = desired_record(bus, schedules, now, now_utc, &mut outcome.skipped);

        match previous {
            Some(record) if record.same_observation(&desired) => {
                outcome.statuses.insert(bus.plate.clone(), record.clone());
            }
            _ => {
                debug!(plate = %bus.plate, state = %desired.state, "vehicle state changed");
                outcome.changed.push(bus.plate.clone());
                outcome.statuses.insert(bus.plate.clone(), desired);
            }
        }
    }

    // Records for plates that left the fleet are dropped; that is a map
    // change and must be persisted.
    for plate in prior.keys() {
        if !outcome.statuses.contains_key(plate) {
            debug!(%plate, "vehicle left the fleet, dropping status record");
            outcome.changed.push(plate.clone());
        }
    }

    outcome
}

/// What the vehicle's record should look like right now, ignoring the
/// suppression comparison.
fn desired_record(
    bus: &Bus,
    schedules: &[Schedule],
    now: NaiveDateTime,
    now_utc: DateTime<Utc>,
    skipped: &mut Vec<SkippedSchedule>,
) -> StatusRecord {
    for schedule in schedules.iter().filter(|s| s.bus_plate == bus.plate) {
        let window = match ServiceWindow::from_schedule(schedule) {
            Ok(window) => window,
            Err(error) => {
                skipped.push(SkippedSchedule {
                    schedule_code: schedule.code.clone(),
                    bus_plate: bus.plate.clone(),
                    error,
                });
                continue;
            }
        };

        // First window containing `now` wins; evaluation stops here.
        match window.phase_at(now) {
            Some(Phase::Preparing) => {
                return StatusRecord::inferred(VehicleState::Preparing, &schedule.code, now_utc);
            }
            Some(Phase::Running) => {
                return StatusRecord::inferred(VehicleState::Running, &schedule.code, now_utc);
            }
            None => continue,
        }
    }

    StatusRecord::new(VehicleState::Ready, now_utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use fleetdesk_core::timeparse::{parse_date, parse_time};
    use pretty_assertions::assert_eq;

    fn bus(plate: &str) -> Bus {
        Bus {
            plate: plate.into(),
            model: "Seater".into(),
            capacity: 45,
        }
    }

    fn schedule(code: &str, plate: &str, date: &str, departs: &str, ends: &str) -> Schedule {
        Schedule {
            code: code.into(),
            service_date: date.into(),
            departs_at: departs.into(),
            ends_at: ends.into(),
            driver_code: "D001".into(),
            bus_plate: plate.into(),
            route_code: "R001".into(),
        }
    }

    fn at(date: &str, time: &str) -> NaiveDateTime {
        parse_date(date).unwrap().and_time(parse_time(time).unwrap())
    }

    fn stamp(now: NaiveDateTime) -> DateTime<Utc> {
        Utc.from_utc_datetime(&now)
    }

    fn tick(
        now: NaiveDateTime,
        buses: &[Bus],
        schedules: &[Schedule],
        prior: &StatusMap,
    ) -> TickOutcome {
        evaluate_fleet(now, stamp(now), buses, schedules, prior)
    }

    #[test]
    fn no_schedules_means_ready() {
        let now = at("2025-06-15", "12:00");
        let out = tick(now, &[bus("29A-12345")], &[], &StatusMap::new());
        assert_eq!(out.statuses["29A-12345"].state, VehicleState::Ready);
        assert_eq!(out.statuses["29A-12345"].schedule_code, None);
        assert_eq!(out.changed, vec!["29A-12345".to_string()]);
    }

    #[test]
    fn active_window_means_running_with_tag() {
        let now = at("2025-06-15", "08:30");
        let scheds = [schedule("LC001", "29A-12345", "2025-06-15", "08:00", "10:00")];
        let out = tick(now, &[bus("29A-12345")], &scheds, &StatusMap::new());
        let rec = &out.statuses["29A-12345"];
        assert_eq!(rec.state, VehicleState::Running);
        assert_eq!(rec.schedule_code.as_deref(), Some("LC001"));
    }

    #[test]
    fn prep_window_means_preparing() {
        let scheds = [schedule("LC001", "29A-12345", "2025-06-15", "08:00", "10:00")];
        let buses = [bus("29A-12345")];

        // Ten minutes before departure: preparing.
        let out = tick(at("2025-06-15", "07:50"), &buses, &scheds, &StatusMap::new());
        assert_eq!(out.statuses["29A-12345"].state, VehicleState::Preparing);

        // Twenty minutes before departure: still just ready.
        let out = tick(at("2025-06-15", "07:40"), &buses, &scheds, &StatusMap::new());
        assert_eq!(out.statuses["29A-12345"].state, VehicleState::Ready);
    }

    #[test]
    fn end_instant_is_still_running() {
        let scheds = [schedule("LC001", "29A-12345", "2025-06-15", "08:00", "10:00")];
        let out = tick(at("2025-06-15", "10:00"), &[bus("29A-12345")], &scheds, &StatusMap::new());
        assert_eq!(out.statuses["29A-12345"].state, VehicleState::Running);
    }

    #[test]
    fn overnight_schedule_spans_midnight() {
        let scheds = [schedule("LC001", "29A-12345", "2025-06-15", "09:00", "08:00")];
        // Three in the morning of the next day: still running.
        let out = tick(at("2025-06-16", "03:00"), &[bus("29A-12345")], &scheds, &StatusMap::new());
        assert_eq!(out.statuses["29A-12345"].state, VehicleState::Running);
    }

    #[test]
    fn quiet_tick_suppresses_the_write() {
        let now = at("2025-06-15", "08:30");
        let scheds = [schedule("LC001", "29A-12345", "2025-06-15", "08:00", "10:00")];
        let buses = [bus("29A-12345")];

        let first = tick(now, &buses, &scheds, &StatusMap::new());
        assert!(first.has_changes());

        // Thirty seconds later nothing observable moved.
        let later = at("2025-06-15", "08:30:30");
        let second = tick(later, &buses, &scheds, &first.statuses);
        assert!(!second.has_changes());
        // The record (including its timestamp) is carried over unchanged.
        assert_eq!(second.statuses["29A-12345"], first.statuses["29A-12345"]);
    }

    #[test]
    fn running_lapses_to_ready_when_window_ends() {
        let scheds = [schedule("LC001", "29A-12345", "2025-06-15", "08:00", "10:00")];
        let buses = [bus("29A-12345")];

        let during = tick(at("2025-06-15", "09:59"), &buses, &scheds, &StatusMap::new());
        let after = tick(at("2025-06-15", "10:01"), &buses, &scheds, &during.statuses);

        let rec = &after.statuses["29A-12345"];
        assert_eq!(rec.state, VehicleState::Ready);
        assert_eq!(rec.schedule_code, None);
        assert!(after.has_changes());
    }

    #[test]
    fn preparing_lapses_and_drops_its_tag() {
        let scheds = [schedule("LC001", "29A-12345", "2025-06-15", "08:00", "10:00")];
        let buses = [bus("29A-12345")];

        let before = tick(at("2025-06-15", "07:50"), &buses, &scheds, &StatusMap::new());
        assert_eq!(before.statuses["29A-12345"].state, VehicleState::Preparing);

        // Schedule deleted before departure; the stale tag must not linger.
        let gone = tick(at("2025-06-15", "07:55"), &buses, &[], &before.statuses);
        let rec = &gone.statuses["29A-12345"];
        assert_eq!(rec.state, VehicleState::Ready);
        assert_eq!(rec.schedule_code, None);
    }

    #[test]
    fn maintenance_survives_a_lapsed_window() {
        let now = at("2025-06-15", "12:00");
        let mut prior = StatusMap::new();
        prior.insert(
            "29A-12345".into(),
            StatusRecord::new(VehicleState::Maintenance, stamp(now)),
        );

        let out = tick(at("2025-06-15", "12:30"), &[bus("29A-12345")], &[], &prior);
        assert_eq!(out.statuses["29A-12345"].state, VehicleState::Maintenance);
        assert!(!out.has_changes());
    }

    #[test]
    fn broken_survives_an_active_window() {
        let now = at("2025-06-15", "08:30");
        let mut prior = StatusMap::new();
        prior.insert(
            "29A-12345".into(),
            StatusRecord::new(VehicleState::Broken, stamp(now)),
        );

        let scheds = [schedule("LC001", "29A-12345", "2025-06-15", "08:00", "10:00")];
        let out = tick(now, &[bus("29A-12345")], &scheds, &prior);
        assert_eq!(out.statuses["29A-12345"].state, VehicleState::Broken);
        assert!(!out.has_changes());
    }

    #[test]
    fn malformed_schedule_is_skipped_not_fatal() {
        let now = at("2025-06-15", "08:30");
        let scheds = [
            schedule("LC001", "29A-12345", "not-a-date", "08:00", "10:00"),
            schedule("LC002", "29A-12345", "2025-06-15", "08:00", "10:00"),
            schedule("LC003", "29B-67890", "2025-06-15", "08:00", "10:00"),
        ];
        let buses = [bus("29A-12345"), bus("29B-67890")];
        let out = tick(now, &buses, &scheds, &StatusMap::new());

        // The good schedules still take effect for both vehicles.
        assert_eq!(out.statuses["29A-12345"].state, VehicleState::Running);
        assert_eq!(out.statuses["29A-12345"].schedule_code.as_deref(), Some("LC002"));
        assert_eq!(out.statuses["29B-67890"].state, VehicleState::Running);

        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].schedule_code, "LC001");
        assert_eq!(out.skipped[0].bus_plate, "29A-12345");
    }

    #[test]
    fn first_matching_schedule_wins() {
        let now = at("2025-06-15", "08:30");
        // Both windows contain `now`; input order decides.
        let scheds = [
            schedule("LC001", "29A-12345", "2025-06-15", "08:00", "10:00"),
            schedule("LC002", "29A-12345", "2025-06-15", "08:15", "09:00"),
        ];
        let out = tick(now, &[bus("29A-12345")], &scheds, &StatusMap::new());
        assert_eq!(out.statuses["29A-12345"].schedule_code.as_deref(), Some("LC001"));
    }

    #[test]
    fn departed_plate_is_dropped_from_the_map() {
        let now = at("2025-06-15", "12:00");
        let mut prior = StatusMap::new();
        prior.insert(
            "OLD-00001".into(),
            StatusRecord::new(VehicleState::Ready, stamp(now)),
        );

        let out = tick(now, &[bus("29A-12345")], &[], &prior);
        assert!(!out.statuses.contains_key("OLD-00001"));
        assert!(out.changed.contains(&"OLD-00001".to_string()));
    }
}
