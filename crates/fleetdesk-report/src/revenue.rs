//! Ticket revenue grouped by day.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use fleetdesk_core::schedule::Schedule;
use fleetdesk_core::ticket::Ticket;
use fleetdesk_core::timeparse;

use crate::range::DateRange;

/// Revenue for one day of the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: i64,
    pub tickets: usize,
}

/// Ticket revenue over a range, optionally restricted to one route.
#[derive(Debug, Clone, Serialize)]
pub struct RevenueReport {
    pub range: DateRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_code: Option<String>,
    pub days: Vec<DailyRevenue>,
    pub total: i64,
    pub ticket_count: usize,
}

/// The booking date of a ticket. Accepts a full RFC 3339 timestamp or a
/// bare date; anything else is skipped with a warning.
pub(crate) fn booking_date(ticket: &Ticket) -> Option<NaiveDate> {
    if let Ok(ts) = timeparse::parse_timestamp(&ticket.booked_at) {
        return Some(ts.date_naive());
    }
    match timeparse::parse_date(&ticket.booked_at) {
        Ok(date) => Some(date),
        Err(_) => {
            warn!(ticket = %ticket.code, value = %ticket.booked_at, "unparsable booking timestamp, skipping");
            None
        }
    }
}

/// Aggregates ticket revenue per day.
///
/// The route filter goes through the ticket's schedule; tickets whose
/// schedule is missing simply do not match a route filter.
pub fn revenue_report(
    tickets: &[Ticket],
    schedules: &[Schedule],
    range: DateRange,
    route_code: Option<&str>,
) -> RevenueReport {
    let route_of: HashMap<&str, &str> = schedules
        .iter()
        .map(|s| (s.code.as_str(), s.route_code.as_str()))
        .collect();

    let mut by_day: BTreeMap<NaiveDate, (i64, usize)> = BTreeMap::new();
    for ticket in tickets {
        if let Some(wanted) = route_code {
            match route_of.get(ticket.schedule_code.as_str()) {
                Some(route) if *route == wanted => {}
                _ => continue,
            }
        }
        let Some(date) = booking_date(ticket) else {
            continue;
        };
        if !range.contains(date) {
            continue;
        }
        let entry = by_day.entry(date).or_insert((0, 0));
        entry.0 += ticket.price;
        entry.1 += 1;
    }

    let days: Vec<DailyRevenue> = by_day
        .into_iter()
        .map(|(date, (revenue, tickets))| DailyRevenue {
            date,
            revenue,
            tickets,
        })
        .collect();
    let total = days.iter().map(|d| d.revenue).sum();
    let ticket_count = days.iter().map(|d| d.tickets).sum();

    RevenueReport {
        range,
        route_code: route_code.map(str::to_owned),
        days,
        total,
        ticket_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ticket(code: &str, schedule: &str, price: i64, booked_at: &str) -> Ticket {
        Ticket {
            code: code.into(),
            seat: "A01".into(),
            price,
            passenger_code: "P001".into(),
            schedule_code: schedule.into(),
            booked_at: booked_at.into(),
        }
    }

    fn schedule(code: &str, route: &str) -> Schedule {
        Schedule {
            code: code.into(),
            route_code: route.into(),
            ..Default::default()
        }
    }

    fn june() -> DateRange {
        DateRange::new(d("2025-06-01"), d("2025-06-30"))
    }

    #[test]
    fn groups_by_day_and_totals() {
        let tickets = [
            ticket("VE001", "LC001", 100, "2025-06-10T08:00:00Z"),
            ticket("VE002", "LC001", 150, "2025-06-10T12:00:00Z"),
            ticket("VE003", "LC001", 200, "2025-06-11T09:00:00Z"),
        ];
        let report = revenue_report(&tickets, &[schedule("LC001", "R001")], june(), None);

        assert_eq!(report.days.len(), 2);
        assert_eq!(report.days[0].date, d("2025-06-10"));
        assert_eq!(report.days[0].revenue, 250);
        assert_eq!(report.days[0].tickets, 2);
        assert_eq!(report.total, 450);
        assert_eq!(report.ticket_count, 3);
    }

    #[test]
    fn range_is_inclusive_of_the_whole_last_day() {
        let tickets = [ticket("VE001", "LC001", 100, "2025-06-30T23:10:00Z")];
        let report = revenue_report(&tickets, &[], june(), None);
        assert_eq!(report.total, 100);
    }

    #[test]
    fn out_of_range_bookings_are_excluded() {
        let tickets = [
            ticket("VE001", "LC001", 100, "2025-05-31T10:00:00Z"),
            ticket("VE002", "LC001", 100, "2025-07-01T00:00:00Z"),
        ];
        let report = revenue_report(&tickets, &[], june(), None);
        assert_eq!(report.total, 0);
        assert!(report.days.is_empty());
    }

    #[test]
    fn route_filter_joins_through_the_schedule() {
        let schedules = [schedule("LC001", "R001"), schedule("LC002", "R002")];
        let tickets = [
            ticket("VE001", "LC001", 100, "2025-06-10T08:00:00Z"),
            ticket("VE002", "LC002", 999, "2025-06-10T08:00:00Z"),
            // Dangling schedule code: never matches a route filter.
            ticket("VE003", "LCXXX", 50, "2025-06-10T08:00:00Z"),
        ];
        let report = revenue_report(&tickets, &schedules, june(), Some("R001"));
        assert_eq!(report.total, 100);
        assert_eq!(report.ticket_count, 1);
    }

    #[test]
    fn bare_date_bookings_are_tolerated() {
        let tickets = [ticket("VE001", "LC001", 100, "2025-06-10")];
        let report = revenue_report(&tickets, &[], june(), None);
        assert_eq!(report.total, 100);
    }

    #[test]
    fn garbage_bookings_are_skipped() {
        let tickets = [
            ticket("VE001", "LC001", 100, "whenever"),
            ticket("VE002", "LC001", 50, "2025-06-10T08:00:00Z"),
        ];
        let report = revenue_report(&tickets, &[], june(), None);
        assert_eq!(report.total, 50);
    }
}
