//! Ticket distribution per route.

use std::collections::HashMap;

use serde::Serialize;

use fleetdesk_core::route::Route;
use fleetdesk_core::schedule::Schedule;
use fleetdesk_core::ticket::Ticket;

use crate::range::DateRange;
use crate::revenue::booking_date;

/// Ticket count for one route over the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDistribution {
    pub route_code: String,
    /// Resolved route name, or the bare code when the route is gone.
    pub route_name: String,
    pub tickets: usize,
}

/// Counts tickets per route over the range, sorted by count descending then
/// route code. Tickets with a dangling schedule code land in no bucket.
pub fn route_distribution(
    tickets: &[Ticket],
    schedules: &[Schedule],
    routes: &[Route],
    range: DateRange,
) -> Vec<RouteDistribution> {
    let route_of: HashMap<&str, &str> = schedules
        .iter()
        .map(|s| (s.code.as_str(), s.route_code.as_str()))
        .collect();
    let name_of: HashMap<&str, &str> = routes
        .iter()
        .map(|r| (r.code.as_str(), r.name.as_str()))
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for ticket in tickets {
        let Some(route) = route_of.get(ticket.schedule_code.as_str()) else {
            continue;
        };
        let Some(date) = booking_date(ticket) else {
            continue;
        };
        if !range.contains(date) {
            continue;
        }
        *counts.entry(route).or_default() += 1;
    }

    let mut distribution: Vec<RouteDistribution> = counts
        .into_iter()
        .map(|(code, tickets)| RouteDistribution {
            route_code: code.to_owned(),
            route_name: name_of.get(code).copied().unwrap_or(code).to_owned(),
            tickets,
        })
        .collect();
    distribution.sort_by(|a, b| {
        b.tickets
            .cmp(&a.tickets)
            .then_with(|| a.route_code.cmp(&b.route_code))
    });
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn ticket(code: &str, schedule: &str) -> Ticket {
        Ticket {
            code: code.into(),
            schedule_code: schedule.into(),
            booked_at: "2025-06-10T08:00:00Z".into(),
            ..Default::default()
        }
    }

    fn schedule(code: &str, route: &str) -> Schedule {
        Schedule {
            code: code.into(),
            route_code: route.into(),
            ..Default::default()
        }
    }

    #[test]
    fn counts_per_route_sorted_by_count() {
        let routes = [
            Route {
                code: "R001".into(),
                name: "Airport".into(),
                itinerary: String::new(),
            },
            Route {
                code: "R002".into(),
                name: "University".into(),
                itinerary: String::new(),
            },
        ];
        let schedules = [schedule("LC001", "R001"), schedule("LC002", "R002")];
        let tickets = [
            ticket("VE001", "LC002"),
            ticket("VE002", "LC002"),
            ticket("VE003", "LC001"),
            ticket("VE004", "LC404"),
        ];
        let range = DateRange::new(d("2025-06-01"), d("2025-06-30"));
        let dist = route_distribution(&tickets, &schedules, &routes, range);

        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].route_code, "R002");
        assert_eq!(dist[0].route_name, "University");
        assert_eq!(dist[0].tickets, 2);
        assert_eq!(dist[1].route_code, "R001");
        assert_eq!(dist[1].tickets, 1);
    }

    #[test]
    fn missing_route_renders_as_bare_code() {
        let schedules = [schedule("LC001", "RGONE")];
        let tickets = [ticket("VE001", "LC001")];
        let range = DateRange::new(d("2025-06-01"), d("2025-06-30"));
        let dist = route_distribution(&tickets, &schedules, &[], range);
        assert_eq!(dist[0].route_name, "RGONE");
    }
}
