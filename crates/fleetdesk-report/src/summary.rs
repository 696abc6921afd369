//! The dashboard summary.

use chrono::NaiveDate;
use serde::Serialize;

use fleetdesk_core::bus::Bus;
use fleetdesk_core::driver::Driver;
use fleetdesk_core::feedback::Feedback;
use fleetdesk_core::maintenance::MaintenanceRecord;
use fleetdesk_core::passenger::Passenger;
use fleetdesk_core::route::Route;
use fleetdesk_core::schedule::Schedule;
use fleetdesk_core::ticket::Ticket;
use fleetdesk_core::timeparse;

use crate::expense::expense_report;
use crate::range::DateRange;
use crate::revenue::revenue_report;

/// Live counts plus the current month's money flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub routes: usize,
    pub buses: usize,
    pub drivers: usize,
    pub schedules: usize,
    /// Schedule entries whose service date is `today`.
    pub schedules_today: usize,
    pub passengers: usize,
    pub tickets: usize,
    pub feedback: usize,
    pub month_revenue: i64,
    pub month_expense: i64,
    pub month_net: i64,
}

/// Everything the summary reads. Borrowed so the caller keeps ownership of
/// the loaded collections.
pub struct SummaryInput<'a> {
    pub routes: &'a [Route],
    pub buses: &'a [Bus],
    pub drivers: &'a [Driver],
    pub schedules: &'a [Schedule],
    pub passengers: &'a [Passenger],
    pub tickets: &'a [Ticket],
    pub feedback: &'a [Feedback],
    pub maintenance: &'a [MaintenanceRecord],
}

pub fn summarize(input: &SummaryInput<'_>, today: NaiveDate) -> Summary {
    let month = DateRange::current_month(today);
    let revenue = revenue_report(input.tickets, input.schedules, month, None);
    let expense = expense_report(input.maintenance, month);

    let schedules_today = input
        .schedules
        .iter()
        .filter(|s| timeparse::parse_date(&s.service_date).is_ok_and(|d| d == today))
        .count();

    Summary {
        routes: input.routes.len(),
        buses: input.buses.len(),
        drivers: input.drivers.len(),
        schedules: input.schedules.len(),
        schedules_today,
        passengers: input.passengers.len(),
        tickets: input.tickets.len(),
        feedback: input.feedback.len(),
        month_revenue: revenue.total,
        month_expense: expense.total,
        month_net: revenue.total - expense.total,
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
    fn counts_and_month_flow() {
        let routes = [Route {
            code: "R001".into(),
            ..Default::default()
        }];
        let buses = [Bus {
            plate: "29A-12345".into(),
            ..Default::default()
        }];
        let schedules = [
            Schedule {
                code: "LC001".into(),
                service_date: "2025-06-15".into(),
                ..Default::default()
            },
            Schedule {
                code: "LC002".into(),
                service_date: "2025-06-16".into(),
                ..Default::default()
            },
        ];
        let tickets = [Ticket {
            code: "VE001".into(),
            price: 300,
            schedule_code: "LC001".into(),
            booked_at: "2025-06-10T08:00:00Z".into(),
            ..Default::default()
        }];
        let maintenance = [MaintenanceRecord {
            id: 1,
            performed_on: "2025-06-12".into(),
            cost: 100,
            ..Default::default()
        }];

        let input = SummaryInput {
            routes: &routes,
            buses: &buses,
            drivers: &[],
            schedules: &schedules,
            passengers: &[],
            tickets: &tickets,
            feedback: &[],
            maintenance: &maintenance,
        };
        let summary = summarize(&input, d("2025-06-15"));

        assert_eq!(summary.routes, 1);
        assert_eq!(summary.schedules, 2);
        assert_eq!(summary.schedules_today, 1);
        assert_eq!(summary.month_revenue, 300);
        assert_eq!(summary.month_expense, 100);
        assert_eq!(summary.month_net, 200);
    }
}
