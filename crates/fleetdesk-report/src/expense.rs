//! Maintenance expenses grouped by day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use fleetdesk_core::maintenance::MaintenanceRecord;
use fleetdesk_core::timeparse;

use crate::range::DateRange;

/// Expenses for one day of the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyExpense {
    pub date: NaiveDate,
    pub cost: i64,
    pub jobs: usize,
}

/// Maintenance costs over a range.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseReport {
    pub range: DateRange,
    pub days: Vec<DailyExpense>,
    pub total: i64,
    pub job_count: usize,
}

/// Aggregates maintenance costs per day, keyed by the date the work was
/// performed.
pub fn expense_report(records: &[MaintenanceRecord], range: DateRange) -> ExpenseReport {
    let mut by_day: BTreeMap<NaiveDate, (i64, usize)> = BTreeMap::new();
    for record in records {
        let date = match timeparse::parse_date(&record.performed_on) {
            Ok(date) => date,
            Err(_) => {
                warn!(
                    record = %record.display_code(),
                    value = %record.performed_on,
                    "unparsable maintenance date, skipping"
                );
                continue;
            }
        };
        if !range.contains(date) {
            continue;
        }
        let entry = by_day.entry(date).or_insert((0, 0));
        entry.0 += record.cost;
        entry.1 += 1;
    }

    let days: Vec<DailyExpense> = by_day
        .into_iter()
        .map(|(date, (cost, jobs))| DailyExpense { date, cost, jobs })
        .collect();
    let total = days.iter().map(|d| d.cost).sum();
    let job_count = days.iter().map(|d| d.jobs).sum();

    ExpenseReport {
        range,
        days,
        total,
        job_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn job(id: u32, performed_on: &str, cost: i64) -> MaintenanceRecord {
        MaintenanceRecord {
            id,
            bus_plate: "29A-12345".into(),
            technician: "T. Baker".into(),
            performed_on: performed_on.into(),
            work: "Oil change".into(),
            cost,
            expected_done_on: performed_on.into(),
        }
    }

    #[test]
    fn groups_and_totals() {
        let range = DateRange::new(d("2025-06-01"), d("2025-06-30"));
        let records = [
            job(1, "2025-06-05", 500),
            job(2, "2025-06-05", 250),
            job(3, "2025-06-20", 1000),
            job(4, "2025-07-01", 9999),
        ];
        let report = expense_report(&records, range);

        assert_eq!(report.days.len(), 2);
        assert_eq!(report.days[0].cost, 750);
        assert_eq!(report.days[0].jobs, 2);
        assert_eq!(report.total, 1750);
        assert_eq!(report.job_count, 3);
    }

    #[test]
    fn garbage_dates_are_skipped() {
        let range = DateRange::new(d("2025-06-01"), d("2025-06-30"));
        let records = [job(1, "sometime", 500), job(2, "2025-06-05", 250)];
        let report = expense_report(&records, range);
        assert_eq!(report.total, 250);
        assert_eq!(report.job_count, 1);
    }
}
