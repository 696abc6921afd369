//! `fleet export` -- CSV export of the entity collections.
//!
//! The header row is derived from the record's field names. Report
//! commands reuse the CSV helpers here for their `--out` flag.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use fleetdesk_core::feedback::Feedback;

use crate::cli::ExportArgs;
use crate::context::RuntimeContext;

/// Execute the `fleet export` command.
pub fn run(ctx: &RuntimeContext, args: &ExportArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let (bytes, count) = match args.collection.as_str() {
        "routes" => counted(&catalog.routes())?,
        "stops" => counted(&catalog.stops())?,
        "route-stops" => counted(&catalog.route_stops())?,
        "buses" => counted(&catalog.buses())?,
        "drivers" => counted(&catalog.drivers())?,
        "schedules" => counted(&catalog.schedules())?,
        "passengers" => counted(&catalog.passengers())?,
        "tickets" => counted(&catalog.tickets())?,
        "feedback" => {
            let rows: Vec<FeedbackRow> = catalog.feedback().iter().map(FeedbackRow::from).collect();
            counted(&rows)?
        }
        "maintenance" => counted(&catalog.maintenance())?,
        other => bail!(
            "unknown collection '{}'. Expected one of: routes, stops, route-stops, buses, drivers, schedules, passengers, tickets, feedback, maintenance",
            other
        ),
    };

    let target = args
        .out
        .clone()
        .unwrap_or_else(|| format!("{}.csv", args.collection));
    write_csv(&bytes, &target)?;

    if !ctx.quiet && target != "-" {
        println!("Exported {} {} record(s) to {}", count, args.collection, target);
    }
    Ok(())
}

/// Feedback flattened for CSV. The stored form omits absent options,
/// which would leave rows ragged; this shape always carries every column.
#[derive(Serialize)]
struct FeedbackRow {
    id: u32,
    passenger_code: String,
    sent_on: String,
    message: String,
    schedule_code: String,
    route_code: String,
}

impl From<&Feedback> for FeedbackRow {
    fn from(f: &Feedback) -> Self {
        Self {
            id: f.id,
            passenger_code: f.passenger_code.clone(),
            sent_on: f.sent_on.clone(),
            message: f.message.clone(),
            schedule_code: f.schedule_code.clone().unwrap_or_default(),
            route_code: f.route_code.clone().unwrap_or_default(),
        }
    }
}

fn counted<T: Serialize>(records: &[T]) -> Result<(Vec<u8>, usize)> {
    Ok((records_to_csv(records)?, records.len()))
}

/// Render records as CSV, header row first. An empty slice renders as
/// nothing at all.
pub(crate) fn records_to_csv<T: Serialize>(records: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record).context("failed to render CSV")?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("failed to flush CSV")?;
    Ok(bytes)
}

/// Write CSV bytes to a file, or to stdout when the target is `-`.
pub(crate) fn write_csv(bytes: &[u8], target: &str) -> Result<()> {
    if target == "-" {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        if let Err(e) = lock.write_all(bytes) {
            // Ignore broken pipes from `fleet export ... --out - | head`.
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(e).context("failed to write CSV to stdout");
            }
        }
        return Ok(());
    }
    fs::write(target, bytes).with_context(|| format!("failed to write {}", target))
}

#[cfg(test)]
mod tests {
    use fleetdesk_core::ticket::Ticket;

    use super::*;

    #[test]
    fn tickets_render_with_header_row() {
        let tickets = vec![
            Ticket {
                code: "VE001".into(),
                seat: "A01".into(),
                price: 150_000,
                passenger_code: "P001".into(),
                schedule_code: "LC001".into(),
                booked_at: "2025-06-15T08:00:00Z".into(),
            },
            Ticket {
                code: "VE002".into(),
                seat: "B04".into(),
                price: 120_000,
                passenger_code: "P002".into(),
                schedule_code: "LC002".into(),
                booked_at: "2025-06-15T09:30:00Z".into(),
            },
        ];
        let csv = String::from_utf8(records_to_csv(&tickets).unwrap()).unwrap();
        insta::assert_snapshot!(csv, @r"
        code,seat,price,passenger_code,schedule_code,booked_at
        VE001,A01,150000,P001,LC001,2025-06-15T08:00:00Z
        VE002,B04,120000,P002,LC002,2025-06-15T09:30:00Z
        ");
    }

    #[test]
    fn feedback_rows_always_carry_every_column() {
        let entries = vec![
            Feedback {
                id: 1,
                passenger_code: "P001".into(),
                sent_on: "2025-06-14".into(),
                message: "Clean seats".into(),
                schedule_code: Some("LC001".into()),
                route_code: None,
            },
            Feedback {
                id: 2,
                passenger_code: "P002".into(),
                sent_on: "2025-06-15".into(),
                message: "Left late".into(),
                schedule_code: None,
                route_code: Some("R002".into()),
            },
        ];
        let rows: Vec<FeedbackRow> = entries.iter().map(FeedbackRow::from).collect();
        let csv = String::from_utf8(records_to_csv(&rows).unwrap()).unwrap();
        insta::assert_snapshot!(csv, @r"
        id,passenger_code,sent_on,message,schedule_code,route_code
        1,P001,2025-06-14,Clean seats,LC001,
        2,P002,2025-06-15,Left late,,R002
        ");
    }

    #[test]
    fn empty_collection_renders_nothing() {
        let bytes = records_to_csv::<Ticket>(&[]).unwrap();
        assert!(bytes.is_empty());
    }
}
