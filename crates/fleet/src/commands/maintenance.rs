//! `fleet maintenance` -- record and manage maintenance jobs.
//!
//! Records carry a plain numeric id, rendered as `BT###` for display.
//! Commands accept either form.

use anyhow::{Context, Result, bail};
use chrono::Local;

use fleetdesk_core::idgen::{MAINTENANCE_PREFIX, next_numeric_id};
use fleetdesk_core::maintenance::MaintenanceRecord;
use fleetdesk_core::search::TextSearch;
use fleetdesk_core::timeparse::parse_date;
use fleetdesk_core::validation;

use crate::cli::{
    MaintenanceAddArgs, MaintenanceArgs, MaintenanceCommands, MaintenanceDeleteArgs,
    MaintenanceListArgs, MaintenanceUpdateArgs,
};
use crate::context::RuntimeContext;
use crate::output::{dash_if_empty, format_amount, output_json, output_table};

/// Execute the `fleet maintenance` command.
pub fn run(ctx: &RuntimeContext, args: &MaintenanceArgs) -> Result<()> {
    match &args.command {
        MaintenanceCommands::Add(args) => add(ctx, args),
        MaintenanceCommands::List(args) => list(ctx, args),
        MaintenanceCommands::Update(args) => update(ctx, args),
        MaintenanceCommands::Delete(args) => delete(ctx, args),
    }
}

/// Accepts a record id in numeric or display form (3 or BT003).
fn parse_id(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let digits = match trimmed.get(..MAINTENANCE_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(MAINTENANCE_PREFIX) => {
            &trimmed[MAINTENANCE_PREFIX.len()..]
        }
        _ => trimmed,
    };
    digits
        .parse()
        .with_context(|| format!("invalid maintenance id '{}'", raw))
}

fn add(ctx: &RuntimeContext, args: &MaintenanceAddArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut records = catalog.maintenance();

    validation::require("bus", &args.bus)?;
    validation::require("technician", &args.technician)?;
    validation::require("work", &args.work)?;
    if args.cost < 0 {
        bail!("cost must not be negative (got {})", args.cost);
    }
    let performed_on = match &args.performed_on {
        Some(date) => {
            parse_date(date).with_context(|| format!("invalid --performed-on '{}'", date))?;
            date.clone()
        }
        None => Local::now().date_naive().format("%Y-%m-%d").to_string(),
    };
    let expected_done_on = match &args.expected_done {
        Some(date) => {
            parse_date(date).with_context(|| format!("invalid --expected-done '{}'", date))?;
            date.clone()
        }
        None => String::new(),
    };

    let record = MaintenanceRecord {
        id: next_numeric_id(records.iter().map(|m| m.id)),
        bus_plate: args.bus.clone(),
        technician: args.technician.clone(),
        performed_on,
        work: args.work.clone(),
        cost: args.cost,
        expected_done_on,
    };
    records.push(record.clone());
    catalog.save_maintenance(&records)?;

    if ctx.json {
        output_json(&record);
    } else if !ctx.quiet {
        println!("Recorded maintenance {} for bus {}", record.display_code(), record.bus_plate);
    }
    Ok(())
}

fn list(ctx: &RuntimeContext, args: &MaintenanceListArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut records = catalog.maintenance();
    if let Some(query) = &args.search {
        records.retain(|m| m.matches(query));
    }
    if let Some(bus) = &args.bus {
        records.retain(|m| &m.bus_plate == bus);
    }

    if ctx.json {
        output_json(&records);
        return Ok(());
    }
    if records.is_empty() {
        if !ctx.quiet {
            println!("No maintenance records found.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|m| {
            vec![
                m.display_code(),
                m.bus_plate.clone(),
                m.technician.clone(),
                m.performed_on.clone(),
                dash_if_empty(&m.expected_done_on),
                format_amount(m.cost),
                m.work.clone(),
            ]
        })
        .collect();
    output_table(
        &["ID", "BUS", "TECHNICIAN", "PERFORMED", "EXPECTED", "COST", "WORK"],
        &rows,
    );
    Ok(())
}

fn update(ctx: &RuntimeContext, args: &MaintenanceUpdateArgs) -> Result<()> {
    let id = parse_id(&args.id)?;
    let catalog = ctx.open_catalog()?;
    let mut records = catalog.maintenance();
    let Some(record) = records.iter_mut().find(|m| m.id == id) else {
        bail!("maintenance '{}' not found", args.id);
    };

    let no_fields = args.bus.is_none()
        && args.technician.is_none()
        && args.work.is_none()
        && args.cost.is_none()
        && args.performed_on.is_none()
        && args.expected_done.is_none();
    if no_fields {
        bail!(
            "no fields to update. Specify at least one field flag (--bus, --technician, --work, --cost, --performed-on, --expected-done)"
        );
    }

    if let Some(bus) = &args.bus {
        validation::require("bus", bus)?;
        record.bus_plate = bus.clone();
    }
    if let Some(technician) = &args.technician {
        validation::require("technician", technician)?;
        record.technician = technician.clone();
    }
    if let Some(work) = &args.work {
        validation::require("work", work)?;
        record.work = work.clone();
    }
    if let Some(cost) = args.cost {
        if cost < 0 {
            bail!("cost must not be negative (got {})", cost);
        }
        record.cost = cost;
    }
    if let Some(date) = &args.performed_on {
        parse_date(date).with_context(|| format!("invalid --performed-on '{}'", date))?;
        record.performed_on = date.clone();
    }
    if let Some(date) = &args.expected_done {
        parse_date(date).with_context(|| format!("invalid --expected-done '{}'", date))?;
        record.expected_done_on = date.clone();
    }

    let updated = record.clone();
    catalog.save_maintenance(&records)?;

    if ctx.json {
        output_json(&updated);
    } else if !ctx.quiet {
        println!("Updated maintenance {}", updated.display_code());
    }
    Ok(())
}

fn delete(ctx: &RuntimeContext, args: &MaintenanceDeleteArgs) -> Result<()> {
    let id = parse_id(&args.id)?;
    let catalog = ctx.open_catalog()?;
    let mut records = catalog.maintenance();
    let Some(pos) = records.iter().position(|m| m.id == id) else {
        bail!("maintenance '{}' not found", args.id);
    };
    let removed = records.remove(pos);
    catalog.save_maintenance(&records)?;

    if ctx.json {
        output_json(&serde_json::json!({ "deleted": removed.display_code() }));
    } else if !ctx.quiet {
        println!("Deleted maintenance {}", removed.display_code());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_id_accepts_both_forms() {
        assert_eq!(parse_id("3").unwrap(), 3);
        assert_eq!(parse_id("BT003").unwrap(), 3);
        assert_eq!(parse_id("bt42").unwrap(), 42);
        assert!(parse_id("PH001").is_err());
    }
}
