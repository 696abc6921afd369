//! `fleet schedule` -- manage departure schedules.
//!
//! Codes are assigned automatically (`LC001`, `LC002`, ...). Dates and
//! times are validated on entry; the status engine additionally tolerates
//! malformed rows that arrive through hand-edited documents.

use anyhow::{Context, Result, bail};

use fleetdesk_core::idgen::{SCHEDULE_PREFIX, next_code};
use fleetdesk_core::schedule::Schedule;
use fleetdesk_core::search::TextSearch;
use fleetdesk_core::timeparse::{parse_date, parse_time};
use fleetdesk_core::validation;

use crate::cli::{
    ScheduleAddArgs, ScheduleArgs, ScheduleCommands, ScheduleDeleteArgs, ScheduleListArgs,
    ScheduleUpdateArgs,
};
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};

/// Execute the `fleet schedule` command.
pub fn run(ctx: &RuntimeContext, args: &ScheduleArgs) -> Result<()> {
    match &args.command {
        ScheduleCommands::Add(args) => add(ctx, args),
        ScheduleCommands::List(args) => list(ctx, args),
        ScheduleCommands::Update(args) => update(ctx, args),
        ScheduleCommands::Delete(args) => delete(ctx, args),
    }
}

fn add(ctx: &RuntimeContext, args: &ScheduleAddArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut schedules = catalog.schedules();

    parse_date(&args.date).with_context(|| format!("invalid --date '{}'", args.date))?;
    parse_time(&args.departs).with_context(|| format!("invalid --departs '{}'", args.departs))?;
    parse_time(&args.ends).with_context(|| format!("invalid --ends '{}'", args.ends))?;
    validation::require("driver", &args.driver)?;
    validation::require("bus", &args.bus)?;
    validation::require("route", &args.route)?;

    let code = next_code(SCHEDULE_PREFIX, schedules.iter().map(|s| s.code.as_str()));
    let schedule = Schedule {
        code: code.clone(),
        service_date: args.date.clone(),
        departs_at: args.departs.clone(),
        ends_at: args.ends.clone(),
        driver_code: args.driver.clone(),
        bus_plate: args.bus.clone(),
        route_code: args.route.clone(),
    };
    schedules.push(schedule.clone());
    catalog.save_schedules(&schedules)?;

    if ctx.json {
        output_json(&schedule);
    } else if !ctx.quiet {
        println!("Added schedule {}", schedule.code);
    }
    Ok(())
}

fn list(ctx: &RuntimeContext, args: &ScheduleListArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut schedules = catalog.schedules();
    if let Some(query) = &args.search {
        schedules.retain(|s| s.matches(query));
    }
    if let Some(date) = &args.date {
        schedules.retain(|s| &s.service_date == date);
    }

    if ctx.json {
        output_json(&schedules);
        return Ok(());
    }
    if schedules.is_empty() {
        if !ctx.quiet {
            println!("No schedules found.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = schedules
        .iter()
        .map(|s| {
            vec![
                s.code.clone(),
                s.service_date.clone(),
                s.departs_at.clone(),
                s.ends_at.clone(),
                s.route_code.clone(),
                s.driver_code.clone(),
                s.bus_plate.clone(),
            ]
        })
        .collect();
    output_table(
        &["CODE", "DATE", "DEPARTS", "ENDS", "ROUTE", "DRIVER", "BUS"],
        &rows,
    );
    Ok(())
}

fn update(ctx: &RuntimeContext, args: &ScheduleUpdateArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut schedules = catalog.schedules();
    let Some(schedule) = schedules.iter_mut().find(|s| s.code == args.code) else {
        bail!("schedule '{}' not found", args.code);
    };

    let no_fields = args.date.is_none()
        && args.departs.is_none()
        && args.ends.is_none()
        && args.driver.is_none()
        && args.bus.is_none()
        && args.route.is_none();
    if no_fields {
        bail!(
            "no fields to update. Specify at least one field flag (--date, --departs, --ends, --driver, --bus, --route)"
        );
    }

    if let Some(date) = &args.date {
        parse_date(date).with_context(|| format!("invalid --date '{}'", date))?;
        schedule.service_date = date.clone();
    }
    if let Some(departs) = &args.departs {
        parse_time(departs).with_context(|| format!("invalid --departs '{}'", departs))?;
        schedule.departs_at = departs.clone();
    }
    if let Some(ends) = &args.ends {
        parse_time(ends).with_context(|| format!("invalid --ends '{}'", ends))?;
        schedule.ends_at = ends.clone();
    }
    if let Some(driver) = &args.driver {
        validation::require("driver", driver)?;
        schedule.driver_code = driver.clone();
    }
    if let Some(bus) = &args.bus {
        validation::require("bus", bus)?;
        schedule.bus_plate = bus.clone();
    }
    if let Some(route) = &args.route {
        validation::require("route", route)?;
        schedule.route_code = route.clone();
    }

    let updated = schedule.clone();
    catalog.save_schedules(&schedules)?;

    if ctx.json {
        output_json(&updated);
    } else if !ctx.quiet {
        println!("Updated schedule {}", updated.code);
    }
    Ok(())
}

fn delete(ctx: &RuntimeContext, args: &ScheduleDeleteArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut schedules = catalog.schedules();
    let Some(pos) = schedules.iter().position(|s| s.code == args.code) else {
        bail!("schedule '{}' not found", args.code);
    };
    schedules.remove(pos);
    catalog.save_schedules(&schedules)?;

    if ctx.json {
        output_json(&serde_json::json!({ "deleted": args.code }));
    } else if !ctx.quiet {
        println!("Deleted schedule {}", args.code);
    }
    Ok(())
}
