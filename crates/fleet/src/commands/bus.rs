//! `fleet bus` -- manage buses.
//!
//! `fleet bus list` joins each bus against the live status map, so the
//! fleet table always shows the current inferred state.

use anyhow::{Result, bail};
use serde::Serialize;

use fleetdesk_core::bus::Bus;
use fleetdesk_core::search::TextSearch;
use fleetdesk_core::state::{StatusMap, VehicleState};
use fleetdesk_core::validation;
use fleetdesk_ui::styles::render_state_badge;

use crate::cli::{BusAddArgs, BusArgs, BusCommands, BusDeleteArgs, BusListArgs, BusUpdateArgs};
use crate::context::RuntimeContext;
use crate::output::{dash_if_empty, output_json, output_table};

/// Execute the `fleet bus` command.
pub fn run(ctx: &RuntimeContext, args: &BusArgs) -> Result<()> {
    match &args.command {
        BusCommands::Add(args) => add(ctx, args),
        BusCommands::List(args) => list(ctx, args),
        BusCommands::Update(args) => update(ctx, args),
        BusCommands::Delete(args) => delete(ctx, args),
    }
}

fn add(ctx: &RuntimeContext, args: &BusAddArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut buses = catalog.buses();

    validation::require("plate", &args.plate)?;
    validation::require("model", &args.model)?;
    validation::unique_code("bus", &args.plate, buses.iter().map(|b| b.plate.as_str()))?;

    let bus = Bus {
        plate: args.plate.clone(),
        model: args.model.clone(),
        capacity: args.capacity,
    };
    buses.push(bus.clone());
    catalog.save_buses(&buses)?;

    if ctx.json {
        output_json(&bus);
    } else if !ctx.quiet {
        println!("Added bus {}", bus.plate);
    }
    Ok(())
}

/// One row of `fleet bus list`: the bus plus its current status.
#[derive(Serialize)]
struct BusView {
    #[serde(flatten)]
    bus: Bus,
    state: VehicleState,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

fn bus_view(bus: &Bus, statuses: &StatusMap) -> BusView {
    match statuses.get(&bus.plate) {
        Some(record) => BusView {
            bus: bus.clone(),
            state: record.state,
            schedule_code: record.schedule_code.clone(),
            updated_at: Some(record.updated_at.to_rfc3339()),
        },
        // Buses the monitor has not seen yet are implicitly ready.
        None => BusView {
            bus: bus.clone(),
            state: VehicleState::Ready,
            schedule_code: None,
            updated_at: None,
        },
    }
}

fn list(ctx: &RuntimeContext, args: &BusListArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut buses = catalog.buses();
    if let Some(query) = &args.search {
        buses.retain(|b| b.matches(query));
    }

    let statuses = catalog.status_map();
    let views: Vec<BusView> = buses.iter().map(|b| bus_view(b, &statuses)).collect();

    if ctx.json {
        output_json(&views);
        return Ok(());
    }
    if views.is_empty() {
        if !ctx.quiet {
            println!("No buses found.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = views
        .iter()
        .map(|v| {
            vec![
                v.bus.plate.clone(),
                v.bus.model.clone(),
                v.bus.capacity.to_string(),
                render_state_badge(v.state),
                dash_if_empty(v.schedule_code.as_deref().unwrap_or("")),
                dash_if_empty(v.updated_at.as_deref().unwrap_or("")),
            ]
        })
        .collect();
    output_table(
        &["PLATE", "MODEL", "CAPACITY", "STATUS", "SCHEDULE", "UPDATED"],
        &rows,
    );
    Ok(())
}

fn update(ctx: &RuntimeContext, args: &BusUpdateArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut buses = catalog.buses();
    let Some(bus) = buses.iter_mut().find(|b| b.plate == args.plate) else {
        bail!("bus '{}' not found", args.plate);
    };

    if args.model.is_none() && args.capacity.is_none() {
        bail!("no fields to update. Specify at least one of --model, --capacity");
    }
    if let Some(model) = &args.model {
        validation::require("model", model)?;
        bus.model = model.clone();
    }
    if let Some(capacity) = args.capacity {
        bus.capacity = capacity;
    }

    let updated = bus.clone();
    catalog.save_buses(&buses)?;

    if ctx.json {
        output_json(&updated);
    } else if !ctx.quiet {
        println!("Updated bus {}", updated.plate);
    }
    Ok(())
}

fn delete(ctx: &RuntimeContext, args: &BusDeleteArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut buses = catalog.buses();
    let Some(pos) = buses.iter().position(|b| b.plate == args.plate) else {
        bail!("bus '{}' not found", args.plate);
    };
    buses.remove(pos);
    catalog.save_buses(&buses)?;

    // The next inference pass drops the status entry of a departed bus;
    // no need to touch the map here.

    if ctx.json {
        output_json(&serde_json::json!({ "deleted": args.plate }));
    } else if !ctx.quiet {
        println!("Deleted bus {}", args.plate);
    }
    Ok(())
}
