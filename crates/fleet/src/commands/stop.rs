//! `fleet stop` -- manage bus stops.

use anyhow::{Result, bail};

use fleetdesk_core::search::TextSearch;
use fleetdesk_core::stop::Stop;
use fleetdesk_core::validation;

use crate::cli::{StopAddArgs, StopArgs, StopCommands, StopDeleteArgs, StopListArgs, StopUpdateArgs};
use crate::context::RuntimeContext;
use crate::output::{dash_if_empty, output_json, output_table};

/// Execute the `fleet stop` command.
pub fn run(ctx: &RuntimeContext, args: &StopArgs) -> Result<()> {
    match &args.command {
        StopCommands::Add(args) => add(ctx, args),
        StopCommands::List(args) => list(ctx, args),
        StopCommands::Update(args) => update(ctx, args),
        StopCommands::Delete(args) => delete(ctx, args),
    }
}

fn add(ctx: &RuntimeContext, args: &StopAddArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut stops = catalog.stops();

    validation::require("code", &args.code)?;
    validation::require("name", &args.name)?;
    validation::unique_code("stop", &args.code, stops.iter().map(|s| s.code.as_str()))?;

    let stop = Stop {
        code: args.code.clone(),
        name: args.name.clone(),
        location: args.location.clone(),
    };
    stops.push(stop.clone());
    catalog.save_stops(&stops)?;

    if ctx.json {
        output_json(&stop);
    } else if !ctx.quiet {
        println!("Added stop {}", stop.code);
    }
    Ok(())
}

fn list(ctx: &RuntimeContext, args: &StopListArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut stops = catalog.stops();
    if let Some(query) = &args.search {
        stops.retain(|s| s.matches(query));
    }

    if ctx.json {
        output_json(&stops);
        return Ok(());
    }
    if stops.is_empty() {
        if !ctx.quiet {
            println!("No stops found.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = stops
        .iter()
        .map(|s| vec![s.code.clone(), s.name.clone(), dash_if_empty(&s.location)])
        .collect();
    output_table(&["CODE", "NAME", "LOCATION"], &rows);
    Ok(())
}

fn update(ctx: &RuntimeContext, args: &StopUpdateArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut stops = catalog.stops();
    let Some(stop) = stops.iter_mut().find(|s| s.code == args.code) else {
        bail!("stop '{}' not found", args.code);
    };

    if args.name.is_none() && args.location.is_none() {
        bail!("no fields to update. Specify at least one of --name, --location");
    }
    if let Some(name) = &args.name {
        validation::require("name", name)?;
        stop.name = name.clone();
    }
    if let Some(location) = &args.location {
        stop.location = location.clone();
    }

    let updated = stop.clone();
    catalog.save_stops(&stops)?;

    if ctx.json {
        output_json(&updated);
    } else if !ctx.quiet {
        println!("Updated stop {}", updated.code);
    }
    Ok(())
}

fn delete(ctx: &RuntimeContext, args: &StopDeleteArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut stops = catalog.stops();
    let Some(pos) = stops.iter().position(|s| s.code == args.code) else {
        bail!("stop '{}' not found", args.code);
    };
    stops.remove(pos);
    catalog.save_stops(&stops)?;

    if ctx.json {
        output_json(&serde_json::json!({ "deleted": args.code }));
    } else if !ctx.quiet {
        println!("Deleted stop {}", args.code);
    }
    Ok(())
}
