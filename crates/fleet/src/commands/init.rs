//! `fleet init` -- initialize a fleetdesk data directory.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;

use fleetdesk_config::data_dir::ensure_data_dir;
use fleetdesk_core::demo::demo_data;
use fleetdesk_store::catalog::Catalog;
use fleetdesk_store::file::FileStore;

use crate::cli::InitArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `fleet init` command.
pub fn run(ctx: &RuntimeContext, args: &InitArgs) -> Result<()> {
    let dir = match &ctx.data_dir {
        Some(dir) => {
            let dir = PathBuf::from(dir);
            fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create directory: {}", dir.display()))?;
            dir
        }
        None => {
            let cwd = env::current_dir().context("failed to get current directory")?;
            ensure_data_dir(&cwd)?
        }
    };

    let mut seeded: Vec<String> = Vec::new();
    if args.demo {
        let store = FileStore::open(&dir)
            .with_context(|| format!("failed to open data directory {}", dir.display()))?;
        seeded = seed_demo(&Catalog::new(store))?;
    }

    if ctx.json {
        output_json(&serde_json::json!({
            "data_dir": dir.display().to_string(),
            "seeded": seeded,
        }));
        return Ok(());
    }

    if !ctx.quiet {
        println!();
        println!("fleetdesk initialized!");
        println!();
        println!("  Data directory: {}", dir.display());
        if args.demo {
            if seeded.is_empty() {
                println!("  Demo data: skipped (collections already contain data)");
            } else {
                println!("  Demo data: {}", seeded.join(", "));
            }
        }
        println!();
        println!("Run `fleet bus list` to see the fleet, `fleet status refresh` to infer its status.");
        println!();
    }

    Ok(())
}

/// Seed the sample fleet, collection by collection. A collection that
/// already holds data is left untouched so a re-run never clobbers
/// real records.
fn seed_demo(catalog: &Catalog<FileStore>) -> Result<Vec<String>> {
    let data = demo_data(Local::now().naive_local());
    let mut seeded = Vec::new();

    if catalog.routes().is_empty() {
        catalog.save_routes(&data.routes)?;
        seeded.push(format!("{} routes", data.routes.len()));
    }
    if catalog.stops().is_empty() {
        catalog.save_stops(&data.stops)?;
        seeded.push(format!("{} stops", data.stops.len()));
    }
    if catalog.route_stops().is_empty() {
        catalog.save_route_stops(&data.route_stops)?;
        seeded.push(format!("{} route stops", data.route_stops.len()));
    }
    if catalog.buses().is_empty() {
        catalog.save_buses(&data.buses)?;
        seeded.push(format!("{} buses", data.buses.len()));
    }
    if catalog.drivers().is_empty() {
        catalog.save_drivers(&data.drivers)?;
        seeded.push(format!("{} drivers", data.drivers.len()));
    }
    if catalog.schedules().is_empty() {
        catalog.save_schedules(&data.schedules)?;
        seeded.push(format!("{} schedules", data.schedules.len()));
    }
    if catalog.passengers().is_empty() {
        catalog.save_passengers(&data.passengers)?;
        seeded.push(format!("{} passengers", data.passengers.len()));
    }
    if catalog.tickets().is_empty() {
        catalog.save_tickets(&data.tickets)?;
        seeded.push(format!("{} tickets", data.tickets.len()));
    }
    if catalog.feedback().is_empty() {
        catalog.save_feedback(&data.feedback)?;
        seeded.push(format!("{} feedback entries", data.feedback.len()));
    }
    if catalog.maintenance().is_empty() {
        catalog.save_maintenance(&data.maintenance)?;
        seeded.push(format!("{} maintenance records", data.maintenance.len()));
    }

    Ok(seeded)
}
