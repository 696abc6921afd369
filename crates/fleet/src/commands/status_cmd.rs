//! `fleet status` -- inspect and control the live bus status map.
//!
//! `show` joins the fleet against the stored map, `set` applies an
//! operator override, `refresh` runs one inference pass, and `watch`
//! keeps the 30-second monitor running until Ctrl-C.

use std::io::{Write, stdout};
use std::thread;
use std::time::Duration;

use anyhow::{Result, bail};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use serde::Serialize;

use fleetdesk_core::state::{StatusMap, VehicleState};
use fleetdesk_engine::{MonitorOptions, StatusMonitor, SystemClock, run_tick, set_state};
use fleetdesk_store::{Catalog, KvStore};
use fleetdesk_ui::styles::{render_category, render_muted, render_state_badge};
use fleetdesk_ui::terminal::is_tty;

use crate::cli::{StatusArgs, StatusCommands, StatusSetArgs, StatusShowArgs, StatusWatchArgs};
use crate::context::RuntimeContext;
use crate::output::{dash_if_empty, output_json, output_table, render_table};

/// Execute the `fleet status` command.
pub fn run(ctx: &RuntimeContext, args: &StatusArgs) -> Result<()> {
    match &args.command {
        StatusCommands::Show(args) => show(ctx, args),
        StatusCommands::Set(args) => set(ctx, args),
        StatusCommands::Refresh => refresh(ctx),
        StatusCommands::Watch(args) => watch(ctx, args),
    }
}

/// One row of the status table: a bus joined with its stored record.
#[derive(Serialize)]
struct StatusView {
    plate: String,
    state: VehicleState,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

fn status_views<S: KvStore>(catalog: &Catalog<S>) -> Vec<StatusView> {
    let statuses: StatusMap = catalog.status_map();
    catalog
        .buses()
        .iter()
        .map(|bus| match statuses.get(&bus.plate) {
            Some(record) => StatusView {
                plate: bus.plate.clone(),
                state: record.state,
                schedule_code: record.schedule_code.clone(),
                updated_at: Some(record.updated_at.to_rfc3339()),
            },
            // Never observed by the monitor: implicitly ready.
            None => StatusView {
                plate: bus.plate.clone(),
                state: VehicleState::Ready,
                schedule_code: None,
                updated_at: None,
            },
        })
        .collect()
}

fn status_rows(views: &[StatusView]) -> Vec<Vec<String>> {
    views
        .iter()
        .map(|v| {
            vec![
                v.plate.clone(),
                render_state_badge(v.state),
                dash_if_empty(v.schedule_code.as_deref().unwrap_or("")),
                dash_if_empty(v.updated_at.as_deref().unwrap_or("")),
            ]
        })
        .collect()
}

fn show(ctx: &RuntimeContext, args: &StatusShowArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut views = status_views(&catalog);

    if let Some(plate) = &args.plate {
        views.retain(|v| &v.plate == plate);
        if views.is_empty() {
            bail!("bus '{}' not found", plate);
        }
    }

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

    output_table(&["PLATE", "STATUS", "SCHEDULE", "UPDATED"], &status_rows(&views));
    Ok(())
}

fn set(ctx: &RuntimeContext, args: &StatusSetArgs) -> Result<()> {
    let Ok(state) = args.state.parse::<VehicleState>() else {
        bail!(
            "unknown state '{}'. Expected one of: ready, running, maintenance, broken",
            args.state
        );
    };
    if !state.is_manual() {
        bail!("state 'preparing' is inferred from schedules and cannot be set manually");
    }

    let catalog = ctx.open_catalog()?;
    if !catalog.buses().iter().any(|b| b.plate == args.plate) {
        bail!("bus '{}' not found", args.plate);
    }

    let record = set_state(&catalog, &args.plate, state, &SystemClock)?;

    if ctx.json {
        output_json(&serde_json::json!({
            "plate": args.plate,
            "state": record.state,
            "updated_at": record.updated_at.to_rfc3339(),
        }));
    } else if !ctx.quiet {
        println!("Set {} to {}", args.plate, render_state_badge(record.state));
        if state.is_operator_locked() {
            println!("  The monitor will not change this until the bus is set back to ready or running.");
        }
    }
    Ok(())
}

fn refresh(ctx: &RuntimeContext) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let outcome = run_tick(&catalog, &SystemClock);

    if ctx.json {
        let skipped: Vec<_> = outcome
            .skipped
            .iter()
            .map(|s| {
                serde_json::json!({
                    "schedule_code": s.schedule_code,
                    "bus_plate": s.bus_plate,
                    "error": s.error.to_string(),
                })
            })
            .collect();
        output_json(&serde_json::json!({
            "changed": outcome.changed,
            "skipped": skipped,
            "statuses": outcome.statuses,
        }));
        return Ok(());
    }

    if !ctx.quiet {
        if outcome.has_changes() {
            println!("{} status change(s):", outcome.changed.len());
            for plate in &outcome.changed {
                match outcome.statuses.get(plate) {
                    Some(record) => {
                        println!("  {} -> {}", plate, render_state_badge(record.state));
                    }
                    None => println!("  {} -> removed (left the fleet)", plate),
                }
            }
        } else {
            println!("No status changes.");
        }
        for skip in &outcome.skipped {
            println!(
                "  skipped schedule {} (bus {}): {}",
                skip.schedule_code, skip.bus_plate, skip.error
            );
        }
    }
    Ok(())
}

fn watch(ctx: &RuntimeContext, args: &StatusWatchArgs) -> Result<()> {
    if args.interval == 0 {
        bail!("--interval must be at least 1 second");
    }

    // One catalog for the monitor thread, one for rendering.
    let catalog = ctx.open_catalog()?;
    let monitor = StatusMonitor::spawn(
        ctx.open_catalog()?,
        SystemClock,
        MonitorOptions {
            initial_delay: Duration::from_secs(1),
            interval: Duration::from_secs(args.interval),
        },
    );

    let mut last_frame = String::new();
    while !crate::interrupted() {
        let frame = watch_frame(&catalog, args.interval);
        if frame != last_frame {
            redraw(&frame);
            last_frame = frame;
        }
        thread::sleep(Duration::from_millis(250));
    }
    monitor.stop();

    if !ctx.quiet {
        println!();
        println!("Stopped.");
    }
    Ok(())
}

fn watch_frame<S: KvStore>(catalog: &Catalog<S>, interval: u64) -> String {
    let views = status_views(catalog);

    let mut counts = [0usize; VehicleState::ALL.len()];
    for view in &views {
        for (i, state) in VehicleState::ALL.iter().enumerate() {
            if view.state == *state {
                counts[i] += 1;
            }
        }
    }
    let tally = VehicleState::ALL
        .iter()
        .zip(counts)
        .filter(|(_, n)| *n > 0)
        .map(|(state, n)| format!("{} {}", n, state))
        .collect::<Vec<_>>()
        .join(", ");

    let mut frame = String::new();
    frame.push_str(&render_category("FLEET STATUS"));
    frame.push_str("  ");
    frame.push_str(&render_muted(&format!(
        "every {}s, Ctrl-C to stop",
        interval
    )));
    frame.push('\n');
    if views.is_empty() {
        frame.push_str("No buses in the fleet.\n");
        return frame;
    }
    frame.push_str(&format!("{} buses: {}\n\n", views.len(), tally));
    frame.push_str(&render_table(
        &["PLATE", "STATUS", "SCHEDULE", "UPDATED"],
        &status_rows(&views),
    ));
    frame.push('\n');
    frame
}

/// Full-screen redraw on a terminal, plain append otherwise.
fn redraw(frame: &str) {
    if is_tty() {
        let _ = execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0));
    }
    print!("{}", frame);
    let _ = stdout().flush();
}
