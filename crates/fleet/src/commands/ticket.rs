//! `fleet ticket` -- book and manage tickets.
//!
//! Codes are assigned automatically (`VE001`, `VE002`, ...) and the
//! booking timestamp defaults to now.

use anyhow::{Context, Result, bail};
use chrono::Utc;

use fleetdesk_core::idgen::{TICKET_PREFIX, next_code};
use fleetdesk_core::search::TextSearch;
use fleetdesk_core::ticket::Ticket;
use fleetdesk_core::timeparse::parse_timestamp;
use fleetdesk_core::validation;

use crate::cli::{TicketAddArgs, TicketArgs, TicketCommands, TicketDeleteArgs, TicketListArgs};
use crate::context::RuntimeContext;
use crate::output::{format_amount, output_json, output_table};

/// Execute the `fleet ticket` command.
pub fn run(ctx: &RuntimeContext, args: &TicketArgs) -> Result<()> {
    match &args.command {
        TicketCommands::Add(args) => add(ctx, args),
        TicketCommands::List(args) => list(ctx, args),
        TicketCommands::Delete(args) => delete(ctx, args),
    }
}

fn add(ctx: &RuntimeContext, args: &TicketAddArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut tickets = catalog.tickets();

    validation::require("seat", &args.seat)?;
    validation::require("passenger", &args.passenger)?;
    validation::require("schedule", &args.schedule)?;
    if args.price < 0 {
        bail!("price must not be negative (got {})", args.price);
    }

    let booked_at = match &args.booked_at {
        Some(ts) => {
            parse_timestamp(ts).with_context(|| format!("invalid --booked-at '{}'", ts))?;
            ts.clone()
        }
        None => Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    };

    let code = next_code(TICKET_PREFIX, tickets.iter().map(|t| t.code.as_str()));
    let ticket = Ticket {
        code: code.clone(),
        seat: args.seat.clone(),
        price: args.price,
        passenger_code: args.passenger.clone(),
        schedule_code: args.schedule.clone(),
        booked_at,
    };
    tickets.push(ticket.clone());
    catalog.save_tickets(&tickets)?;

    if ctx.json {
        output_json(&ticket);
    } else if !ctx.quiet {
        println!("Booked ticket {} (seat {})", ticket.code, ticket.seat);
    }
    Ok(())
}

fn list(ctx: &RuntimeContext, args: &TicketListArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut tickets = catalog.tickets();
    if let Some(query) = &args.search {
        tickets.retain(|t| t.matches(query));
    }
    if let Some(schedule) = &args.schedule {
        tickets.retain(|t| &t.schedule_code == schedule);
    }

    if ctx.json {
        output_json(&tickets);
        return Ok(());
    }
    if tickets.is_empty() {
        if !ctx.quiet {
            println!("No tickets found.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = tickets
        .iter()
        .map(|t| {
            vec![
                t.code.clone(),
                t.seat.clone(),
                format_amount(t.price),
                t.passenger_code.clone(),
                t.schedule_code.clone(),
                t.booked_at.clone(),
            ]
        })
        .collect();
    output_table(
        &["CODE", "SEAT", "PRICE", "PASSENGER", "SCHEDULE", "BOOKED"],
        &rows,
    );
    Ok(())
}

fn delete(ctx: &RuntimeContext, args: &TicketDeleteArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut tickets = catalog.tickets();
    let Some(pos) = tickets.iter().position(|t| t.code == args.code) else {
        bail!("ticket '{}' not found", args.code);
    };
    tickets.remove(pos);
    catalog.save_tickets(&tickets)?;

    if ctx.json {
        output_json(&serde_json::json!({ "deleted": args.code }));
    } else if !ctx.quiet {
        println!("Deleted ticket {}", args.code);
    }
    Ok(())
}
