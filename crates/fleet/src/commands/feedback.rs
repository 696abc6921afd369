//! `fleet feedback` -- record and browse passenger feedback.
//!
//! Entries carry a plain numeric id, rendered as `PH###` for display.
//! Commands accept either form.

use anyhow::{Context, Result, bail};
use chrono::Local;

use fleetdesk_core::feedback::Feedback;
use fleetdesk_core::idgen::{FEEDBACK_PREFIX, next_numeric_id};
use fleetdesk_core::search::TextSearch;
use fleetdesk_core::timeparse::parse_date;
use fleetdesk_core::validation;

use crate::cli::{
    FeedbackAddArgs, FeedbackArgs, FeedbackCommands, FeedbackDeleteArgs, FeedbackListArgs,
    FeedbackShowArgs,
};
use crate::context::RuntimeContext;
use crate::output::{dash_if_empty, output_json, output_table};

/// Execute the `fleet feedback` command.
pub fn run(ctx: &RuntimeContext, args: &FeedbackArgs) -> Result<()> {
    match &args.command {
        FeedbackCommands::Add(args) => add(ctx, args),
        FeedbackCommands::List(args) => list(ctx, args),
        FeedbackCommands::Show(args) => show(ctx, args),
        FeedbackCommands::Delete(args) => delete(ctx, args),
    }
}

/// Accepts a feedback id in numeric or display form (7 or PH007).
fn parse_id(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let digits = match trimmed.get(..FEEDBACK_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(FEEDBACK_PREFIX) => {
            &trimmed[FEEDBACK_PREFIX.len()..]
        }
        _ => trimmed,
    };
    digits
        .parse()
        .with_context(|| format!("invalid feedback id '{}'", raw))
}

/// First `max` characters of a message, for table cells.
fn excerpt(message: &str, max: usize) -> String {
    if message.chars().count() <= max {
        return message.to_string();
    }
    let cut: String = message.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

fn add(ctx: &RuntimeContext, args: &FeedbackAddArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut entries = catalog.feedback();

    validation::require("passenger", &args.passenger)?;
    validation::require("message", &args.message)?;
    let sent_on = match &args.sent_on {
        Some(date) => {
            parse_date(date).with_context(|| format!("invalid --sent-on '{}'", date))?;
            date.clone()
        }
        None => Local::now().date_naive().format("%Y-%m-%d").to_string(),
    };

    let entry = Feedback {
        id: next_numeric_id(entries.iter().map(|f| f.id)),
        passenger_code: args.passenger.clone(),
        sent_on,
        message: args.message.clone(),
        schedule_code: args.schedule.clone(),
        route_code: args.route.clone(),
    };
    entries.push(entry.clone());
    catalog.save_feedback(&entries)?;

    if ctx.json {
        output_json(&entry);
    } else if !ctx.quiet {
        println!("Recorded feedback {}", entry.display_code());
    }
    Ok(())
}

fn list(ctx: &RuntimeContext, args: &FeedbackListArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut entries = catalog.feedback();
    if let Some(query) = &args.search {
        entries.retain(|f| f.matches(query));
    }

    if ctx.json {
        output_json(&entries);
        return Ok(());
    }
    if entries.is_empty() {
        if !ctx.quiet {
            println!("No feedback found.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|f| {
            vec![
                f.display_code(),
                f.passenger_code.clone(),
                f.sent_on.clone(),
                dash_if_empty(f.schedule_code.as_deref().unwrap_or("")),
                dash_if_empty(f.route_code.as_deref().unwrap_or("")),
                excerpt(&f.message, 40),
            ]
        })
        .collect();
    output_table(
        &["ID", "PASSENGER", "SENT", "SCHEDULE", "ROUTE", "MESSAGE"],
        &rows,
    );
    Ok(())
}

fn show(ctx: &RuntimeContext, args: &FeedbackShowArgs) -> Result<()> {
    let id = parse_id(&args.id)?;
    let catalog = ctx.open_catalog()?;
    let entries = catalog.feedback();
    let Some(entry) = entries.iter().find(|f| f.id == id) else {
        bail!("feedback '{}' not found", args.id);
    };

    if ctx.json {
        output_json(entry);
        return Ok(());
    }

    println!("{}  from {} on {}", entry.display_code(), entry.passenger_code, entry.sent_on);
    if let Some(schedule) = &entry.schedule_code {
        println!("  Schedule: {}", schedule);
    }
    if let Some(route) = &entry.route_code {
        println!("  Route: {}", route);
    }
    println!();
    println!("  {}", entry.message);
    Ok(())
}

fn delete(ctx: &RuntimeContext, args: &FeedbackDeleteArgs) -> Result<()> {
    let id = parse_id(&args.id)?;
    let catalog = ctx.open_catalog()?;
    let mut entries = catalog.feedback();
    let Some(pos) = entries.iter().position(|f| f.id == id) else {
        bail!("feedback '{}' not found", args.id);
    };
    let removed = entries.remove(pos);
    catalog.save_feedback(&entries)?;

    if ctx.json {
        output_json(&serde_json::json!({ "deleted": removed.display_code() }));
    } else if !ctx.quiet {
        println!("Deleted feedback {}", removed.display_code());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_id_accepts_both_forms() {
        assert_eq!(parse_id("7").unwrap(), 7);
        assert_eq!(parse_id("PH007").unwrap(), 7);
        assert_eq!(parse_id("ph12").unwrap(), 12);
        assert!(parse_id("BT001").is_err());
        assert!(parse_id("abc").is_err());
    }

    #[test]
    fn excerpt_truncates_long_messages() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("a very long message indeed", 10), "a very lon...");
    }
}
