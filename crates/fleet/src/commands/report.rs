//! `fleet report` -- revenue, expense and route reports.
//!
//! Ranges default to the current calendar month. Every report renders
//! as a table, as JSON with `--json`, or as CSV with `--out`.

use anyhow::{Context, Result, bail};
use chrono::Local;

use fleetdesk_core::timeparse::parse_date;
use fleetdesk_report::{
    DateRange, SummaryInput, expense_report, revenue_report, route_distribution, summarize,
};
use fleetdesk_ui::styles::render_category;

use crate::cli::{
    ReportArgs, ReportCommands, ReportExpensesArgs, ReportRevenueArgs, ReportRoutesArgs,
};
use crate::commands::export::{records_to_csv, write_csv};
use crate::context::RuntimeContext;
use crate::output::{format_amount, output_json, output_table};

/// Execute the `fleet report` command.
pub fn run(ctx: &RuntimeContext, args: &ReportArgs) -> Result<()> {
    match &args.command {
        ReportCommands::Revenue(args) => revenue(ctx, args),
        ReportCommands::Expenses(args) => expenses(ctx, args),
        ReportCommands::Routes(args) => routes(ctx, args),
        ReportCommands::Summary => summary(ctx),
    }
}

/// `--from`/`--to` when both are given, the current month when neither is.
fn resolve_range(from: &Option<String>, to: &Option<String>) -> Result<DateRange> {
    match (from, to) {
        (Some(from), Some(to)) => {
            let from = parse_date(from).with_context(|| format!("invalid --from '{}'", from))?;
            let to = parse_date(to).with_context(|| format!("invalid --to '{}'", to))?;
            if from > to {
                bail!("--from {} is after --to {}", from, to);
            }
            Ok(DateRange::new(from, to))
        }
        (None, None) => Ok(DateRange::current_month(Local::now().date_naive())),
        _ => bail!("specify both --from and --to, or neither for the current month"),
    }
}

fn revenue(ctx: &RuntimeContext, args: &ReportRevenueArgs) -> Result<()> {
    let range = resolve_range(&args.from, &args.to)?;
    let catalog = ctx.open_catalog()?;
    let report = revenue_report(
        &catalog.tickets(),
        &catalog.schedules(),
        range,
        args.route.as_deref(),
    );

    if let Some(out) = &args.out {
        write_csv(&records_to_csv(&report.days)?, out)?;
        if !ctx.quiet && out != "-" {
            println!("Wrote revenue report to {}", out);
        }
        return Ok(());
    }
    if ctx.json {
        output_json(&report);
        return Ok(());
    }

    if !ctx.quiet {
        match &report.route_code {
            Some(route) => println!("Revenue {} to {} (route {})", range.from, range.to, route),
            None => println!("Revenue {} to {}", range.from, range.to),
        }
    }
    if report.days.is_empty() {
        if !ctx.quiet {
            println!("No tickets in range.");
        }
        return Ok(());
    }
    let rows: Vec<Vec<String>> = report
        .days
        .iter()
        .map(|d| {
            vec![
                d.date.to_string(),
                format_amount(d.revenue),
                d.tickets.to_string(),
            ]
        })
        .collect();
    output_table(&["DATE", "REVENUE", "TICKETS"], &rows);
    if !ctx.quiet {
        println!();
        println!(
            "Total: {} from {} ticket(s)",
            format_amount(report.total),
            report.ticket_count
        );
    }
    Ok(())
}

fn expenses(ctx: &RuntimeContext, args: &ReportExpensesArgs) -> Result<()> {
    let range = resolve_range(&args.from, &args.to)?;
    let catalog = ctx.open_catalog()?;
    let report = expense_report(&catalog.maintenance(), range);

    if let Some(out) = &args.out {
        write_csv(&records_to_csv(&report.days)?, out)?;
        if !ctx.quiet && out != "-" {
            println!("Wrote expense report to {}", out);
        }
        return Ok(());
    }
    if ctx.json {
        output_json(&report);
        return Ok(());
    }

    if !ctx.quiet {
        println!("Maintenance spending {} to {}", range.from, range.to);
    }
    if report.days.is_empty() {
        if !ctx.quiet {
            println!("No maintenance in range.");
        }
        return Ok(());
    }
    let rows: Vec<Vec<String>> = report
        .days
        .iter()
        .map(|d| {
            vec![
                d.date.to_string(),
                format_amount(d.cost),
                d.jobs.to_string(),
            ]
        })
        .collect();
    output_table(&["DATE", "COST", "JOBS"], &rows);
    if !ctx.quiet {
        println!();
        println!(
            "Total: {} across {} job(s)",
            format_amount(report.total),
            report.job_count
        );
    }
    Ok(())
}

fn routes(ctx: &RuntimeContext, args: &ReportRoutesArgs) -> Result<()> {
    let range = resolve_range(&args.from, &args.to)?;
    let catalog = ctx.open_catalog()?;
    let distribution = route_distribution(
        &catalog.tickets(),
        &catalog.schedules(),
        &catalog.routes(),
        range,
    );

    if let Some(out) = &args.out {
        write_csv(&records_to_csv(&distribution)?, out)?;
        if !ctx.quiet && out != "-" {
            println!("Wrote route report to {}", out);
        }
        return Ok(());
    }
    if ctx.json {
        output_json(&distribution);
        return Ok(());
    }

    if !ctx.quiet {
        println!("Tickets per route {} to {}", range.from, range.to);
    }
    if distribution.is_empty() {
        if !ctx.quiet {
            println!("No tickets in range.");
        }
        return Ok(());
    }
    let rows: Vec<Vec<String>> = distribution
        .iter()
        .map(|d| {
            vec![
                d.route_code.clone(),
                d.route_name.clone(),
                d.tickets.to_string(),
            ]
        })
        .collect();
    output_table(&["ROUTE", "NAME", "TICKETS"], &rows);
    Ok(())
}

fn summary(ctx: &RuntimeContext) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let routes = catalog.routes();
    let buses = catalog.buses();
    let drivers = catalog.drivers();
    let schedules = catalog.schedules();
    let passengers = catalog.passengers();
    let tickets = catalog.tickets();
    let feedback = catalog.feedback();
    let maintenance = catalog.maintenance();

    let input = SummaryInput {
        routes: &routes,
        buses: &buses,
        drivers: &drivers,
        schedules: &schedules,
        passengers: &passengers,
        tickets: &tickets,
        feedback: &feedback,
        maintenance: &maintenance,
    };
    let summary = summarize(&input, Local::now().date_naive());

    if ctx.json {
        output_json(&summary);
        return Ok(());
    }

    println!("{}", render_category("FLEET"));
    println!("  Routes:      {}", summary.routes);
    println!("  Buses:       {}", summary.buses);
    println!("  Drivers:     {}", summary.drivers);
    println!("  Schedules:   {} ({} today)", summary.schedules, summary.schedules_today);
    println!();
    println!("{}", render_category("PASSENGERS"));
    println!("  Passengers:  {}", summary.passengers);
    println!("  Tickets:     {}", summary.tickets);
    println!("  Feedback:    {}", summary.feedback);
    println!();
    println!("{}", render_category("THIS MONTH"));
    println!("  Revenue:     {}", format_amount(summary.month_revenue));
    println!("  Expenses:    {}", format_amount(summary.month_expense));
    println!("  Net:         {}", format_amount(summary.month_net));
    Ok(())
}
