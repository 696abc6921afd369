//! `fleet passenger` -- manage passengers.

use anyhow::{Result, bail};

use fleetdesk_core::passenger::Passenger;
use fleetdesk_core::search::TextSearch;
use fleetdesk_core::validation;

use crate::cli::{
    PassengerAddArgs, PassengerArgs, PassengerCommands, PassengerDeleteArgs, PassengerListArgs,
    PassengerUpdateArgs,
};
use crate::context::RuntimeContext;
use crate::output::{dash_if_empty, output_json, output_table};

/// Execute the `fleet passenger` command.
pub fn run(ctx: &RuntimeContext, args: &PassengerArgs) -> Result<()> {
    match &args.command {
        PassengerCommands::Add(args) => add(ctx, args),
        PassengerCommands::List(args) => list(ctx, args),
        PassengerCommands::Update(args) => update(ctx, args),
        PassengerCommands::Delete(args) => delete(ctx, args),
    }
}

fn add(ctx: &RuntimeContext, args: &PassengerAddArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut passengers = catalog.passengers();

    validation::require("code", &args.code)?;
    validation::require("name", &args.name)?;
    validation::unique_code(
        "passenger",
        &args.code,
        passengers.iter().map(|p| p.code.as_str()),
    )?;
    validation::phone(&args.phone)?;
    validation::email(&args.email)?;

    let passenger = Passenger {
        code: args.code.clone(),
        name: args.name.clone(),
        phone: args.phone.clone(),
        email: args.email.clone(),
    };
    passengers.push(passenger.clone());
    catalog.save_passengers(&passengers)?;

    if ctx.json {
        output_json(&passenger);
    } else if !ctx.quiet {
        println!("Added passenger {}", passenger.code);
    }
    Ok(())
}

fn list(ctx: &RuntimeContext, args: &PassengerListArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut passengers = catalog.passengers();
    if let Some(query) = &args.search {
        passengers.retain(|p| p.matches(query));
    }

    if ctx.json {
        output_json(&passengers);
        return Ok(());
    }
    if passengers.is_empty() {
        if !ctx.quiet {
            println!("No passengers found.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = passengers
        .iter()
        .map(|p| {
            vec![
                p.code.clone(),
                p.name.clone(),
                dash_if_empty(&p.phone),
                dash_if_empty(&p.email),
            ]
        })
        .collect();
    output_table(&["CODE", "NAME", "PHONE", "EMAIL"], &rows);
    Ok(())
}

fn update(ctx: &RuntimeContext, args: &PassengerUpdateArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut passengers = catalog.passengers();
    let Some(passenger) = passengers.iter_mut().find(|p| p.code == args.code) else {
        bail!("passenger '{}' not found", args.code);
    };

    if args.name.is_none() && args.phone.is_none() && args.email.is_none() {
        bail!("no fields to update. Specify at least one of --name, --phone, --email");
    }
    if let Some(name) = &args.name {
        validation::require("name", name)?;
        passenger.name = name.clone();
    }
    if let Some(phone) = &args.phone {
        validation::phone(phone)?;
        passenger.phone = phone.clone();
    }
    if let Some(email) = &args.email {
        validation::email(email)?;
        passenger.email = email.clone();
    }

    let updated = passenger.clone();
    catalog.save_passengers(&passengers)?;

    if ctx.json {
        output_json(&updated);
    } else if !ctx.quiet {
        println!("Updated passenger {}", updated.code);
    }
    Ok(())
}

fn delete(ctx: &RuntimeContext, args: &PassengerDeleteArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut passengers = catalog.passengers();
    let Some(pos) = passengers.iter().position(|p| p.code == args.code) else {
        bail!("passenger '{}' not found", args.code);
    };
    passengers.remove(pos);
    catalog.save_passengers(&passengers)?;

    if ctx.json {
        output_json(&serde_json::json!({ "deleted": args.code }));
    } else if !ctx.quiet {
        println!("Deleted passenger {}", args.code);
    }
    Ok(())
}
