//! `fleet driver` -- manage drivers.

use anyhow::{Result, bail};

use fleetdesk_core::driver::Driver;
use fleetdesk_core::search::TextSearch;
use fleetdesk_core::validation;

use crate::cli::{
    DriverAddArgs, DriverArgs, DriverCommands, DriverDeleteArgs, DriverListArgs, DriverUpdateArgs,
};
use crate::context::RuntimeContext;
use crate::output::{dash_if_empty, output_json, output_table};

/// Execute the `fleet driver` command.
pub fn run(ctx: &RuntimeContext, args: &DriverArgs) -> Result<()> {
    match &args.command {
        DriverCommands::Add(args) => add(ctx, args),
        DriverCommands::List(args) => list(ctx, args),
        DriverCommands::Update(args) => update(ctx, args),
        DriverCommands::Delete(args) => delete(ctx, args),
    }
}

fn add(ctx: &RuntimeContext, args: &DriverAddArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut drivers = catalog.drivers();

    validation::require("code", &args.code)?;
    validation::require("name", &args.name)?;
    validation::unique_code("driver", &args.code, drivers.iter().map(|d| d.code.as_str()))?;
    validation::email(&args.email)?;
    validation::phone(&args.phone)?;

    let driver = Driver {
        code: args.code.clone(),
        name: args.name.clone(),
        email: args.email.clone(),
        national_id: args.national_id.clone(),
        phone: args.phone.clone(),
        years_experience: args.experience,
        license_no: args.license_no.clone(),
        license_issued_on: args.license_issued.clone(),
    };
    drivers.push(driver.clone());
    catalog.save_drivers(&drivers)?;

    if ctx.json {
        output_json(&driver);
    } else if !ctx.quiet {
        println!("Added driver {}", driver.code);
    }
    Ok(())
}

fn list(ctx: &RuntimeContext, args: &DriverListArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut drivers = catalog.drivers();
    if let Some(query) = &args.search {
        drivers.retain(|d| d.matches(query));
    }

    if ctx.json {
        output_json(&drivers);
        return Ok(());
    }
    if drivers.is_empty() {
        if !ctx.quiet {
            println!("No drivers found.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = drivers
        .iter()
        .map(|d| {
            vec![
                d.code.clone(),
                d.name.clone(),
                dash_if_empty(&d.phone),
                dash_if_empty(&d.email),
                d.years_experience.to_string(),
                dash_if_empty(&d.license_no),
            ]
        })
        .collect();
    output_table(
        &["CODE", "NAME", "PHONE", "EMAIL", "EXPERIENCE", "LICENCE"],
        &rows,
    );
    Ok(())
}

fn update(ctx: &RuntimeContext, args: &DriverUpdateArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut drivers = catalog.drivers();
    let Some(driver) = drivers.iter_mut().find(|d| d.code == args.code) else {
        bail!("driver '{}' not found", args.code);
    };

    let no_fields = args.name.is_none()
        && args.email.is_none()
        && args.national_id.is_none()
        && args.phone.is_none()
        && args.experience.is_none()
        && args.license_no.is_none()
        && args.license_issued.is_none();
    if no_fields {
        bail!(
            "no fields to update. Specify at least one field flag (--name, --email, --national-id, --phone, --experience, --license-no, --license-issued)"
        );
    }

    if let Some(name) = &args.name {
        validation::require("name", name)?;
        driver.name = name.clone();
    }
    if let Some(email) = &args.email {
        validation::email(email)?;
        driver.email = email.clone();
    }
    if let Some(national_id) = &args.national_id {
        driver.national_id = national_id.clone();
    }
    if let Some(phone) = &args.phone {
        validation::phone(phone)?;
        driver.phone = phone.clone();
    }
    if let Some(experience) = args.experience {
        driver.years_experience = experience;
    }
    if let Some(license_no) = &args.license_no {
        driver.license_no = license_no.clone();
    }
    if let Some(license_issued) = &args.license_issued {
        driver.license_issued_on = license_issued.clone();
    }

    let updated = driver.clone();
    catalog.save_drivers(&drivers)?;

    if ctx.json {
        output_json(&updated);
    } else if !ctx.quiet {
        println!("Updated driver {}", updated.code);
    }
    Ok(())
}

fn delete(ctx: &RuntimeContext, args: &DriverDeleteArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut drivers = catalog.drivers();
    let Some(pos) = drivers.iter().position(|d| d.code == args.code) else {
        bail!("driver '{}' not found", args.code);
    };
    drivers.remove(pos);
    catalog.save_drivers(&drivers)?;

    if ctx.json {
        output_json(&serde_json::json!({ "deleted": args.code }));
    } else if !ctx.quiet {
        println!("Deleted driver {}", args.code);
    }
    Ok(())
}
