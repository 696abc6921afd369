//! `fleet route` -- manage bus routes and their ordered stops.

use anyhow::{Result, bail};
use serde::Serialize;

use fleetdesk_core::route::{Route, RouteStop};
use fleetdesk_core::search::TextSearch;
use fleetdesk_core::validation;

use crate::cli::{
    RouteAddArgs, RouteArgs, RouteCommands, RouteDeleteArgs, RouteListArgs, RouteShowArgs,
    RouteStopsArgs, RouteStopsCommands, RouteStopsListArgs, RouteStopsSetArgs, RouteUpdateArgs,
};
use crate::context::RuntimeContext;
use crate::output::{code_with_name, dash_if_empty, output_json, output_table};

/// Execute the `fleet route` command.
pub fn run(ctx: &RuntimeContext, args: &RouteArgs) -> Result<()> {
    match &args.command {
        RouteCommands::Add(args) => add(ctx, args),
        RouteCommands::List(args) => list(ctx, args),
        RouteCommands::Show(args) => show(ctx, args),
        RouteCommands::Update(args) => update(ctx, args),
        RouteCommands::Delete(args) => delete(ctx, args),
        RouteCommands::Stops(args) => stops(ctx, args),
    }
}

fn add(ctx: &RuntimeContext, args: &RouteAddArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut routes = catalog.routes();

    validation::require("code", &args.code)?;
    validation::require("name", &args.name)?;
    validation::unique_code("route", &args.code, routes.iter().map(|r| r.code.as_str()))?;

    let route = Route {
        code: args.code.clone(),
        name: args.name.clone(),
        itinerary: args.itinerary.clone(),
    };
    routes.push(route.clone());
    catalog.save_routes(&routes)?;

    if ctx.json {
        output_json(&route);
    } else if !ctx.quiet {
        println!("Added route {}", route.code);
    }
    Ok(())
}

fn list(ctx: &RuntimeContext, args: &RouteListArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut routes = catalog.routes();
    if let Some(query) = &args.search {
        routes.retain(|r| r.matches(query));
    }

    if ctx.json {
        output_json(&routes);
        return Ok(());
    }
    if routes.is_empty() {
        if !ctx.quiet {
            println!("No routes found.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = routes
        .iter()
        .map(|r| {
            vec![
                r.code.clone(),
                r.name.clone(),
                dash_if_empty(&r.itinerary),
            ]
        })
        .collect();
    output_table(&["CODE", "NAME", "ITINERARY"], &rows);
    Ok(())
}

/// Detail view of a route, stops resolved in travel order.
#[derive(Serialize)]
struct RouteDetail {
    #[serde(flatten)]
    route: Route,
    stops: Vec<RouteStop>,
}

fn show(ctx: &RuntimeContext, args: &RouteShowArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let routes = catalog.routes();
    let Some(route) = routes.iter().find(|r| r.code == args.code) else {
        bail!("route '{}' not found", args.code);
    };

    let mut assigned: Vec<RouteStop> = catalog
        .route_stops()
        .into_iter()
        .filter(|rs| rs.route_code == route.code)
        .collect();
    assigned.sort_by_key(|rs| rs.position);

    if ctx.json {
        output_json(&RouteDetail {
            route: route.clone(),
            stops: assigned,
        });
        return Ok(());
    }

    let stops = catalog.stops();
    println!("{}  {}", route.code, route.name);
    if !route.itinerary.is_empty() {
        println!("  Itinerary: {}", route.itinerary);
    }
    if assigned.is_empty() {
        println!("  Stops: none assigned");
    } else {
        println!("  Stops:");
        for rs in &assigned {
            let name = stops
                .iter()
                .find(|s| s.code == rs.stop_code)
                .map(|s| s.name.as_str());
            println!("    {}. {}", rs.position, code_with_name(&rs.stop_code, name));
        }
    }
    Ok(())
}

fn update(ctx: &RuntimeContext, args: &RouteUpdateArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut routes = catalog.routes();
    let Some(route) = routes.iter_mut().find(|r| r.code == args.code) else {
        bail!("route '{}' not found", args.code);
    };

    if args.name.is_none() && args.itinerary.is_none() {
        bail!("no fields to update. Specify at least one of --name, --itinerary");
    }
    if let Some(name) = &args.name {
        validation::require("name", name)?;
        route.name = name.clone();
    }
    if let Some(itinerary) = &args.itinerary {
        route.itinerary = itinerary.clone();
    }

    let updated = route.clone();
    catalog.save_routes(&routes)?;

    if ctx.json {
        output_json(&updated);
    } else if !ctx.quiet {
        println!("Updated route {}", updated.code);
    }
    Ok(())
}

fn delete(ctx: &RuntimeContext, args: &RouteDeleteArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let mut routes = catalog.routes();
    let Some(pos) = routes.iter().position(|r| r.code == args.code) else {
        bail!("route '{}' not found", args.code);
    };
    routes.remove(pos);
    catalog.save_routes(&routes)?;

    // Drop the stop assignment along with the route.
    let mut route_stops = catalog.route_stops();
    let before = route_stops.len();
    route_stops.retain(|rs| rs.route_code != args.code);
    if route_stops.len() != before {
        catalog.save_route_stops(&route_stops)?;
    }

    if ctx.json {
        output_json(&serde_json::json!({ "deleted": args.code }));
    } else if !ctx.quiet {
        println!("Deleted route {}", args.code);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Stop assignment
// ---------------------------------------------------------------------------

fn stops(ctx: &RuntimeContext, args: &RouteStopsArgs) -> Result<()> {
    match &args.command {
        RouteStopsCommands::Set(args) => stops_set(ctx, args),
        RouteStopsCommands::List(args) => stops_list(ctx, args),
    }
}

fn stops_set(ctx: &RuntimeContext, args: &RouteStopsSetArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let routes = catalog.routes();
    if !routes.iter().any(|r| r.code == args.route) {
        bail!("route '{}' not found", args.route);
    }

    let known = catalog.stops();
    for code in &args.stops {
        if !known.iter().any(|s| &s.code == code) {
            bail!("stop '{}' not found", code);
        }
    }

    // Replace the whole assignment for this route, keep other routes as-is.
    let mut route_stops: Vec<RouteStop> = catalog
        .route_stops()
        .into_iter()
        .filter(|rs| rs.route_code != args.route)
        .collect();
    for (i, code) in args.stops.iter().enumerate() {
        route_stops.push(RouteStop {
            route_code: args.route.clone(),
            stop_code: code.clone(),
            position: (i + 1) as u32,
        });
    }
    catalog.save_route_stops(&route_stops)?;

    if ctx.json {
        output_json(&serde_json::json!({
            "route": args.route,
            "stops": args.stops,
        }));
    } else if !ctx.quiet {
        println!("Assigned {} stops to route {}", args.stops.len(), args.route);
    }
    Ok(())
}

fn stops_list(ctx: &RuntimeContext, args: &RouteStopsListArgs) -> Result<()> {
    let catalog = ctx.open_catalog()?;
    let routes = catalog.routes();
    if !routes.iter().any(|r| r.code == args.route) {
        bail!("route '{}' not found", args.route);
    }

    let mut assigned: Vec<RouteStop> = catalog
        .route_stops()
        .into_iter()
        .filter(|rs| rs.route_code == args.route)
        .collect();
    assigned.sort_by_key(|rs| rs.position);

    if ctx.json {
        output_json(&assigned);
        return Ok(());
    }
    if assigned.is_empty() {
        if !ctx.quiet {
            println!("No stops assigned to route {}.", args.route);
        }
        return Ok(());
    }

    let stops = catalog.stops();
    let rows: Vec<Vec<String>> = assigned
        .iter()
        .map(|rs| {
            let stop = stops.iter().find(|s| s.code == rs.stop_code);
            vec![
                rs.position.to_string(),
                rs.stop_code.clone(),
                stop.map(|s| s.name.clone()).unwrap_or_else(|| "-".to_string()),
                stop.map(|s| dash_if_empty(&s.location)).unwrap_or_else(|| "-".to_string()),
            ]
        })
        .collect();
    output_table(&["POS", "CODE", "NAME", "LOCATION"], &rows);
    Ok(())
}
