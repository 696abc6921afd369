//! fleet -- back-office console for a bus fleet.
//!
//! Binary entry point. Parses the CLI, builds the runtime context and
//! dispatches to the command modules.

use std::process;
use std::sync::atomic::{AtomicBool, Ordering};

mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// True once the user has pressed Ctrl-C. Long-running commands
/// (`status watch`) poll this to tear down cleanly.
pub fn interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

fn main() {
    // First Ctrl-C requests a clean shutdown, a second one forces exit.
    let _ = ctrlc::set_handler(|| {
        if INTERRUPTED.swap(true, Ordering::SeqCst) {
            process::exit(130);
        }
    });

    let cli = Cli::parse();
    let ctx = RuntimeContext::from_global_args(&cli.global);

    let filter = if ctx.verbose {
        "fleet=debug,fleetdesk_store=debug,fleetdesk_engine=debug"
    } else if ctx.quiet {
        "error"
    } else {
        "fleet=info,fleetdesk_store=warn,fleetdesk_engine=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match &cli.command {
        Some(Commands::Init(args)) => commands::init::run(&ctx, args),
        Some(Commands::Route(args)) => commands::route::run(&ctx, args),
        Some(Commands::Stop(args)) => commands::stop::run(&ctx, args),
        Some(Commands::Bus(args)) => commands::bus::run(&ctx, args),
        Some(Commands::Driver(args)) => commands::driver::run(&ctx, args),
        Some(Commands::Schedule(args)) => commands::schedule::run(&ctx, args),
        Some(Commands::Passenger(args)) => commands::passenger::run(&ctx, args),
        Some(Commands::Ticket(args)) => commands::ticket::run(&ctx, args),
        Some(Commands::Feedback(args)) => commands::feedback::run(&ctx, args),
        Some(Commands::Maintenance(args)) => commands::maintenance::run(&ctx, args),
        Some(Commands::Status(args)) => commands::status_cmd::run(&ctx, args),
        Some(Commands::Report(args)) => commands::report::run(&ctx, args),
        Some(Commands::Export(args)) => commands::export::run(&ctx, args),
        Some(Commands::Settings(args)) => commands::settings_cmd::run(&ctx, args),
        Some(Commands::Completion(args)) => commands::completion::run(&ctx, args),
        Some(Commands::Version) => commands::version::run(&ctx),
        None => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let _ = cmd.print_help();
            Ok(())
        }
    };

    if let Err(e) = result {
        if ctx.json {
            let err = serde_json::json!({ "error": format!("{:#}", e) });
            println!("{}", err);
        } else {
            eprintln!("Error: {:#}", e);
        }
        process::exit(1);
    }
}
