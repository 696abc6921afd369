//! Clap CLI definitions for the `fleet` command.
//!
//! This module defines the complete CLI structure using clap 4 derive
//! macros. One args struct per verb, grouped by command family.

use clap::{Args, Parser, Subcommand};

/// fleet -- Back-office console for a bus fleet.
///
/// Manage routes, stops, buses, drivers, schedules, tickets, passengers,
/// feedback and maintenance from the terminal, with live bus status
/// inferred from the day's schedules.
#[derive(Parser, Debug)]
#[command(
    name = "fleet",
    about = "Back-office console for a bus fleet",
    long_about = "Manage routes, stops, buses, drivers, schedules, tickets, passengers, feedback and maintenance from the terminal, with live bus status inferred from the day's schedules.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Data directory (default: auto-discover .fleetdesk upwards from cwd).
    #[arg(long, global = true, env = "FLEETDESK_DIR")]
    pub data_dir: Option<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // ===== Setup =====
    /// Initialize a fleetdesk data directory.
    Init(InitArgs),

    // ===== Fleet Records =====
    /// Manage bus routes.
    Route(RouteArgs),

    /// Manage bus stops.
    Stop(StopArgs),

    /// Manage buses.
    Bus(BusArgs),

    /// Manage drivers.
    Driver(DriverArgs),

    // ===== Daily Operations =====
    /// Manage departure schedules.
    Schedule(ScheduleArgs),

    /// Manage passengers.
    Passenger(PassengerArgs),

    /// Manage tickets.
    Ticket(TicketArgs),

    /// Manage passenger feedback.
    Feedback(FeedbackArgs),

    /// Manage maintenance records.
    Maintenance(MaintenanceArgs),

    // ===== Live Status =====
    /// Inspect and control the live bus status map.
    Status(StatusArgs),

    // ===== Reports & Data =====
    /// Revenue, expense and route reports.
    Report(ReportArgs),

    /// Export a collection as CSV.
    Export(ExportArgs),

    // ===== Configuration =====
    /// Show or change console settings.
    Settings(SettingsArgs),

    /// Generate shell completions.
    Completion(CompletionArgs),

    /// Show version information.
    Version,
}

// ---------------------------------------------------------------------------
// Init
// ---------------------------------------------------------------------------

/// Arguments for `fleet init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Seed the sample fleet into empty collections.
    #[arg(long)]
    pub demo: bool,
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// Arguments for `fleet route`.
#[derive(Args, Debug)]
pub struct RouteArgs {
    #[command(subcommand)]
    pub command: RouteCommands,
}

/// Route subcommands.
#[derive(Subcommand, Debug)]
pub enum RouteCommands {
    /// Add a new route.
    Add(RouteAddArgs),
    /// List routes.
    List(RouteListArgs),
    /// Show route details, including its ordered stops.
    Show(RouteShowArgs),
    /// Update route fields.
    Update(RouteUpdateArgs),
    /// Delete a route.
    Delete(RouteDeleteArgs),
    /// Manage the ordered stop assignment of a route.
    Stops(RouteStopsArgs),
}

/// Arguments for `fleet route add`.
#[derive(Args, Debug)]
pub struct RouteAddArgs {
    /// Route code, e.g. R001.
    pub code: String,
    /// Route display name.
    #[arg(long)]
    pub name: String,
    /// Free-text description of the journey.
    #[arg(long, default_value = "")]
    pub itinerary: String,
}

/// Arguments for `fleet route list`.
#[derive(Args, Debug)]
pub struct RouteListArgs {
    /// Case-insensitive substring filter.
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for `fleet route show`.
#[derive(Args, Debug)]
pub struct RouteShowArgs {
    /// Route code.
    pub code: String,
}

/// Arguments for `fleet route update`.
#[derive(Args, Debug)]
pub struct RouteUpdateArgs {
    /// Route code.
    pub code: String,
    /// New display name.
    #[arg(long)]
    pub name: Option<String>,
    /// New journey description.
    #[arg(long)]
    pub itinerary: Option<String>,
}

/// Arguments for `fleet route delete`.
#[derive(Args, Debug)]
pub struct RouteDeleteArgs {
    /// Route code.
    pub code: String,
}

/// Arguments for `fleet route stops`.
#[derive(Args, Debug)]
pub struct RouteStopsArgs {
    #[command(subcommand)]
    pub command: RouteStopsCommands,
}

/// Route stop-assignment subcommands.
#[derive(Subcommand, Debug)]
pub enum RouteStopsCommands {
    /// Replace the ordered stop list of a route.
    Set(RouteStopsSetArgs),
    /// List the stops of a route in order.
    List(RouteStopsListArgs),
}

/// Arguments for `fleet route stops set`.
#[derive(Args, Debug)]
pub struct RouteStopsSetArgs {
    /// Route code.
    pub route: String,
    /// Stop codes in travel order.
    #[arg(required = true, num_args = 1..)]
    pub stops: Vec<String>,
}

/// Arguments for `fleet route stops list`.
#[derive(Args, Debug)]
pub struct RouteStopsListArgs {
    /// Route code.
    pub route: String,
}

// ---------------------------------------------------------------------------
// Stops
// ---------------------------------------------------------------------------

/// Arguments for `fleet stop`.
#[derive(Args, Debug)]
pub struct StopArgs {
    #[command(subcommand)]
    pub command: StopCommands,
}

/// Stop subcommands.
#[derive(Subcommand, Debug)]
pub enum StopCommands {
    /// Add a new stop.
    Add(StopAddArgs),
    /// List stops.
    List(StopListArgs),
    /// Update stop fields.
    Update(StopUpdateArgs),
    /// Delete a stop.
    Delete(StopDeleteArgs),
}

/// Arguments for `fleet stop add`.
#[derive(Args, Debug)]
pub struct StopAddArgs {
    /// Stop code, e.g. S001.
    pub code: String,
    /// Stop display name.
    #[arg(long)]
    pub name: String,
    /// Street address or landmark.
    #[arg(long, default_value = "")]
    pub location: String,
}

/// Arguments for `fleet stop list`.
#[derive(Args, Debug)]
pub struct StopListArgs {
    /// Case-insensitive substring filter.
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for `fleet stop update`.
#[derive(Args, Debug)]
pub struct StopUpdateArgs {
    /// Stop code.
    pub code: String,
    /// New display name.
    #[arg(long)]
    pub name: Option<String>,
    /// New street address or landmark.
    #[arg(long)]
    pub location: Option<String>,
}

/// Arguments for `fleet stop delete`.
#[derive(Args, Debug)]
pub struct StopDeleteArgs {
    /// Stop code.
    pub code: String,
}

// ---------------------------------------------------------------------------
// Buses
// ---------------------------------------------------------------------------

/// Arguments for `fleet bus`.
#[derive(Args, Debug)]
pub struct BusArgs {
    #[command(subcommand)]
    pub command: BusCommands,
}

/// Bus subcommands.
#[derive(Subcommand, Debug)]
pub enum BusCommands {
    /// Add a new bus.
    Add(BusAddArgs),
    /// List buses with their current status.
    List(BusListArgs),
    /// Update bus fields.
    Update(BusUpdateArgs),
    /// Delete a bus.
    Delete(BusDeleteArgs),
}

/// Arguments for `fleet bus add`.
#[derive(Args, Debug)]
pub struct BusAddArgs {
    /// Licence plate, e.g. 29A-12345. The business key of the bus.
    pub plate: String,
    /// Bus model or body type.
    #[arg(long)]
    pub model: String,
    /// Seat capacity.
    #[arg(long)]
    pub capacity: u32,
}

/// Arguments for `fleet bus list`.
#[derive(Args, Debug)]
pub struct BusListArgs {
    /// Case-insensitive substring filter.
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for `fleet bus update`.
#[derive(Args, Debug)]
pub struct BusUpdateArgs {
    /// Licence plate.
    pub plate: String,
    /// New model or body type.
    #[arg(long)]
    pub model: Option<String>,
    /// New seat capacity.
    #[arg(long)]
    pub capacity: Option<u32>,
}

/// Arguments for `fleet bus delete`.
#[derive(Args, Debug)]
pub struct BusDeleteArgs {
    /// Licence plate.
    pub plate: String,
}

// ---------------------------------------------------------------------------
// Drivers
// ---------------------------------------------------------------------------

/// Arguments for `fleet driver`.
#[derive(Args, Debug)]
pub struct DriverArgs {
    #[command(subcommand)]
    pub command: DriverCommands,
}

/// Driver subcommands.
#[derive(Subcommand, Debug)]
pub enum DriverCommands {
    /// Add a new driver.
    Add(DriverAddArgs),
    /// List drivers.
    List(DriverListArgs),
    /// Update driver fields.
    Update(DriverUpdateArgs),
    /// Delete a driver.
    Delete(DriverDeleteArgs),
}

/// Arguments for `fleet driver add`.
#[derive(Args, Debug)]
pub struct DriverAddArgs {
    /// Driver code, e.g. D001.
    pub code: String,
    /// Full name.
    #[arg(long)]
    pub name: String,
    /// Email address.
    #[arg(long, default_value = "")]
    pub email: String,
    /// National id number.
    #[arg(long, default_value = "")]
    pub national_id: String,
    /// Phone number.
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Years of driving experience.
    #[arg(long, default_value_t = 0)]
    pub experience: u32,
    /// Driving licence number.
    #[arg(long, default_value = "")]
    pub license_no: String,
    /// Licence issue date (YYYY-MM-DD).
    #[arg(long, default_value = "")]
    pub license_issued: String,
}

/// Arguments for `fleet driver list`.
#[derive(Args, Debug)]
pub struct DriverListArgs {
    /// Case-insensitive substring filter.
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for `fleet driver update`.
#[derive(Args, Debug)]
pub struct DriverUpdateArgs {
    /// Driver code.
    pub code: String,
    /// New full name.
    #[arg(long)]
    pub name: Option<String>,
    /// New email address.
    #[arg(long)]
    pub email: Option<String>,
    /// New national id number.
    #[arg(long)]
    pub national_id: Option<String>,
    /// New phone number.
    #[arg(long)]
    pub phone: Option<String>,
    /// New years of driving experience.
    #[arg(long)]
    pub experience: Option<u32>,
    /// New driving licence number.
    #[arg(long)]
    pub license_no: Option<String>,
    /// New licence issue date (YYYY-MM-DD).
    #[arg(long)]
    pub license_issued: Option<String>,
}

/// Arguments for `fleet driver delete`.
#[derive(Args, Debug)]
pub struct DriverDeleteArgs {
    /// Driver code.
    pub code: String,
}

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

/// Arguments for `fleet schedule`.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    pub command: ScheduleCommands,
}

/// Schedule subcommands.
#[derive(Subcommand, Debug)]
pub enum ScheduleCommands {
    /// Add a new schedule (code is assigned automatically).
    Add(ScheduleAddArgs),
    /// List schedules.
    List(ScheduleListArgs),
    /// Update schedule fields.
    Update(ScheduleUpdateArgs),
    /// Delete a schedule.
    Delete(ScheduleDeleteArgs),
}

/// Arguments for `fleet schedule add`.
#[derive(Args, Debug)]
pub struct ScheduleAddArgs {
    /// Service date (YYYY-MM-DD).
    #[arg(long)]
    pub date: String,
    /// Departure time (HH:MM).
    #[arg(long)]
    pub departs: String,
    /// End-of-service time (HH:MM). Earlier than --departs means the
    /// run finishes on the following day.
    #[arg(long)]
    pub ends: String,
    /// Driver code.
    #[arg(long)]
    pub driver: String,
    /// Bus licence plate.
    #[arg(long)]
    pub bus: String,
    /// Route code.
    #[arg(long)]
    pub route: String,
}

/// Arguments for `fleet schedule list`.
#[derive(Args, Debug)]
pub struct ScheduleListArgs {
    /// Case-insensitive substring filter.
    #[arg(long)]
    pub search: Option<String>,
    /// Only schedules on this service date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `fleet schedule update`.
#[derive(Args, Debug)]
pub struct ScheduleUpdateArgs {
    /// Schedule code, e.g. LC001.
    pub code: String,
    /// New service date (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<String>,
    /// New departure time (HH:MM).
    #[arg(long)]
    pub departs: Option<String>,
    /// New end-of-service time (HH:MM).
    #[arg(long)]
    pub ends: Option<String>,
    /// New driver code.
    #[arg(long)]
    pub driver: Option<String>,
    /// New bus licence plate.
    #[arg(long)]
    pub bus: Option<String>,
    /// New route code.
    #[arg(long)]
    pub route: Option<String>,
}

/// Arguments for `fleet schedule delete`.
#[derive(Args, Debug)]
pub struct ScheduleDeleteArgs {
    /// Schedule code.
    pub code: String,
}

// ---------------------------------------------------------------------------
// Passengers
// ---------------------------------------------------------------------------

/// Arguments for `fleet passenger`.
#[derive(Args, Debug)]
pub struct PassengerArgs {
    #[command(subcommand)]
    pub command: PassengerCommands,
}

/// Passenger subcommands.
#[derive(Subcommand, Debug)]
pub enum PassengerCommands {
    /// Add a new passenger.
    Add(PassengerAddArgs),
    /// List passengers.
    List(PassengerListArgs),
    /// Update passenger fields.
    Update(PassengerUpdateArgs),
    /// Delete a passenger.
    Delete(PassengerDeleteArgs),
}

/// Arguments for `fleet passenger add`.
#[derive(Args, Debug)]
pub struct PassengerAddArgs {
    /// Passenger code, e.g. P001.
    pub code: String,
    /// Full name.
    #[arg(long)]
    pub name: String,
    /// Phone number.
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Email address.
    #[arg(long, default_value = "")]
    pub email: String,
}

/// Arguments for `fleet passenger list`.
#[derive(Args, Debug)]
pub struct PassengerListArgs {
    /// Case-insensitive substring filter.
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for `fleet passenger update`.
#[derive(Args, Debug)]
pub struct PassengerUpdateArgs {
    /// Passenger code.
    pub code: String,
    /// New full name.
    #[arg(long)]
    pub name: Option<String>,
    /// New phone number.
    #[arg(long)]
    pub phone: Option<String>,
    /// New email address.
    #[arg(long)]
    pub email: Option<String>,
}

/// Arguments for `fleet passenger delete`.
#[derive(Args, Debug)]
pub struct PassengerDeleteArgs {
    /// Passenger code.
    pub code: String,
}

// ---------------------------------------------------------------------------
// Tickets
// ---------------------------------------------------------------------------

/// Arguments for `fleet ticket`.
#[derive(Args, Debug)]
pub struct TicketArgs {
    #[command(subcommand)]
    pub command: TicketCommands,
}

/// Ticket subcommands.
#[derive(Subcommand, Debug)]
pub enum TicketCommands {
    /// Book a ticket (code is assigned automatically).
    Add(TicketAddArgs),
    /// List tickets.
    List(TicketListArgs),
    /// Delete a ticket.
    Delete(TicketDeleteArgs),
}

/// Arguments for `fleet ticket add`.
#[derive(Args, Debug)]
pub struct TicketAddArgs {
    /// Seat label, e.g. A01.
    #[arg(long)]
    pub seat: String,
    /// Price in whole currency units.
    #[arg(long, allow_negative_numbers = true)]
    pub price: i64,
    /// Passenger code.
    #[arg(long)]
    pub passenger: String,
    /// Schedule code.
    #[arg(long)]
    pub schedule: String,
    /// Booking timestamp (RFC 3339, default: now).
    #[arg(long)]
    pub booked_at: Option<String>,
}

/// Arguments for `fleet ticket list`.
#[derive(Args, Debug)]
pub struct TicketListArgs {
    /// Case-insensitive substring filter.
    #[arg(long)]
    pub search: Option<String>,
    /// Only tickets for this schedule code.
    #[arg(long)]
    pub schedule: Option<String>,
}

/// Arguments for `fleet ticket delete`.
#[derive(Args, Debug)]
pub struct TicketDeleteArgs {
    /// Ticket code, e.g. VE001.
    pub code: String,
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

/// Arguments for `fleet feedback`.
#[derive(Args, Debug)]
pub struct FeedbackArgs {
    #[command(subcommand)]
    pub command: FeedbackCommands,
}

/// Feedback subcommands.
#[derive(Subcommand, Debug)]
pub enum FeedbackCommands {
    /// Record passenger feedback (id is assigned automatically).
    Add(FeedbackAddArgs),
    /// List feedback entries.
    List(FeedbackListArgs),
    /// Show one feedback entry in full.
    Show(FeedbackShowArgs),
    /// Delete a feedback entry.
    Delete(FeedbackDeleteArgs),
}

/// Arguments for `fleet feedback add`.
#[derive(Args, Debug)]
pub struct FeedbackAddArgs {
    /// Passenger code.
    #[arg(long)]
    pub passenger: String,
    /// Feedback text.
    #[arg(long)]
    pub message: String,
    /// Date the feedback was sent (YYYY-MM-DD, default: today).
    #[arg(long)]
    pub sent_on: Option<String>,
    /// Related schedule code.
    #[arg(long)]
    pub schedule: Option<String>,
    /// Related route code.
    #[arg(long)]
    pub route: Option<String>,
}

/// Arguments for `fleet feedback list`.
#[derive(Args, Debug)]
pub struct FeedbackListArgs {
    /// Case-insensitive substring filter.
    #[arg(long)]
    pub search: Option<String>,
}

/// Arguments for `fleet feedback show`.
#[derive(Args, Debug)]
pub struct FeedbackShowArgs {
    /// Feedback id, numeric or display form (7 or PH007).
    pub id: String,
}

/// Arguments for `fleet feedback delete`.
#[derive(Args, Debug)]
pub struct FeedbackDeleteArgs {
    /// Feedback id, numeric or display form (7 or PH007).
    pub id: String,
}

// ---------------------------------------------------------------------------
// Maintenance
// ---------------------------------------------------------------------------

/// Arguments for `fleet maintenance`.
#[derive(Args, Debug)]
pub struct MaintenanceArgs {
    #[command(subcommand)]
    pub command: MaintenanceCommands,
}

/// Maintenance subcommands.
#[derive(Subcommand, Debug)]
pub enum MaintenanceCommands {
    /// Record a maintenance job (id is assigned automatically).
    Add(MaintenanceAddArgs),
    /// List maintenance records.
    List(MaintenanceListArgs),
    /// Update maintenance record fields.
    Update(MaintenanceUpdateArgs),
    /// Delete a maintenance record.
    Delete(MaintenanceDeleteArgs),
}

/// Arguments for `fleet maintenance add`.
#[derive(Args, Debug)]
pub struct MaintenanceAddArgs {
    /// Bus licence plate.
    #[arg(long)]
    pub bus: String,
    /// Technician in charge.
    #[arg(long)]
    pub technician: String,
    /// Description of the work.
    #[arg(long)]
    pub work: String,
    /// Cost in whole currency units.
    #[arg(long)]
    pub cost: i64,
    /// Date the work started (YYYY-MM-DD, default: today).
    #[arg(long)]
    pub performed_on: Option<String>,
    /// Expected completion date (YYYY-MM-DD).
    #[arg(long)]
    pub expected_done: Option<String>,
}

/// Arguments for `fleet maintenance list`.
#[derive(Args, Debug)]
pub struct MaintenanceListArgs {
    /// Case-insensitive substring filter.
    #[arg(long)]
    pub search: Option<String>,
    /// Only records for this bus.
    #[arg(long)]
    pub bus: Option<String>,
}

/// Arguments for `fleet maintenance update`.
#[derive(Args, Debug)]
pub struct MaintenanceUpdateArgs {
    /// Record id, numeric or display form (3 or BT003).
    pub id: String,
    /// New bus licence plate.
    #[arg(long)]
    pub bus: Option<String>,
    /// New technician in charge.
    #[arg(long)]
    pub technician: Option<String>,
    /// New description of the work.
    #[arg(long)]
    pub work: Option<String>,
    /// New cost in whole currency units.
    #[arg(long)]
    pub cost: Option<i64>,
    /// New start date (YYYY-MM-DD).
    #[arg(long)]
    pub performed_on: Option<String>,
    /// New expected completion date (YYYY-MM-DD).
    #[arg(long)]
    pub expected_done: Option<String>,
}

/// Arguments for `fleet maintenance delete`.
#[derive(Args, Debug)]
pub struct MaintenanceDeleteArgs {
    /// Record id, numeric or display form (3 or BT003).
    pub id: String,
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Arguments for `fleet status`.
#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(subcommand)]
    pub command: StatusCommands,
}

/// Status subcommands.
#[derive(Subcommand, Debug)]
pub enum StatusCommands {
    /// Show the current status of the fleet (or one bus).
    Show(StatusShowArgs),
    /// Manually override the status of a bus.
    Set(StatusSetArgs),
    /// Run one inference pass over today's schedules.
    Refresh,
    /// Run the status monitor until Ctrl-C, redrawing on change.
    Watch(StatusWatchArgs),
}

/// Arguments for `fleet status show`.
#[derive(Args, Debug)]
pub struct StatusShowArgs {
    /// Licence plate of a single bus.
    pub plate: Option<String>,
}

/// Arguments for `fleet status set`.
#[derive(Args, Debug)]
pub struct StatusSetArgs {
    /// Licence plate.
    pub plate: String,
    /// New state: ready, running, maintenance or broken.
    pub state: String,
}

/// Arguments for `fleet status watch`.
#[derive(Args, Debug)]
pub struct StatusWatchArgs {
    /// Seconds between inference passes.
    #[arg(long, default_value_t = 30)]
    pub interval: u64,
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Arguments for `fleet report`.
#[derive(Args, Debug)]
pub struct ReportArgs {
    #[command(subcommand)]
    pub command: ReportCommands,
}

/// Report subcommands.
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Ticket revenue per day.
    Revenue(ReportRevenueArgs),
    /// Maintenance spending per day.
    Expenses(ReportExpensesArgs),
    /// Tickets sold per route.
    Routes(ReportRoutesArgs),
    /// Fleet-wide dashboard summary.
    Summary,
}

/// Arguments for `fleet report revenue`.
#[derive(Args, Debug)]
pub struct ReportRevenueArgs {
    /// Start of the reporting range (YYYY-MM-DD, default: current month).
    #[arg(long)]
    pub from: Option<String>,
    /// End of the reporting range, inclusive (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<String>,
    /// Restrict to one route code.
    #[arg(long)]
    pub route: Option<String>,
    /// Write the report as CSV to this path ('-' for stdout).
    #[arg(long)]
    pub out: Option<String>,
}

/// Arguments for `fleet report expenses`.
#[derive(Args, Debug)]
pub struct ReportExpensesArgs {
    /// Start of the reporting range (YYYY-MM-DD, default: current month).
    #[arg(long)]
    pub from: Option<String>,
    /// End of the reporting range, inclusive (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<String>,
    /// Write the report as CSV to this path ('-' for stdout).
    #[arg(long)]
    pub out: Option<String>,
}

/// Arguments for `fleet report routes`.
#[derive(Args, Debug)]
pub struct ReportRoutesArgs {
    /// Start of the reporting range (YYYY-MM-DD, default: current month).
    #[arg(long)]
    pub from: Option<String>,
    /// End of the reporting range, inclusive (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<String>,
    /// Write the report as CSV to this path ('-' for stdout).
    #[arg(long)]
    pub out: Option<String>,
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Arguments for `fleet export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Collection to export: routes, stops, route-stops, buses, drivers,
    /// schedules, passengers, tickets, feedback or maintenance.
    pub collection: String,
    /// Output path ('-' for stdout, default: <collection>.csv).
    #[arg(long)]
    pub out: Option<String>,
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Arguments for `fleet settings`.
#[derive(Args, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

/// Settings subcommands.
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show the current settings.
    Show,
    /// Set a settings value by dotted key, e.g. company.name.
    Set(SettingsSetArgs),
    /// Restore all settings to their defaults.
    Reset,
}

/// Arguments for `fleet settings set`.
#[derive(Args, Debug)]
pub struct SettingsSetArgs {
    /// Dotted settings key, e.g. display.currency.
    pub key: String,
    /// New value.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Completion
// ---------------------------------------------------------------------------

/// Arguments for `fleet completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}
