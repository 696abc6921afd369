//! Bus status inference.
//!
//! The one nontrivial rule set in the system: every tick derives each
//! vehicle's operational state from its schedule entries and the current
//! wall-clock time. [`window`] resolves a schedule into concrete instants,
//! [`tick`] holds the pure per-fleet evaluation, [`monitor`] runs it on the
//! 30-second loop, and [`clock`] makes time injectable for tests.

pub mod clock;
pub mod monitor;
pub mod tick;
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use monitor::{MonitorOptions, StatusMonitor, run_tick, set_state};
pub use tick::{SkippedSchedule, TickOutcome, evaluate_fleet};
pub use window::{PREP_MINUTES, Phase, ServiceWindow};
