//! Schedule entries.

use serde::{Deserialize, Serialize};

/// A schedule entry binding a vehicle, a driver and a route to a service
/// date with start and end times-of-day.
///
/// Date and time fields are kept as strings and parsed at use sites so a
/// malformed entry degrades to a skipped record instead of poisoning the
/// whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Generated business key (`LC001`, `LC002`, ...).
    #[serde(default)]
    pub code: String,

    /// Service date, `YYYY-MM-DD`.
    #[serde(default)]
    pub service_date: String,

    /// Departure time-of-day, `HH:MM`.
    #[serde(default)]
    pub departs_at: String,

    /// End time-of-day, `HH:MM`. An end earlier than the departure means the
    /// trip ends on the following calendar day.
    #[serde(default)]
    pub ends_at: String,

    #[serde(default)]
    pub driver_code: String,

    #[serde(default)]
    pub bus_plate: String,

    #[serde(default)]
    pub route_code: String,
}
