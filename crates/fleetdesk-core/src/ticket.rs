//! Ticket records.

use serde::{Deserialize, Serialize};

/// A sold ticket linking a passenger to a schedule entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Generated business key (`VE001`, `VE002`, ...).
    #[serde(default)]
    pub code: String,

    /// Seat label (e.g. `A12`).
    #[serde(default)]
    pub seat: String,

    /// Price in whole currency units.
    #[serde(default)]
    pub price: i64,

    #[serde(default)]
    pub passenger_code: String,

    #[serde(default)]
    pub schedule_code: String,

    /// Booking timestamp, RFC 3339.
    #[serde(default)]
    pub booked_at: String,
}
