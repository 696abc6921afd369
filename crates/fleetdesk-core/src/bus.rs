//! Bus records.

use serde::{Deserialize, Serialize};

/// A vehicle in the fleet, keyed by its license plate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bus {
    /// License plate, the business key (e.g. `29A-12345`).
    #[serde(default)]
    pub plate: String,

    /// Vehicle model or body type.
    #[serde(default)]
    pub model: String,

    /// Seat capacity.
    #[serde(default)]
    pub capacity: u32,
}
