//! Passenger records.

use serde::{Deserialize, Serialize};

/// A registered passenger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// Business key, operator-entered (e.g. `P001`).
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub email: String,
}
