//! Stop records.

use serde::{Deserialize, Serialize};

/// A named stop on the network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// Business key, operator-entered (e.g. `S001`).
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub name: String,

    /// Street address or landmark description.
    #[serde(default)]
    pub location: String,
}
