//! Passenger feedback records.

use serde::{Deserialize, Serialize};

use crate::idgen;

/// Feedback sent in by a passenger, optionally tied to a schedule entry or
/// a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Numeric id, assigned max+1. Displayed as `PH001`.
    #[serde(default)]
    pub id: u32,

    #[serde(default)]
    pub passenger_code: String,

    /// Date the feedback was sent, `YYYY-MM-DD`.
    #[serde(default)]
    pub sent_on: String,

    #[serde(default)]
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_code: Option<String>,
}

impl Feedback {
    pub fn display_code(&self) -> String {
        idgen::display_code(idgen::FEEDBACK_PREFIX, self.id)
    }
}
