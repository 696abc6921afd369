//! Maintenance records.

use serde::{Deserialize, Serialize};

use crate::idgen;

/// A workshop job performed on a vehicle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    /// Numeric id, assigned max+1. Displayed as `BT001`.
    #[serde(default)]
    pub id: u32,

    #[serde(default)]
    pub bus_plate: String,

    /// Technician in charge of the job.
    #[serde(default)]
    pub technician: String,

    /// Date the work was performed, `YYYY-MM-DD`.
    #[serde(default)]
    pub performed_on: String,

    /// Description of the work.
    #[serde(default)]
    pub work: String,

    /// Cost in whole currency units.
    #[serde(default)]
    pub cost: i64,

    /// Expected completion date, `YYYY-MM-DD`.
    #[serde(default)]
    pub expected_done_on: String,
}

impl MaintenanceRecord {
    pub fn display_code(&self) -> String {
        idgen::display_code(idgen::MAINTENANCE_PREFIX, self.id)
    }
}
