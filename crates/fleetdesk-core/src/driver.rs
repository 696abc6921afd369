//! Driver records.

use serde::{Deserialize, Serialize};

/// A driver on the payroll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    /// Business key, operator-entered (e.g. `D001`).
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub national_id: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub years_experience: u32,

    #[serde(default)]
    pub license_no: String,

    /// Issue date of the driving license, `YYYY-MM-DD`.
    #[serde(default)]
    pub license_issued_on: String,
}
