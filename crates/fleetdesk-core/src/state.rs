//! Vehicle operational state and the derived status map.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operational state of a vehicle.
///
/// `Ready`, `Preparing` and `Running` are inferred from schedule windows;
/// `Maintenance` and `Broken` are only ever set by operator override and are
/// never touched by inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleState {
    Ready,
    Preparing,
    Running,
    Maintenance,
    Broken,
}

impl VehicleState {
    pub const ALL: [VehicleState; 5] = [
        VehicleState::Ready,
        VehicleState::Preparing,
        VehicleState::Running,
        VehicleState::Maintenance,
        VehicleState::Broken,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleState::Ready => "ready",
            VehicleState::Preparing => "preparing",
            VehicleState::Running => "running",
            VehicleState::Maintenance => "maintenance",
            VehicleState::Broken => "broken",
        }
    }

    /// States an operator may set directly. `Preparing` only ever arises
    /// from inference.
    pub fn is_manual(&self) -> bool {
        !matches!(self, VehicleState::Preparing)
    }

    /// States that inference must preserve untouched.
    pub fn is_operator_locked(&self) -> bool {
        matches!(self, VehicleState::Maintenance | VehicleState::Broken)
    }

    pub fn is_default(&self) -> bool {
        matches!(self, VehicleState::Ready)
    }
}

impl Default for VehicleState {
    fn default() -> Self {
        VehicleState::Ready
    }
}

impl fmt::Display for VehicleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VehicleState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ready" => Ok(VehicleState::Ready),
            "preparing" => Ok(VehicleState::Preparing),
            "running" => Ok(VehicleState::Running),
            "maintenance" => Ok(VehicleState::Maintenance),
            "broken" => Ok(VehicleState::Broken),
            other => Err(format!(
                "unknown vehicle state: {} (expected ready, preparing, running, maintenance or broken)",
                other
            )),
        }
    }
}

/// One vehicle's recorded state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    #[serde(default)]
    pub state: VehicleState,

    /// Schedule the state was inferred from. Present exactly when the state
    /// is `preparing` or `running` and came from a schedule window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_code: Option<String>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl StatusRecord {
    /// A record with no schedule tag (manual states and plain `ready`).
    pub fn new(state: VehicleState, updated_at: DateTime<Utc>) -> Self {
        StatusRecord {
            state,
            schedule_code: None,
            updated_at,
        }
    }

    /// A record inferred from a schedule window.
    pub fn inferred(state: VehicleState, schedule_code: &str, updated_at: DateTime<Utc>) -> Self {
        StatusRecord {
            state,
            schedule_code: Some(schedule_code.to_owned()),
            updated_at,
        }
    }

    /// True when state and schedule tag match. Timestamps are ignored, this
    /// is the write-suppression comparison.
    pub fn same_observation(&self, other: &StatusRecord) -> bool {
        self.state == other.state && self.schedule_code == other.schedule_code
    }
}

/// The derived status map, keyed by bus plate.
///
/// A `BTreeMap` keeps the persisted JSON stable across rewrites.
pub type StatusMap = BTreeMap<String, StatusRecord>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn state_round_trips_through_str() {
        for state in VehicleState::ALL {
            assert_eq!(state.as_str().parse::<VehicleState>(), Ok(state));
        }
    }

    #[test]
    fn unknown_state_is_rejected() {
        assert!("parked".parse::<VehicleState>().is_err());
    }

    #[test]
    fn serde_uses_snake_case_strings() {
        let json = serde_json::to_string(&VehicleState::Preparing).unwrap();
        assert_eq!(json, "\"preparing\"");
        let back: VehicleState = serde_json::from_str("\"broken\"").unwrap();
        assert_eq!(back, VehicleState::Broken);
    }

    #[test]
    fn operator_locked_states() {
        assert!(VehicleState::Maintenance.is_operator_locked());
        assert!(VehicleState::Broken.is_operator_locked());
        assert!(!VehicleState::Running.is_operator_locked());
        assert!(!VehicleState::Preparing.is_operator_locked());
        assert!(!VehicleState::Ready.is_operator_locked());
    }

    #[test]
    fn preparing_is_not_manual() {
        assert!(!VehicleState::Preparing.is_manual());
        assert!(VehicleState::Ready.is_manual());
        assert!(VehicleState::Broken.is_manual());
    }

    #[test]
    fn same_observation_ignores_timestamp() {
        let a = StatusRecord::inferred(VehicleState::Running, "LC001", Utc::now());
        let mut b = a.clone();
        b.updated_at = b.updated_at + chrono::Duration::seconds(30);
        assert!(a.same_observation(&b));

        let c = StatusRecord::new(VehicleState::Running, a.updated_at);
        assert!(!a.same_observation(&c));
    }

    #[test]
    fn tag_is_omitted_from_json_when_absent() {
        let rec = StatusRecord::new(VehicleState::Ready, Utc::now());
        let json = serde_json::to_string(&rec).unwrap();
        assert!(!json.contains("schedule_code"));
    }
}
