//! Route records and the ordered stop assignment.

use serde::{Deserialize, Serialize};

/// A bus route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Business key, operator-entered (e.g. `R001`).
    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub name: String,

    /// Free-text description of the journey.
    #[serde(default)]
    pub itinerary: String,
}

/// Assignment of a stop to a route at a fixed position.
///
/// There is no integrity enforcement against the route or stop collections;
/// dangling codes simply render as the bare code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStop {
    #[serde(default)]
    pub route_code: String,

    #[serde(default)]
    pub stop_code: String,

    /// 1-based position along the route.
    #[serde(default)]
    pub position: u32,
}
