//! Fixed storage keys.
//!
//! One JSON document per key. Collection keys hold arrays; `BUS_STATUS`
//! holds the plate-keyed status map.

pub const ROUTES: &str = "routes";
pub const STOPS: &str = "stops";
pub const ROUTE_STOPS: &str = "route_stops";
pub const BUSES: &str = "buses";
pub const DRIVERS: &str = "drivers";
pub const SCHEDULES: &str = "schedules";
pub const PASSENGERS: &str = "passengers";
pub const TICKETS: &str = "tickets";
pub const FEEDBACK: &str = "feedback";
pub const MAINTENANCE: &str = "maintenance";
pub const BUS_STATUS: &str = "bus_status";
