//! [`Catalog`] -- typed access to the fixed-key collections.
//!
//! Loads degrade: a missing or unparsable document logs a warning and yields
//! the empty collection, so one corrupt file never takes down a whole
//! command or the status monitor. Saves rewrite the full document and do
//! surface errors.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use fleetdesk_core::bus::Bus;
use fleetdesk_core::driver::Driver;
use fleetdesk_core::feedback::Feedback;
use fleetdesk_core::maintenance::MaintenanceRecord;
use fleetdesk_core::passenger::Passenger;
use fleetdesk_core::route::{Route, RouteStop};
use fleetdesk_core::schedule::Schedule;
use fleetdesk_core::state::StatusMap;
use fleetdesk_core::stop::Stop;
use fleetdesk_core::ticket::Ticket;

use crate::error::Result;
use crate::keys;
use crate::kv::KvStore;

/// Typed façade over a [`KvStore`].
pub struct Catalog<S> {
    store: S,
}

impl<S: KvStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // -- Collections ---------------------------------------------------------

    pub fn routes(&self) -> Vec<Route> {
        self.load_vec(keys::ROUTES)
    }

    pub fn save_routes(&self, items: &[Route]) -> Result<()> {
        self.save_doc(keys::ROUTES, items)
    }

    pub fn stops(&self) -> Vec<Stop> {
        self.load_vec(keys::STOPS)
    }

    pub fn save_stops(&self, items: &[Stop]) -> Result<()> {
        self.save_doc(keys::STOPS, items)
    }

    pub fn route_stops(&self) -> Vec<RouteStop> {
        self.load_vec(keys::ROUTE_STOPS)
    }

    pub fn save_route_stops(&self, items: &[RouteStop]) -> Result<()> {
        self.save_doc(keys::ROUTE_STOPS, items)
    }

    pub fn buses(&self) -> Vec<Bus> {
        self.load_vec(keys::BUSES)
    }

    pub fn save_buses(&self, items: &[Bus]) -> Result<()> {
        self.save_doc(keys::BUSES, items)
    }

    pub fn drivers(&self) -> Vec<Driver> {
        self.load_vec(keys::DRIVERS)
    }

    pub fn save_drivers(&self, items: &[Driver]) -> Result<()> {
        self.save_doc(keys::DRIVERS, items)
    }

    pub fn schedules(&self) -> Vec<Schedule> {
        self.load_vec(keys::SCHEDULES)
    }

    pub fn save_schedules(&self, items: &[Schedule]) -> Result<()> {
        self.save_doc(keys::SCHEDULES, items)
    }

    pub fn passengers(&self) -> Vec<Passenger> {
        self.load_vec(keys::PASSENGERS)
    }

    pub fn save_passengers(&self, items: &[Passenger]) -> Result<()> {
        self.save_doc(keys::PASSENGERS, items)
    }

    pub fn tickets(&self) -> Vec<Ticket> {
        self.load_vec(keys::TICKETS)
    }

    pub fn save_tickets(&self, items: &[Ticket]) -> Result<()> {
        self.save_doc(keys::TICKETS, items)
    }

    pub fn feedback(&self) -> Vec<Feedback> {
        self.load_vec(keys::FEEDBACK)
    }

    pub fn save_feedback(&self, items: &[Feedback]) -> Result<()> {
        self.save_doc(keys::FEEDBACK, items)
    }

    pub fn maintenance(&self) -> Vec<MaintenanceRecord> {
        self.load_vec(keys::MAINTENANCE)
    }

    pub fn save_maintenance(&self, items: &[MaintenanceRecord]) -> Result<()> {
        self.save_doc(keys::MAINTENANCE, items)
    }

    // -- Status map ----------------------------------------------------------

    pub fn status_map(&self) -> StatusMap {
        match self.store.read(keys::BUS_STATUS) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(map) => map,
                Err(e) => {
                    warn!(key = keys::BUS_STATUS, error = %e, "unparsable status map, starting empty");
                    StatusMap::new()
                }
            },
            Ok(None) => StatusMap::new(),
            Err(e) => {
                warn!(key = keys::BUS_STATUS, error = %e, "failed to read status map, starting empty");
                StatusMap::new()
            }
        }
    }

    pub fn save_status_map(&self, map: &StatusMap) -> Result<()> {
        self.save_doc(keys::BUS_STATUS, map)
    }

    // -- Generic load/save ---------------------------------------------------

    fn load_vec<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.store.read(key) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(items) => items,
                Err(e) => {
                    warn!(key, error = %e, "unparsable collection, treating as empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(key, error = %e, "failed to read collection, treating as empty");
                Vec::new()
            }
        }
    }

    fn save_doc<T: Serialize + ?Sized>(&self, key: &str, doc: &T) -> Result<()> {
        let payload = serde_json::to_string_pretty(doc)?;
        self.store.write(key, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use chrono::Utc;
    use fleetdesk_core::state::{StatusRecord, VehicleState};
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog<MemoryStore> {
        Catalog::new(MemoryStore::new())
    }

    #[test]
    fn empty_store_yields_empty_collections() {
        let cat = catalog();
        assert!(cat.routes().is_empty());
        assert!(cat.tickets().is_empty());
        assert!(cat.status_map().is_empty());
    }

    #[test]
    fn collections_round_trip() {
        let cat = catalog();
        let routes = vec![Route {
            code: "R001".into(),
            name: "Central Station - Airport".into(),
            itinerary: "via Harbor Road".into(),
        }];
        cat.save_routes(&routes).unwrap();
        assert_eq!(cat.routes(), routes);
    }

    #[test]
    fn garbage_document_degrades_to_empty() {
        let cat = catalog();
        cat.store().write(keys::BUSES, "{not json").unwrap();
        assert!(cat.buses().is_empty());
    }

    #[test]
    fn wrong_shape_degrades_to_empty() {
        let cat = catalog();
        cat.store().write(keys::DRIVERS, "{\"a\":1}").unwrap();
        assert!(cat.drivers().is_empty());
    }

    #[test]
    fn status_map_round_trips() {
        let cat = catalog();
        let mut map = StatusMap::new();
        map.insert(
            "29A-12345".into(),
            StatusRecord::inferred(VehicleState::Running, "LC001", Utc::now()),
        );
        cat.save_status_map(&map).unwrap();
        let loaded = cat.status_map();
        assert_eq!(loaded.len(), 1);
        assert!(loaded["29A-12345"].same_observation(&map["29A-12345"]));
    }

    #[test]
    fn save_rewrites_whole_collection() {
        let cat = catalog();
        let one = vec![Stop {
            code: "S001".into(),
            name: "Central Station".into(),
            location: "1 Station Square".into(),
        }];
        cat.save_stops(&one).unwrap();
        cat.save_stops(&[]).unwrap();
        assert!(cat.stops().is_empty());
    }
}
