//! Case-insensitive text search over record fields.
//!
//! Each list surface filters on the same fields its table displays. The
//! match is a plain substring check, lowercased on both sides.

use crate::bus::Bus;
use crate::driver::Driver;
use crate::feedback::Feedback;
use crate::maintenance::MaintenanceRecord;
use crate::passenger::Passenger;
use crate::route::Route;
use crate::schedule::Schedule;
use crate::stop::Stop;
use crate::ticket::Ticket;

/// Records that can be filtered by a free-text query.
pub trait TextSearch {
    fn matches(&self, query: &str) -> bool;
}

pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn any_match(fields: &[&str], query: &str) -> bool {
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

impl TextSearch for Route {
    fn matches(&self, query: &str) -> bool {
        any_match(&[&self.code, &self.name, &self.itinerary], query)
    }
}

impl TextSearch for Stop {
    fn matches(&self, query: &str) -> bool {
        any_match(&[&self.code, &self.name, &self.location], query)
    }
}

impl TextSearch for Bus {
    fn matches(&self, query: &str) -> bool {
        any_match(&[&self.plate, &self.model], query)
    }
}

impl TextSearch for Driver {
    fn matches(&self, query: &str) -> bool {
        any_match(
            &[&self.code, &self.name, &self.phone, &self.license_no],
            query,
        )
    }
}

impl TextSearch for Schedule {
    fn matches(&self, query: &str) -> bool {
        any_match(
            &[
                &self.code,
                &self.bus_plate,
                &self.driver_code,
                &self.route_code,
            ],
            query,
        )
    }
}

impl TextSearch for Passenger {
    fn matches(&self, query: &str) -> bool {
        any_match(&[&self.code, &self.name, &self.phone, &self.email], query)
    }
}

impl TextSearch for Ticket {
    fn matches(&self, query: &str) -> bool {
        any_match(
            &[
                &self.code,
                &self.passenger_code,
                &self.schedule_code,
                &self.seat,
            ],
            query,
        )
    }
}

impl TextSearch for Feedback {
    fn matches(&self, query: &str) -> bool {
        if any_match(&[&self.passenger_code, &self.message], query) {
            return true;
        }
        contains_ci(&self.display_code(), query)
    }
}

impl TextSearch for MaintenanceRecord {
    fn matches(&self, query: &str) -> bool {
        if any_match(&[&self.bus_plate, &self.technician, &self.work], query) {
            return true;
        }
        contains_ci(&self.display_code(), query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_is_case_insensitive() {
        let route = Route {
            code: "R001".into(),
            name: "Central Station - Airport".into(),
            itinerary: "Main St, Harbor Rd".into(),
        };
        assert!(route.matches("airport"));
        assert!(route.matches("r001"));
        assert!(route.matches("HARBOR"));
        assert!(!route.matches("ferry"));
    }

    #[test]
    fn bus_matches_plate_and_model() {
        let bus = Bus {
            plate: "29A-12345".into(),
            model: "Sleeper".into(),
            capacity: 40,
        };
        assert!(bus.matches("29a"));
        assert!(bus.matches("sleeper"));
        assert!(!bus.matches("40"));
    }

    #[test]
    fn feedback_matches_display_code() {
        let fb = Feedback {
            id: 7,
            passenger_code: "P001".into(),
            message: "Driver was late".into(),
            ..Default::default()
        };
        assert!(fb.matches("ph007"));
        assert!(fb.matches("late"));
        assert!(!fb.matches("early"));
    }
}
