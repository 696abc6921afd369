//! Demo seed data.
//!
//! A small coherent fleet used by `init --demo`: schedules are positioned
//! relative to the given wall-clock time so the status monitor has one bus
//! running and one preparing right after seeding.

use chrono::{Duration, NaiveDateTime};

use crate::bus::Bus;
use crate::driver::Driver;
use crate::feedback::Feedback;
use crate::maintenance::MaintenanceRecord;
use crate::passenger::Passenger;
use crate::route::{Route, RouteStop};
use crate::schedule::Schedule;
use crate::stop::Stop;
use crate::ticket::Ticket;
use crate::timeparse::{format_date, format_time};

/// Everything `init --demo` writes into an empty store.
#[derive(Debug, Clone, Default)]
pub struct DemoData {
    pub routes: Vec<Route>,
    pub stops: Vec<Stop>,
    pub route_stops: Vec<RouteStop>,
    pub buses: Vec<Bus>,
    pub drivers: Vec<Driver>,
    pub schedules: Vec<Schedule>,
    pub passengers: Vec<Passenger>,
    pub tickets: Vec<Ticket>,
    pub feedback: Vec<Feedback>,
    pub maintenance: Vec<MaintenanceRecord>,
}

/// Builds the demo fleet relative to `now`.
pub fn demo_data(now: NaiveDateTime) -> DemoData {
    let today = now.date();
    let tomorrow = today + Duration::days(1);

    // One bus runs all day; a second departs shortly after seeding so it
    // shows up in the preparation window on the first tick.
    let prep_departure = now + Duration::minutes(10);
    let prep_end = prep_departure + Duration::hours(2);

    let routes = vec![
        Route {
            code: "R001".into(),
            name: "Central Station - Airport".into(),
            itinerary: "Central Station, Main Street, Harbor Road, Airport".into(),
        },
        Route {
            code: "R002".into(),
            name: "Harbor - University".into(),
            itinerary: "Harbor Road, Market Square, Campus Drive".into(),
        },
    ];

    let stops = vec![
        Stop {
            code: "S001".into(),
            name: "Central Station".into(),
            location: "1 Station Square".into(),
        },
        Stop {
            code: "S002".into(),
            name: "Market Square".into(),
            location: "12 Market Street".into(),
        },
        Stop {
            code: "S003".into(),
            name: "Harbor Road".into(),
            location: "48 Harbor Road".into(),
        },
        Stop {
            code: "S004".into(),
            name: "Airport Terminal".into(),
            location: "Airport, Terminal 1".into(),
        },
    ];

    let route_stops = vec![
        RouteStop {
            route_code: "R001".into(),
            stop_code: "S001".into(),
            position: 1,
        },
        RouteStop {
            route_code: "R001".into(),
            stop_code: "S003".into(),
            position: 2,
        },
        RouteStop {
            route_code: "R001".into(),
            stop_code: "S004".into(),
            position: 3,
        },
        RouteStop {
            route_code: "R002".into(),
            stop_code: "S003".into(),
            position: 1,
        },
        RouteStop {
            route_code: "R002".into(),
            stop_code: "S002".into(),
            position: 2,
        },
    ];

    let buses = vec![
        Bus {
            plate: "29A-12345".into(),
            model: "Sleeper".into(),
            capacity: 40,
        },
        Bus {
            plate: "29B-67890".into(),
            model: "Seater".into(),
            capacity: 45,
        },
        Bus {
            plate: "30A-11223".into(),
            model: "Minibus".into(),
            capacity: 16,
        },
    ];

    let drivers = vec![
        Driver {
            code: "D001".into(),
            name: "John Miller".into(),
            email: "john.miller@example.com".into(),
            national_id: "012345678901".into(),
            phone: "0901 234 567".into(),
            years_experience: 8,
            license_no: "E-445566".into(),
            license_issued_on: "2017-03-20".into(),
        },
        Driver {
            code: "D002".into(),
            name: "Maria Lopez".into(),
            email: "maria.lopez@example.com".into(),
            national_id: "098765432109".into(),
            phone: "0912 345 678".into(),
            years_experience: 5,
            license_no: "E-778899".into(),
            license_issued_on: "2020-07-01".into(),
        },
    ];

    let schedules = vec![
        Schedule {
            code: "LC001".into(),
            service_date: format_date(today),
            departs_at: "00:00".into(),
            ends_at: "23:59".into(),
            driver_code: "D001".into(),
            bus_plate: "29A-12345".into(),
            route_code: "R001".into(),
        },
        Schedule {
            code: "LC002".into(),
            service_date: format_date(prep_departure.date()),
            departs_at: format_time(prep_departure.time()),
            ends_at: format_time(prep_end.time()),
            driver_code: "D002".into(),
            bus_plate: "29B-67890".into(),
            route_code: "R002".into(),
        },
        Schedule {
            code: "LC003".into(),
            service_date: format_date(tomorrow),
            departs_at: "07:00".into(),
            ends_at: "09:30".into(),
            driver_code: "D001".into(),
            bus_plate: "29B-67890".into(),
            route_code: "R001".into(),
        },
    ];

    let passengers = vec![
        Passenger {
            code: "P001".into(),
            name: "Sam Carter".into(),
            phone: "0987 654 321".into(),
            email: "sam.carter@example.com".into(),
        },
        Passenger {
            code: "P002".into(),
            name: "Linh Tran".into(),
            phone: "0978 123 456".into(),
            email: "linh.tran@example.com".into(),
        },
    ];

    let booked_at = now.format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let tickets = vec![
        Ticket {
            code: "VE001".into(),
            seat: "A01".into(),
            price: 150_000,
            passenger_code: "P001".into(),
            schedule_code: "LC001".into(),
            booked_at: booked_at.clone(),
        },
        Ticket {
            code: "VE002".into(),
            seat: "B04".into(),
            price: 120_000,
            passenger_code: "P002".into(),
            schedule_code: "LC002".into(),
            booked_at,
        },
    ];

    let feedback = vec![Feedback {
        id: 1,
        passenger_code: "P001".into(),
        sent_on: format_date(today - Duration::days(1)),
        message: "Bus left on time, clean seats.".into(),
        schedule_code: Some("LC001".into()),
        route_code: Some("R001".into()),
    }];

    let maintenance = vec![MaintenanceRecord {
        id: 1,
        bus_plate: "30A-11223".into(),
        technician: "T. Baker".into(),
        performed_on: format_date(today - Duration::days(3)),
        work: "Brake pad replacement".into(),
        cost: 2_500_000,
        expected_done_on: format_date(today - Duration::days(2)),
    }];

    DemoData {
        routes,
        stops,
        route_stops,
        buses,
        drivers,
        schedules,
        passengers,
        tickets,
        feedback,
        maintenance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeparse::{parse_date, parse_time};

    fn noon() -> NaiveDateTime {
        parse_date("2025-06-15").unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn demo_dates_parse_back() {
        let data = demo_data(noon());
        for schedule in &data.schedules {
            assert!(parse_date(&schedule.service_date).is_ok(), "{:?}", schedule);
            assert!(parse_time(&schedule.departs_at).is_ok(), "{:?}", schedule);
            assert!(parse_time(&schedule.ends_at).is_ok(), "{:?}", schedule);
        }
    }

    #[test]
    fn demo_references_are_internally_consistent() {
        let data = demo_data(noon());
        let plates: Vec<&str> = data.buses.iter().map(|b| b.plate.as_str()).collect();
        let drivers: Vec<&str> = data.drivers.iter().map(|d| d.code.as_str()).collect();
        let routes: Vec<&str> = data.routes.iter().map(|r| r.code.as_str()).collect();
        for schedule in &data.schedules {
            assert!(plates.contains(&schedule.bus_plate.as_str()));
            assert!(drivers.contains(&schedule.driver_code.as_str()));
            assert!(routes.contains(&schedule.route_code.as_str()));
        }
        let schedule_codes: Vec<&str> = data.schedules.iter().map(|s| s.code.as_str()).collect();
        for ticket in &data.tickets {
            assert!(schedule_codes.contains(&ticket.schedule_code.as_str()));
        }
    }

    #[test]
    fn second_bus_departs_shortly_after_seeding() {
        let now = noon();
        let data = demo_data(now);
        let second = &data.schedules[1];
        assert_eq!(second.departs_at, "12:10");
        assert_eq!(second.ends_at, "14:10");
        assert_eq!(second.service_date, "2025-06-15");
    }
}
