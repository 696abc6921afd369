//! Core domain types for the fleetdesk system.
//!
//! Flat records keyed by business code, the vehicle state machine, and the
//! helpers shared by every surface (id generation, validation, text search,
//! date parsing, demo seed data).

pub mod bus;
pub mod demo;
pub mod driver;
pub mod feedback;
pub mod idgen;
pub mod maintenance;
pub mod passenger;
pub mod route;
pub mod schedule;
pub mod search;
pub mod state;
pub mod stop;
pub mod ticket;
pub mod timeparse;
pub mod validation;
