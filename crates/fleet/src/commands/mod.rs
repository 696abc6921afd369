//! Command handlers, one module per command family.

pub mod bus;
pub mod completion;
pub mod driver;
pub mod export;
pub mod feedback;
pub mod init;
pub mod maintenance;
pub mod passenger;
pub mod report;
pub mod route;
pub mod schedule;
pub mod settings_cmd;
pub mod status_cmd;
pub mod stop;
pub mod ticket;
pub mod version;
