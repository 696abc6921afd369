//! Configuration for the fleetdesk console.
//!
//! This crate handles loading and saving `settings.yaml` inside the data
//! directory, discovering `.fleetdesk/` directories in the filesystem, and
//! typed access to the operator settings (company profile, notification
//! toggles, backup policy, display preferences).

pub mod data_dir;
pub mod settings;
