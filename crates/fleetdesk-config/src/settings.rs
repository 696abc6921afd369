//! Operator settings types and loading.
//!
//! The main entry point is [`Settings`], which represents the contents of
//! `settings.yaml` inside the data directory. Settings are loaded with
//! [`load_settings`] and saved with [`save_settings`].

use fleetdesk_core::validation;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during settings operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The settings file contained invalid YAML.
    #[error("failed to parse settings file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// The `.fleetdesk/` directory was not found.
    #[error("no .fleetdesk directory found (run 'fleet init' first)")]
    DataDirNotFound,

    /// A settings value was invalid.
    #[error("invalid value for key '{key}': {reason}")]
    InvalidValue {
        /// The settings key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },

    /// The settings key does not exist.
    #[error("unknown settings key '{key}'")]
    UnknownKey {
        /// The key that was requested.
        key: String,
    },
}

/// A specialized `Result` type for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

// ---------------------------------------------------------------------------
// Backup frequency
// ---------------------------------------------------------------------------

/// How often automatic backups run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackupFrequency {
    /// Once per day (default).
    #[default]
    Daily,
    /// Once per week.
    Weekly,
    /// Once per month.
    Monthly,
}

impl BackupFrequency {
    /// Parse a frequency from its lowercase name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Sub-settings
// ---------------------------------------------------------------------------

/// Company profile section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySettings {
    /// The company display name.
    #[serde(default = "default_company_name")]
    pub name: String,

    /// The company street address.
    #[serde(default = "default_company_address")]
    pub address: String,

    /// The company switchboard phone number.
    #[serde(default = "default_company_phone")]
    pub phone: String,

    /// The company contact email.
    #[serde(default = "default_company_email")]
    pub email: String,

    /// The company website.
    #[serde(default = "default_company_website")]
    pub website: String,

    /// The company tax registration code.
    #[serde(default = "default_tax_code", rename = "tax-code")]
    pub tax_code: String,
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            name: default_company_name(),
            address: default_company_address(),
            phone: default_company_phone(),
            email: default_company_email(),
            website: default_company_website(),
            tax_code: default_tax_code(),
        }
    }
}

fn default_company_name() -> String {
    "City Bus Transit Co.".to_string()
}

fn default_company_address() -> String {
    "123 Nguyen Trai Road, Thanh Xuan, Hanoi".to_string()
}

fn default_company_phone() -> String {
    "024 1234 5678".to_string()
}

fn default_company_email() -> String {
    "info@buscompany.com".to_string()
}

fn default_company_website() -> String {
    "www.buscompany.com".to_string()
}

fn default_tax_code() -> String {
    "0123456789".to_string()
}

/// Notification toggles section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// Master switch for all notifications.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Whether email notifications are sent.
    #[serde(default = "default_true")]
    pub email: bool,

    /// Whether SMS notifications are sent.
    #[serde(default)]
    pub sms: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            email: true,
            sms: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Backup policy section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupSettings {
    /// Whether automatic backups are enabled.
    #[serde(default = "default_true")]
    pub auto: bool,

    /// How often automatic backups run.
    #[serde(default)]
    pub frequency: BackupFrequency,
}

impl Default for BackupSettings {
    fn default() -> Self {
        Self {
            auto: true,
            frequency: BackupFrequency::default(),
        }
    }
}

/// Display preferences section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Currency code used when rendering amounts.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Date format shown in tables.
    #[serde(default = "default_date_format", rename = "date-format")]
    pub date_format: String,

    /// Time format shown in tables: `"24h"` or `"12h"`.
    #[serde(default = "default_time_format", rename = "time-format")]
    pub time_format: String,

    /// Interface language code.
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            date_format: default_date_format(),
            time_format: default_time_format(),
            language: default_language(),
        }
    }
}

fn default_currency() -> String {
    "VND".to_string()
}

fn default_date_format() -> String {
    "DD/MM/YYYY".to_string()
}

fn default_time_format() -> String {
    "24h".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

// ---------------------------------------------------------------------------
// Main settings struct
// ---------------------------------------------------------------------------

/// The full operator settings, corresponding to `settings.yaml`.
///
/// All fields use `serde` defaults so that a partially-specified YAML file
/// will be deserialized correctly with sensible default values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Company profile.
    #[serde(default)]
    pub company: CompanySettings,

    /// Notification toggles.
    #[serde(default)]
    pub notifications: NotificationSettings,

    /// Backup policy.
    #[serde(default)]
    pub backup: BackupSettings,

    /// Display preferences.
    #[serde(default)]
    pub display: DisplaySettings,
}

// ---------------------------------------------------------------------------
// Key-path updates
// ---------------------------------------------------------------------------

impl Settings {
    /// Update one settings value by its dotted key path, e.g.
    /// `company.email` or `backup.frequency`.
    ///
    /// Values are validated before being applied: company email and phone
    /// must look like an email address and a phone number, booleans must be
    /// `true` or `false`, and the backup frequency must be one of `daily`,
    /// `weekly`, `monthly`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownKey`] for a key path that does not
    /// exist, or [`SettingsError::InvalidValue`] if the value fails
    /// validation.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "company.name" => self.company.name = value.to_string(),
            "company.address" => self.company.address = value.to_string(),
            "company.phone" => {
                validation::phone(value).map_err(|e| invalid(key, e))?;
                self.company.phone = value.to_string();
            }
            "company.email" => {
                validation::email(value).map_err(|e| invalid(key, e))?;
                self.company.email = value.to_string();
            }
            "company.website" => self.company.website = value.to_string(),
            "company.tax-code" => self.company.tax_code = value.to_string(),
            "notifications.enabled" => self.notifications.enabled = parse_bool(key, value)?,
            "notifications.email" => self.notifications.email = parse_bool(key, value)?,
            "notifications.sms" => self.notifications.sms = parse_bool(key, value)?,
            "backup.auto" => self.backup.auto = parse_bool(key, value)?,
            "backup.frequency" => {
                self.backup.frequency =
                    BackupFrequency::parse(value).ok_or_else(|| SettingsError::InvalidValue {
                        key: key.to_string(),
                        reason: "expected one of: daily, weekly, monthly".to_string(),
                    })?;
            }
            "display.currency" => self.display.currency = value.to_string(),
            "display.date-format" => self.display.date_format = value.to_string(),
            "display.time-format" => self.display.time_format = value.to_string(),
            "display.language" => self.display.language = value.to_string(),
            _ => {
                return Err(SettingsError::UnknownKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn invalid(key: &str, err: validation::ValidationError) -> SettingsError {
    SettingsError::InvalidValue {
        key: key.to_string(),
        reason: err.to_string(),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    value
        .parse::<bool>()
        .map_err(|_| SettingsError::InvalidValue {
            key: key.to_string(),
            reason: "expected true or false".to_string(),
        })
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load settings from `settings.yaml` inside the given data directory.
///
/// If the file does not exist, a default [`Settings`] is returned.
///
/// # Errors
///
/// Returns [`SettingsError::ReadError`] if the file exists but cannot be
/// read, or [`SettingsError::ParseError`] if it contains invalid YAML.
pub fn load_settings(data_dir: &Path) -> Result<Settings> {
    let settings_path = data_dir.join("settings.yaml");

    if !settings_path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(&settings_path)?;

    // An empty file is valid and yields default settings.
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings: Settings = serde_yaml::from_str(&content)?;
    Ok(settings)
}

/// Save settings to `settings.yaml` inside the given data directory.
///
/// The directory is created if it does not exist.
///
/// # Errors
///
/// Returns [`SettingsError::ReadError`] on I/O failure or
/// [`SettingsError::ParseError`] if serialization fails.
pub fn save_settings(data_dir: &Path, settings: &Settings) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let settings_path = data_dir.join("settings.yaml");
    let yaml = serde_yaml::to_string(settings)?;
    std::fs::write(settings_path, yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_default_settings() {
        let s = Settings::default();
        assert_eq!(s.company.name, "City Bus Transit Co.");
        assert!(s.notifications.enabled);
        assert!(!s.notifications.sms);
        assert!(s.backup.auto);
        assert_eq!(s.backup.frequency, BackupFrequency::Daily);
        assert_eq!(s.display.currency, "VND");
        assert_eq!(s.display.date_format, "DD/MM/YYYY");
    }

    #[test]
    fn test_load_missing_settings_returns_default() {
        let dir = PathBuf::from("/nonexistent/path/.fleetdesk");
        let s = load_settings(&dir).unwrap();
        assert_eq!(s.display.currency, "VND");
    }

    #[test]
    fn test_roundtrip_settings() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join(".fleetdesk");

        let mut s = Settings::default();
        s.company.name = "Night Lines Ltd.".to_string();
        s.backup.frequency = BackupFrequency::Weekly;

        save_settings(&data_dir, &s).unwrap();
        let loaded = load_settings(&data_dir).unwrap();

        assert_eq!(loaded.company.name, "Night Lines Ltd.");
        assert_eq!(loaded.backup.frequency, BackupFrequency::Weekly);
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let yaml = "company:\n  name: Acme Coaches\ndisplay:\n  currency: EUR\n";
        let s: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(s.company.name, "Acme Coaches");
        assert_eq!(s.display.currency, "EUR");
        // Everything else should be default
        assert_eq!(s.company.phone, "024 1234 5678");
        assert_eq!(s.display.time_format, "24h");
    }

    #[test]
    fn test_set_value_updates_fields() {
        let mut s = Settings::default();
        s.set_value("company.name", "Metro Lines").unwrap();
        s.set_value("notifications.sms", "true").unwrap();
        s.set_value("backup.frequency", "monthly").unwrap();
        s.set_value("display.language", "vi").unwrap();

        assert_eq!(s.company.name, "Metro Lines");
        assert!(s.notifications.sms);
        assert_eq!(s.backup.frequency, BackupFrequency::Monthly);
        assert_eq!(s.display.language, "vi");
    }

    #[test]
    fn test_set_value_rejects_bad_email() {
        let mut s = Settings::default();
        let err = s.set_value("company.email", "not an email").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        // The old value is untouched.
        assert_eq!(s.company.email, "info@buscompany.com");
    }

    #[test]
    fn test_set_value_rejects_bad_phone() {
        let mut s = Settings::default();
        let err = s.set_value("company.phone", "call me").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn test_set_value_rejects_bad_bool() {
        let mut s = Settings::default();
        let err = s.set_value("backup.auto", "yes").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn test_set_value_unknown_key() {
        let mut s = Settings::default();
        let err = s.set_value("company.fax", "024").unwrap_err();
        assert!(matches!(err, SettingsError::UnknownKey { .. }));
    }

    #[test]
    fn test_backup_frequency_parse() {
        assert_eq!(BackupFrequency::parse("daily"), Some(BackupFrequency::Daily));
        assert_eq!(BackupFrequency::parse("weekly"), Some(BackupFrequency::Weekly));
        assert_eq!(BackupFrequency::parse("monthly"), Some(BackupFrequency::Monthly));
        assert_eq!(BackupFrequency::parse("hourly"), None);
    }
}
