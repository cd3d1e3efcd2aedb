//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Storage configuration.
    #[serde(default)]
    pub storage: StorageSettings,
    /// Operator sign-in configuration.
    #[serde(default)]
    pub operator: OperatorConfig,
    /// Season label applied to new bookings when none is given.
    #[serde(default = "default_season")]
    pub default_season: String,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Directory holding the persisted JSON documents.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Prefix for every storage key (file name becomes `{prefix}_{key}.json`).
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_key_prefix() -> String {
    "pavilion".to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key_prefix: default_key_prefix(),
        }
    }
}

/// Operator sign-in configuration.
///
/// A single-operator access gate, not a security boundary: the tool trusts
/// whoever controls the local machine.
#[derive(Debug, Clone, Deserialize)]
pub struct OperatorConfig {
    /// Operator username (matched case-insensitively).
    #[serde(default = "default_username")]
    pub username: String,
    /// Operator password (matched exactly).
    #[serde(default = "default_password")]
    pub password: String,
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_password() -> String {
    "admin123".to_string()
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
        }
    }
}

fn default_season() -> String {
    "2025-26".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageSettings::default(),
            operator: OperatorConfig::default(),
            default_season: default_season(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Every field has a default, so a missing config directory is fine.
    ///
    /// # Errors
    ///
    /// Returns an error if a present config source cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PAVILION").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
