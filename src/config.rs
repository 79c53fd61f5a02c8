//! Configuration management for the contact directory.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default data file, relative to the working directory.
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

/// Configuration for the contact directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON data file
    pub contacts_file: PathBuf,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_FILE`: Path of the data file (default: `contacts.json`)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy does not print to stdout, which the menu owns
        let _ = dotenvy::dotenv();

        let contacts_file = Self::non_blank_var("CONTACTS_FILE", DEFAULT_CONTACTS_FILE)?;
        let log_level = Self::non_blank_var("LOG_LEVEL", "warn")?;

        Ok(Config {
            contacts_file: PathBuf::from(contacts_file),
            log_level,
        })
    }

    /// Read a variable, falling back to `default` when unset and rejecting blanks.
    fn non_blank_var(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(val.trim().to_string()),
            Err(env::VarError::NotPresent) => Ok(default.to_string()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be valid UTF-8".to_string(),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
            log_level: "warn".to_string(),
        }
    }
}
