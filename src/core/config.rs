//! Bot configuration
//!
//! Read once at startup from the process environment (a `.env` file is
//! loaded first by the binary).
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};

/// Environment variable naming the reminder CSV file
pub const REMINDERS_FILE_VAR: &str = "REMINDERS_FILE";
/// Environment variable for the default log filter
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

const DEFAULT_REMINDERS_FILE: &str = "reminders.csv";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the backing reminder file
    pub store_path: PathBuf,
    /// Default filter handed to the logger when `RUST_LOG` is unset
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let store_path = match lookup(REMINDERS_FILE_VAR) {
            Some(value) if value.trim().is_empty() => {
                bail!("{REMINDERS_FILE_VAR} is set but empty")
            }
            Some(value) => PathBuf::from(value),
            None => PathBuf::from(DEFAULT_REMINDERS_FILE),
        };

        let log_level =
            lookup(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            store_path,
            log_level,
        })
    }
}
