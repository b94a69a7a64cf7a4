//! Runtime configuration for the `bank-ledger` binary.
//!
//! Loaded once from environment variables:
//!
//! - `BANK_NAME`: name of the bank the CLI builds (default `"Santander"`)
//! - `BANK_LOG`: log filter used when `RUST_LOG` is unset (default `"info"`)

use std::env;

use thiserror::Error;

pub const DEFAULT_BANK_NAME: &str = "Santander";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bank_name: String,
    pub log_filter: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    ///
    /// `BANK_NAME` set to an empty (or whitespace-only) value, or any
    /// variable holding non-Unicode data.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let bank_name = read_var(&lookup, "BANK_NAME")?.unwrap_or_else(|| DEFAULT_BANK_NAME.to_string());
        if bank_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "BANK_NAME".to_string(),
                message: "bank name cannot be empty".to_string(),
            });
        }

        let log_filter = read_var(&lookup, "BANK_LOG")?.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(AppConfig {
            bank_name,
            log_filter,
        })
    }
}

fn read_var<F>(lookup: &F, key: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: "value is not valid Unicode".to_string(),
        }),
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bank_name: DEFAULT_BANK_NAME.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
