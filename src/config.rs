//! Configuration management for the address book driver.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::book::BookOptions;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// How the driver prints its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One rendered line per contact
    #[default]
    Text,
    /// A JSON `BookSummary`
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("Must be \"text\" or \"json\", got: {}", other)),
        }
    }
}

/// Configuration for the address book driver.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,

    /// Reject unknown sort criteria instead of ignoring them (default: false)
    pub reject_unknown_sort_criteria: bool,

    /// Output format for results (default: text)
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `ADDRESS_BOOK_REJECT_UNKNOWN_SORT`: `true`/`false` (default: false)
    /// - `ADDRESS_BOOK_OUTPUT`: `text` or `json` (default: text)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let reject_unknown_sort_criteria =
            Self::parse_env_bool("ADDRESS_BOOK_REJECT_UNKNOWN_SORT", false)?;

        let output = match env::var("ADDRESS_BOOK_OUTPUT") {
            Ok(val) => val
                .parse::<OutputFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_OUTPUT".to_string(),
                    reason,
                })?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Config {
            log_level,
            reject_unknown_sort_criteria,
            output,
        })
    }

    /// Options for address books built from this configuration.
    pub fn book_options(&self) -> BookOptions {
        BookOptions {
            reject_unknown_sort_criteria: self.reject_unknown_sort_criteria,
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => Ok(true),
                "0" | "false" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            reject_unknown_sort_criteria: false,
            output: OutputFormat::Text,
        }
    }
}
