//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables,
//! with an optional `.env` file loaded through `dotenvy`. Every setting has a default,
//! so an empty environment yields a working configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::store::ValidationPolicy;
use std::env;

/// Directory queried when `CONTACTS_SOURCE_URL` is not set.
pub const DEFAULT_SOURCE_URL: &str = "https://dummyjson.com/users";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the user directory used for the bulk load
    pub source_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Whether add/update reject an empty first name (default: true)
    pub require_first_name: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_SOURCE_URL`: User directory URL (default: dummyjson users)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `REQUIRE_FIRST_NAME`: `true` or `false` (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout, and a missing file is fine
        let _ = dotenvy::dotenv();

        let source_url =
            env::var("CONTACTS_SOURCE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string());

        if !source_url.starts_with("http://") && !source_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_SOURCE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let require_first_name = Self::parse_env_bool("REQUIRE_FIRST_NAME", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            source_url,
            request_timeout,
            require_first_name,
            log_level,
        })
    }

    /// The store validation policy these settings select.
    pub fn validation_policy(&self) -> ValidationPolicy {
        if self.require_first_name {
            ValidationPolicy::RequireFirstName
        } else {
            ValidationPolicy::Permissive
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
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
            source_url: DEFAULT_SOURCE_URL.to_string(),
            request_timeout: 10,
            require_first_name: true,
            log_level: "error".to_string(),
        }
    }
}
