//! Configuration management for the bounce reconciler.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default Sendinblue API root. The trailing slash is part of the documented form.
pub const DEFAULT_API_URL: &str = "https://api.sendinblue.com/v3/";

/// Configuration for the bounce reconciler.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sendinblue API base URL
    pub api_base_url: String,

    /// Sendinblue API key, sent in the `api-key` header
    pub api_key: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Upper bound on reconciliation passes per run (default: 25)
    pub max_passes: usize,

    /// Pause between passes in milliseconds (default: 1000)
    pub pass_cooldown_ms: u64,

    /// Treat non-2xx answers to an unblock call as success (default: false)
    pub ignore_unblock_status: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `SENDINBLUE_API_KEY`: API key for authentication
    ///
    /// Optional environment variables:
    /// - `SENDINBLUE_API_URL`: API root (default: `https://api.sendinblue.com/v3/`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `MAX_PASSES`: Maximum reconciliation passes per run (default: 25)
    /// - `PASS_COOLDOWN_MS`: Pause between passes (default: 1000)
    /// - `UNBLOCK_IGNORE_STATUS`: Accept any HTTP status from unblock calls (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is not an error
        let _ = dotenvy::dotenv();

        let api_base_url =
            env::var("SENDINBLUE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let api_key = env::var("SENDINBLUE_API_KEY")
            .map_err(|_| ConfigError::MissingVar("SENDINBLUE_API_KEY".to_string()))?;

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "SENDINBLUE_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "SENDINBLUE_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let max_passes = Self::parse_env_usize("MAX_PASSES", 25)?;
        let pass_cooldown_ms = Self::parse_env_u64("PASS_COOLDOWN_MS", 1000)?;
        let ignore_unblock_status = Self::parse_env_bool("UNBLOCK_IGNORE_STATUS", false)?;

        if max_passes == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_PASSES".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        Ok(Config {
            api_base_url,
            api_key,
            request_timeout,
            max_passes,
            pass_cooldown_ms,
            ignore_unblock_status,
        })
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

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
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
            api_base_url: String::new(),
            api_key: String::new(),
            request_timeout: 10,
            max_passes: 25,
            pass_cooldown_ms: 1000,
            ignore_unblock_status: false,
        }
    }
}
