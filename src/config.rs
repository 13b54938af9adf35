//! Configuration management for the buyer intake server.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file. Nothing is printed to stdout, which MCP uses for communication.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the buyer intake server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Buyer API base URL
    pub buyer_api_url: String,

    /// Bearer token for the buyer API
    pub buyer_api_key: String,

    /// How long a fetched buyer list stays fresh, in minutes (default: 5)
    pub buyer_list_cache_ttl_minutes: u64,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `BUYER_API_BASE_URL`: Base URL for the buyer API
    /// - `BUYER_API_KEY`: API key for authentication
    ///
    /// Optional environment variables:
    /// - `BUYER_LIST_CACHE_TTL_MINUTES`: Buyer list cache TTL (default: 5)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let buyer_api_url = env::var("BUYER_API_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("BUYER_API_BASE_URL".to_string()))?;

        let buyer_api_key = env::var("BUYER_API_KEY")
            .map_err(|_| ConfigError::MissingVar("BUYER_API_KEY".to_string()))?;

        if !buyer_api_url.starts_with("http://") && !buyer_api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "BUYER_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if buyer_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "BUYER_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let buyer_list_cache_ttl_minutes = Self::parse_env_u64("BUYER_LIST_CACHE_TTL_MINUTES", 5)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;

        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be at least 1 second".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            buyer_api_url,
            buyer_api_key,
            buyer_list_cache_ttl_minutes,
            request_timeout,
            log_level,
        })
    }

    /// Buyer list cache TTL in seconds.
    pub fn buyer_list_cache_ttl_secs(&self) -> u64 {
        self.buyer_list_cache_ttl_minutes * 60
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
}

impl Default for Config {
    fn default() -> Self {
        Config {
            buyer_api_url: String::new(),
            buyer_api_key: String::new(),
            buyer_list_cache_ttl_minutes: 5,
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
