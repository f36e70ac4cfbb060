//! Configuration for the registry client.
//!
//! Library callers get `Config::default()`, which points at the public ABR site.
//! The server binary loads overrides from environment variables (and a `.env` file
//! if present) through [`Config::from_env`].

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Public ABN Lookup site.
pub const DEFAULT_REGISTRY_URL: &str = "https://abr.business.gov.au";

/// Configuration for registry lookups.
#[derive(Debug, Clone)]
pub struct Config {
    /// Registry base URL; lookups go to `<registry_url>/ABN/View?abn=<abn>`
    pub registry_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `ABR_BASE_URL`: Registry base URL (default: `https://abr.business.gov.au`)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout, which the MCP transport owns
        let _ = dotenvy::dotenv();

        let registry_url =
            env::var("ABR_BASE_URL").unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string());

        if !registry_url.starts_with("http://") && !registry_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "ABR_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            registry_url,
            request_timeout,
            log_level,
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
}

impl Default for Config {
    fn default() -> Self {
        Config {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
