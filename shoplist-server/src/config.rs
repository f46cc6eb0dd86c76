//! Server configuration - defaults and environment loading
//!
//! Configuration is loaded from environment variables:
//! - `SHOPLIST_BIND`: address to bind (default: 127.0.0.1:3030)
//! - `SHOPLIST_CORS_PERMISSIVE`: allow any origin (default: false)
//! - `SHOPLIST_REQUEST_TIMEOUT_SECS`: per-request timeout (default: 30)

use std::net::SocketAddr;
use std::time::Duration;

pub const BIND_ENV: &str = "SHOPLIST_BIND";
pub const CORS_PERMISSIVE_ENV: &str = "SHOPLIST_CORS_PERMISSIVE";
pub const REQUEST_TIMEOUT_ENV: &str = "SHOPLIST_REQUEST_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:3030)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,

    /// Upper bound on a single request
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from an arbitrary variable source (for testing)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ENV) {
            config.bind_addr = value.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: BIND_ENV,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(CORS_PERMISSIVE_ENV) {
            config.cors_permissive = parse_flag(&value).ok_or_else(|| ConfigError::Invalid {
                var: CORS_PERMISSIVE_ENV,
                value: value.clone(),
                reason: "expected true/false/1/0".into(),
            })?;
        }

        if let Some(value) = lookup(REQUEST_TIMEOUT_ENV) {
            let secs: u64 = value.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    var: REQUEST_TIMEOUT_ENV,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
