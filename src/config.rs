//! Configuration management for the Unusual Whales MCP Server
//!
//! Handles the API credential, base URL and request timeout. Built once at
//! startup and handed to the client; nothing reads the environment after that.

use std::fmt;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Environment variable names
pub mod env {
    pub const API_KEY: &str = "UNUSUAL_WHALES_API_KEY";
    pub const BASE_URL: &str = "UNUSUAL_WHALES_BASE_URL";
    pub const TIMEOUT_SECS: &str = "UNUSUAL_WHALES_TIMEOUT_SECS";
}

/// Unusual Whales API constants
pub mod api {
    /// Base URL for the Unusual Whales API
    pub const DEFAULT_BASE_URL: &str = "https://api.unusualwhales.com";

    /// Default wall-clock timeout for a single request
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
}

/// Configuration for the Unusual Whales MCP Server
#[derive(Clone)]
pub struct Config {
    /// Bearer token sent with every request
    pub api_key: String,

    /// Origin the endpoint paths are appended to, without trailing slash
    pub base_url: String,

    /// Timeout covering connect, send and body read
    pub timeout: Duration,
}

impl Config {
    /// Create a configuration from the process environment
    pub fn new() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(env::API_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar {
                var: env::API_KEY.to_string(),
            })?;

        let base_url = match lookup(env::BASE_URL) {
            Some(url) if !url.trim().is_empty() => normalize_base_url(&url)?,
            _ => api::DEFAULT_BASE_URL.to_string(),
        };

        let timeout_secs = match lookup(env::TIMEOUT_SECS) {
            Some(raw) => parse_timeout_secs(&raw)?,
            None => api::DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Configuration with defaults for everything but the key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: api::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(api::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Point the client at a different origin (used for local stubs)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let url = raw.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidConfig {
            message: format!("{} must be an http(s) URL, got '{}'", env::BASE_URL, raw),
        }
        .into());
    }
    Ok(url.to_string())
}

fn parse_timeout_secs(raw: &str) -> Result<u64> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidConfig {
            message: format!(
                "{} must be a positive number of seconds, got '{}'",
                env::TIMEOUT_SECS,
                raw
            ),
        }
        .into()),
    }
}
