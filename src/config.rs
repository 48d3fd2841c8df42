//! Configuration management for Vue-Lens

use crate::{Error, Result};
use serde::Deserialize;
use std::env;

/// Resolver configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Poll interval for wait operations in milliseconds
    pub poll_interval: u64,

    /// Default timeout for wait operations in milliseconds
    pub default_timeout: u64,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval: 100,
            default_timeout: 30000,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(poll_interval) = env::var("VUE_LENS_POLL_INTERVAL") {
            config.poll_interval = poll_interval
                .parse()
                .map_err(|_| Error::configuration("Invalid VUE_LENS_POLL_INTERVAL"))?;
        }

        if let Ok(default_timeout) = env::var("VUE_LENS_DEFAULT_TIMEOUT") {
            config.default_timeout = default_timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid VUE_LENS_DEFAULT_TIMEOUT"))?;
        }

        if let Ok(log_level) = env::var("VUE_LENS_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }
}
