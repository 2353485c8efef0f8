use std::env;
use std::time::Duration;

use super::error::ConfigError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the storefront backend lives.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl BackendConfig {
    /// Environment variables:
    /// - API_BASE_URL: Base url of the storefront backend (required)
    /// - API_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("API_BASE_URL").ok(),
            env::var("API_TIMEOUT_SECS").ok(),
        )
    }

    fn from_values(base_url: Option<String>, timeout: Option<String>) -> Result<Self, ConfigError> {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("API_BASE_URL"))?;
        let timeout = match timeout {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::NotANumber {
                    name: "API_TIMEOUT_SECS",
                    value: raw.clone(),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout),
        })
    }
}
