//! Command-line and environment configuration.

use std::time::Duration;

use clap::Parser;
use comments_core::DEFAULT_BASE_URL;
use thiserror::Error;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Parser)]
#[command(name = "comments-app", about = "Fetch the comments list and print it")]
pub struct Cli {
    /// Base URL of the comments API; `/comments` is appended.
    #[arg(long, env = "COMMENTS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "COMMENTS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),

    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl AppConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(Self {
            base_url: base_url.to_string(),
            timeout,
        })
    }

    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        Self::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
