//! Centralized configuration management for artbrowse

use anyhow::{Context, Result};
use std::time::Duration;

use crate::artic::ArticApi;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the artworks list endpoint
    pub api_base_url: String,
    /// Number of artworks fetched per page
    pub page_size: usize,
    /// HTTP client configuration
    pub http: HttpConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "artbrowse/0.1.0".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: ArticApi::artworks_url(),
            page_size: 10,
            http: HttpConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables and defaults
    pub fn from_env() -> Result<Self> {
        let api_base_url =
            std::env::var("ARTBROWSE_API_URL").unwrap_or_else(|_| ArticApi::artworks_url());

        let page_size = parse_env_var("ARTBROWSE_PAGE_SIZE")?.unwrap_or(10);

        let http = HttpConfig {
            timeout_seconds: parse_env_var("ARTBROWSE_HTTP_TIMEOUT_SECONDS")?.unwrap_or(30),
            user_agent: std::env::var("ARTBROWSE_USER_AGENT")
                .unwrap_or_else(|_| "artbrowse/0.1.0".to_string()),
        };

        Ok(Config {
            api_base_url,
            page_size,
            http,
        })
    }

    /// Get HTTP timeout as Duration
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(anyhow::anyhow!("Page size must be at least 1"));
        }

        if !self.api_base_url.starts_with("http") {
            return Err(anyhow::anyhow!(
                "API base URL does not look like an HTTP endpoint: {}",
                self.api_base_url
            ));
        }

        Ok(())
    }
}

/// Helper function to parse environment variable as a specific type
fn parse_env_var<T>(var_name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display + Send + Sync + std::error::Error + 'static,
{
    match std::env::var(var_name) {
        Ok(val) => val.parse().map(Some).with_context(|| {
            format!("Failed to parse environment variable {} = '{}'", var_name, val)
        }),
        Err(_) => Ok(None),
    }
}
