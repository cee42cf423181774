//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote creature catalog
    pub api_base_url: String,
    /// Staleness window for cached responses in seconds; also the sweep cadence
    pub stale_secs: u64,
    /// Number of areas requested per listing page
    pub page_limit: u32,
    /// Timeout for a single catalog request in seconds
    pub http_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `BESTIARY_API_URL` - Catalog base URL (default: https://api.bestiary.dev/v2)
    /// - `BESTIARY_STALE_SECS` - Cache staleness window in seconds (default: 300)
    /// - `BESTIARY_PAGE_LIMIT` - Areas per listing page (default: 20)
    /// - `BESTIARY_HTTP_TIMEOUT_SECS` - Catalog request timeout in seconds (default: 10)
    ///
    /// # Returns
    /// A Config instance with values from environment or defaults
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("BESTIARY_API_URL")
                .unwrap_or_else(|_| "https://api.bestiary.dev/v2".to_string()),
            stale_secs: env::var("BESTIARY_STALE_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            page_limit: env::var("BESTIARY_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            http_timeout_secs: env::var("BESTIARY_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for Config {
    /// Creates a Config with default values.
    fn default() -> Self {
        Self {
            api_base_url: "https://api.bestiary.dev/v2".to_string(),
            stale_secs: 300,
            page_limit: 20,
            http_timeout_secs: 10,
        }
    }
}
