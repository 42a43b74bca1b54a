//! Odds API feed configuration.

use serde::Deserialize;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ODDS_API_KEY";

/// Connection and query settings for The Odds API.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiConfig {
    /// Base URL including the API version.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bookmaker regions to query (comma-separated).
    #[serde(default = "default_regions")]
    pub regions: String,

    /// Market keys to request (comma-separated).
    #[serde(default = "default_markets")]
    pub markets: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Attempts per sport, including the first. 1 disables retries.
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,

    /// Backoff between retries in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Loaded from `ODDS_API_KEY` at runtime, never from the config file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_api_url() -> String {
    "https://api.the-odds-api.com/v4".into()
}

fn default_regions() -> String {
    "us".into()
}

fn default_markets() -> String {
    "h2h,totals,spreads".into()
}

const fn default_timeout_ms() -> u64 {
    30_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

const fn default_retry_max_attempts() -> u32 {
    1
}

const fn default_retry_backoff_ms() -> u64 {
    500
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            regions: default_regions(),
            markets: default_markets(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
            api_key: None,
        }
    }
}
