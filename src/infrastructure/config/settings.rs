//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for sensitive values like `ODDS_API_KEY`.
//!
//! # Example
//!
//! ```no_run
//! use oddsarb::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::adapter::outbound::oddsapi::settings::{OddsApiConfig, API_KEY_ENV};
use crate::application::detector::DetectionConfig;
use crate::domain::SportKey;
use crate::error::{ConfigError, Result};

/// Leagues scanned when the file names none.
pub const DEFAULT_SPORTS: [&str; 6] = [
    "basketball_nba",
    "basketball_ncaab",
    "americanfootball_nfl",
    "americanfootball_ncaaf",
    "baseball_mlb",
    "icehockey_nhl",
];

/// Smallest accepted odds ceiling; anything lower would drop even-money prices.
const MIN_ABS_ODDS_CEILING: u32 = 100;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`]. Every section is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Sport keys to scan.
    #[serde(default = "default_sports")]
    pub sports: Vec<SportKey>,

    /// Maximum number of sports fetched at the same time.
    #[serde(default = "default_max_concurrent_sports")]
    pub max_concurrent_sports: usize,

    /// Odds feed connection settings.
    #[serde(default)]
    pub feed: OddsApiConfig,

    /// Detection thresholds and book filter.
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_sports() -> Vec<SportKey> {
    DEFAULT_SPORTS.iter().map(|sport| SportKey::from(*sport)).collect()
}

const fn default_max_concurrent_sports() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sports: default_sports(),
            max_concurrent_sports: default_max_concurrent_sports(),
            feed: OddsApiConfig::default(),
            detection: DetectionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Loads the API key from the `ODDS_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        // Never from the config file.
        config.feed.api_key = std::env::var(API_KEY_ENV).ok();

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Check that values are within acceptable ranges.
    ///
    /// Also called after CLI overrides are applied.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.sports.is_empty() {
            return Err(ConfigError::MissingField { field: "sports" }.into());
        }
        if let Some(sport) = self.sports.iter().find(|sport| sport.as_str().trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "sports",
                reason: format!("empty sport key {sport:?}"),
            }
            .into());
        }
        if self.max_concurrent_sports == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_concurrent_sports",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.feed.api_url.is_empty() {
            return Err(ConfigError::MissingField { field: "api_url" }.into());
        }
        if self.feed.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.feed.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.feed.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        if self.detection.max_arbitrage_pct <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "max_arbitrage_pct",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.detection.max_abs_odds < MIN_ABS_ODDS_CEILING {
            return Err(ConfigError::InvalidValue {
                field: "max_abs_odds",
                reason: format!("must be at least {MIN_ABS_ODDS_CEILING}"),
            }
            .into());
        }

        Ok(())
    }

    /// Whether an API key was found in the environment.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.feed
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.sports.len(), 6);
        assert_eq!(config.sports[0].as_str(), "basketball_nba");
        assert_eq!(config.detection.max_arbitrage_pct, dec!(5));
        assert_eq!(config.detection.max_abs_odds, 500);
        assert!(config.detection.allowed_books.is_none());
        assert_eq!(config.feed.timeout_ms, 30_000);
        assert_eq!(config.feed.retry_max_attempts, 1);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::parse_toml(
            r#"
sports = ["icehockey_nhl"]
max_concurrent_sports = 2

[feed]
regions = "us,uk"
timeout_ms = 10000

[detection]
allowed_books = ["DraftKings", "FanDuel"]
max_arbitrage_pct = 3.5
max_abs_odds = 400

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.sports, vec![SportKey::from("icehockey_nhl")]);
        assert_eq!(config.max_concurrent_sports, 2);
        assert_eq!(config.feed.regions, "us,uk");
        assert_eq!(config.feed.timeout_ms, 10_000);
        assert_eq!(config.detection.max_arbitrage_pct, dec!(3.5));
        assert_eq!(config.detection.max_abs_odds, 400);
        assert_eq!(config.detection.allowed_books.as_ref().map(|b| b.len()), Some(2));
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn rejects_non_positive_ceiling() {
        let result = Config::parse_toml("[detection]\nmax_arbitrage_pct = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "max_arbitrage_pct",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_tiny_odds_ceiling() {
        let result = Config::parse_toml("[detection]\nmax_abs_odds = 50\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "max_abs_odds",
                ..
            }))
        ));
    }

    #[test]
    fn rejects_empty_sports() {
        let result = Config::parse_toml("sports = []\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "sports" }))
        ));
    }

    #[test]
    fn rejects_zero_retry_attempts() {
        let result = Config::parse_toml("[feed]\nretry_max_attempts = 0\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                ..
            }))
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = Config::parse_toml("sports = [");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }
}
