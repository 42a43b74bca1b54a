//! Infrastructure bootstrap helpers for runtime wiring.
//!
//! The only place that picks concrete feed adapters. Everything downstream
//! sees an `Arc<dyn OddsFeed>`.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::file::FileFeed;
use crate::adapter::outbound::oddsapi::OddsApiClient;
use crate::application::detector::ArbitrageDetector;
use crate::application::scanner::Scanner;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::feed::OddsFeed;

/// Build the live Odds API feed.
///
/// # Errors
///
/// Fails when `ODDS_API_KEY` is not set.
pub fn build_live_feed(config: &Config) -> Result<Arc<dyn OddsFeed>> {
    let client = OddsApiClient::from_config(&config.feed)?;
    info!(api_url = %config.feed.api_url, regions = %config.feed.regions, "Using live odds feed");
    Ok(Arc::new(client))
}

/// Load a saved dump as a feed.
///
/// # Errors
///
/// Fails when the file cannot be read or is not a feed dump.
pub fn build_replay_feed(path: &Path) -> Result<FileFeed> {
    FileFeed::load(path)
}

/// Wire a scanner over `feed` using the configured detection settings.
#[must_use]
pub fn build_scanner(config: &Config, feed: Arc<dyn OddsFeed>) -> Scanner {
    let detector = ArbitrageDetector::new(config.detection.clone());
    Scanner::new(feed, detector, config.max_concurrent_sports)
}
