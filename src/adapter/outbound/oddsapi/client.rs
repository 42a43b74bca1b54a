//! The Odds API REST client.
//!
//! Fetches `/sports/{sport}/odds` in American format. Transport failures are
//! returned to the caller and only affect the sport being fetched. Timeouts
//! and connect errors may be retried a bounded number of times.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, info, warn};
use url::Url;

use super::dto::decode_events;
use super::settings::{OddsApiConfig, API_KEY_ENV};
use crate::domain::{Event, SportKey};
use crate::error::{FeedError, Result};
use crate::port::outbound::feed::OddsFeed;

const ODDS_FORMAT: &str = "american";

/// HTTP client for The Odds API.
pub struct OddsApiClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    regions: String,
    markets: String,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl OddsApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MissingApiKey`] when no key was loaded.
    pub fn from_config(config: &OddsApiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(FeedError::MissingApiKey { var: API_KEY_ENV })?;

        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key,
            regions: config.regions.clone(),
            markets: config.markets.clone(),
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        })
    }

    /// Odds endpoint for a sport, query string included.
    pub fn odds_url(&self, sport: &SportKey) -> Result<Url> {
        let url = Url::parse_with_params(
            &format!("{}/sports/{}/odds", self.base_url, sport),
            &[
                ("apiKey", self.api_key.as_str()),
                ("regions", self.regions.as_str()),
                ("markets", self.markets.as_str()),
                ("oddsFormat", ODDS_FORMAT),
            ],
        )?;
        Ok(url)
    }

    async fn get_with_retry(&self, url: Url, sport: &SportKey) -> Result<serde_json::Value> {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let response = match self.http.get(url.clone()).send().await {
                Ok(response) => response,
                Err(err) => {
                    // The URL carries the API key; never let it reach logs.
                    let err = err.without_url();
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                return Err(FeedError::UnexpectedStatus {
                    sport: sport.to_string(),
                    status: status.as_u16(),
                }
                .into());
            }
            Self::log_quota(response.headers());

            match response.json::<serde_json::Value>().await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    let err = err.without_url();
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }

    fn log_quota(headers: &HeaderMap) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };
        if let Some(remaining) = header("x-requests-remaining") {
            debug!(
                remaining = %remaining,
                used = %header("x-requests-used").unwrap_or_default(),
                "Odds API quota"
            );
        }
    }
}

#[async_trait]
impl OddsFeed for OddsApiClient {
    async fn fetch_events(&self, sport: &SportKey) -> Result<Vec<Event>> {
        let url = self.odds_url(sport)?;
        info!(sport = %sport, base = %self.base_url, "Fetching odds");

        let body = self.get_with_retry(url, sport).await?;
        let events = decode_events(body, sport);
        debug!(sport = %sport, count = events.len(), "Fetched events");

        Ok(events)
    }

    fn name(&self) -> &'static str {
        "the-odds-api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn config_with_key(key: Option<&str>) -> OddsApiConfig {
        OddsApiConfig {
            api_key: key.map(str::to_string),
            ..OddsApiConfig::default()
        }
    }

    #[test]
    fn missing_key_is_rejected() {
        let result = OddsApiClient::from_config(&config_with_key(None));
        assert!(matches!(
            result,
            Err(Error::Feed(FeedError::MissingApiKey { .. }))
        ));
        let result = OddsApiClient::from_config(&config_with_key(Some("  ")));
        assert!(result.is_err());
    }

    #[test]
    fn odds_url_carries_query() {
        let client = OddsApiClient::from_config(&config_with_key(Some("secret"))).unwrap();
        let url = client.odds_url(&SportKey::from("baseball_mlb")).unwrap();
        assert_eq!(url.path(), "/v4/sports/baseball_mlb/odds");
        let query: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(query.contains(&("apiKey".into(), "secret".into())));
        assert!(query.contains(&("regions".into(), "us".into())));
        assert!(query.contains(&("markets".into(), "h2h,totals,spreads".into())));
        assert!(query.contains(&("oddsFormat".into(), "american".into())));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = OddsApiConfig {
            api_url: "http://localhost:9000/v4/".into(),
            ..config_with_key(Some("k"))
        };
        let client = OddsApiClient::from_config(&config).unwrap();
        let url = client.odds_url(&SportKey::from("icehockey_nhl")).unwrap();
        assert_eq!(url.path(), "/v4/sports/icehockey_nhl/odds");
    }
}
