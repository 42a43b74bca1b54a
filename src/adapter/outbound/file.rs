//! Replay feed backed by a saved JSON dump.
//!
//! Accepts either a bare Odds API response (an array of events, grouped by
//! each event's `sport_key`) or an object mapping sport keys to such arrays.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use super::oddsapi::dto::decode_events;
use crate::domain::{Event, SportKey};
use crate::error::{FeedError, Result};
use crate::port::outbound::feed::OddsFeed;

/// Sport used for array dumps whose events carry no `sport_key`.
pub const UNKNOWN_SPORT: &str = "unknown";

/// In-memory feed serving a dump loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct FileFeed {
    sports: BTreeMap<SportKey, Value>,
}

impl FileFeed {
    /// Read and index a dump file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let feed = Self::parse(&content).map_err(|reason| FeedError::InvalidDump {
            path: path.display().to_string(),
            reason,
        })?;
        info!(path = %path.display(), sports = feed.sports.len(), "Loaded feed dump");
        Ok(feed)
    }

    /// Index dump content by sport.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let root: Value = serde_json::from_str(content).map_err(|err| err.to_string())?;

        let mut sports: BTreeMap<SportKey, Value> = BTreeMap::new();
        match root {
            Value::Array(events) => {
                for event in events {
                    if !event.is_object() {
                        debug!("Skipping non-object entry in dump");
                        continue;
                    }
                    let sport = event
                        .get("sport_key")
                        .and_then(Value::as_str)
                        .unwrap_or(UNKNOWN_SPORT);
                    let slot = sports
                        .entry(SportKey::from(sport))
                        .or_insert_with(|| Value::Array(Vec::new()));
                    if let Value::Array(list) = slot {
                        list.push(event);
                    }
                }
            }
            Value::Object(map) => {
                for (sport, body) in map {
                    sports.insert(SportKey::from(sport), body);
                }
            }
            _ => return Err("expected an array of events or an object keyed by sport".into()),
        }

        Ok(Self { sports })
    }

    /// Sports present in the dump, in key order.
    pub fn sports(&self) -> Vec<SportKey> {
        self.sports.keys().cloned().collect()
    }
}

#[async_trait]
impl OddsFeed for FileFeed {
    async fn fetch_events(&self, sport: &SportKey) -> Result<Vec<Event>> {
        let Some(body) = self.sports.get(sport) else {
            debug!(sport = %sport, "Sport not present in dump");
            return Ok(Vec::new());
        };
        Ok(decode_events(body.clone(), sport))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
