use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use oddsarb::domain::{Event, SportKey};
use oddsarb::error::{FeedError, Result};
use oddsarb::port::outbound::feed::OddsFeed;

enum Script {
    Events(Vec<Event>),
    Status(u16),
}

/// In-memory feed with per-sport canned responses.
///
/// Unknown sports return no events. Tracks how many fetches ran at once.
#[derive(Default)]
pub struct ScriptedFeed {
    scripts: HashMap<SportKey, Script>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
}

impl ScriptedFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(mut self, sport: &str, events: Vec<Event>) -> Self {
        self.scripts.insert(SportKey::from(sport), Script::Events(events));
        self
    }

    pub fn with_status(mut self, sport: &str, status: u16) -> Self {
        self.scripts.insert(SportKey::from(sport), Script::Status(status));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OddsFeed for ScriptedFeed {
    async fn fetch_events(&self, sport: &SportKey) -> Result<Vec<Event>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let result = match self.scripts.get(sport) {
            Some(Script::Events(events)) => Ok(events.clone()),
            Some(Script::Status(status)) => Err(FeedError::UnexpectedStatus {
                sport: sport.to_string(),
                status: *status,
            }
            .into()),
            None => Ok(Vec::new()),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
