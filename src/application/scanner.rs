//! Multi-sport scanning.
//!
//! Fans out one task per sport, bounded by a semaphore. Each task fetches its
//! sport from the feed and runs detection over every event. The only shared
//! state is the read-only detector configuration; a failed sport is recorded
//! in the report and never aborts the others.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::domain::{ArbitrageOpportunity, SportKey};
use crate::error::{Error, Result};
use crate::port::outbound::feed::OddsFeed;

use super::detector::ArbitrageDetector;

/// Result of scanning one sport.
#[derive(Debug, Clone)]
pub enum SportOutcome {
    Completed {
        events: usize,
        opportunities: Vec<ArbitrageOpportunity>,
    },
    Failed {
        error: String,
    },
}

/// One sport's entry in a [`ScanReport`].
#[derive(Debug, Clone)]
pub struct SportScan {
    pub sport: SportKey,
    pub outcome: SportOutcome,
}

impl SportScan {
    pub fn opportunities(&self) -> &[ArbitrageOpportunity] {
        match &self.outcome {
            SportOutcome::Completed { opportunities, .. } => opportunities,
            SportOutcome::Failed { .. } => &[],
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.outcome, SportOutcome::Failed { .. })
    }
}

/// Per-sport results in the order the sports were requested.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    sports: Vec<SportScan>,
}

impl ScanReport {
    pub fn sports(&self) -> &[SportScan] {
        &self.sports
    }

    /// Every opportunity across all sports.
    pub fn opportunities(&self) -> impl Iterator<Item = &ArbitrageOpportunity> {
        self.sports.iter().flat_map(SportScan::opportunities)
    }

    #[must_use]
    pub fn opportunity_count(&self) -> usize {
        self.opportunities().count()
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.sports
            .iter()
            .map(|scan| match scan.outcome {
                SportOutcome::Completed { events, .. } => events,
                SportOutcome::Failed { .. } => 0,
            })
            .sum()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.sports.iter().filter(|scan| scan.is_failed()).count()
    }

    /// True when sports were requested and none of them could be fetched.
    #[must_use]
    pub fn all_failed(&self) -> bool {
        !self.sports.is_empty() && self.failed_count() == self.sports.len()
    }
}

/// Scans sports against a feed with a shared detector.
#[derive(Clone)]
pub struct Scanner {
    feed: Arc<dyn OddsFeed>,
    detector: Arc<ArbitrageDetector>,
    max_concurrent: usize,
}

impl Scanner {
    /// `max_concurrent` is clamped to at least one.
    pub fn new(feed: Arc<dyn OddsFeed>, detector: ArbitrageDetector, max_concurrent: usize) -> Self {
        Self {
            feed,
            detector: Arc::new(detector),
            max_concurrent: max_concurrent.max(1),
        }
    }

    pub fn detector(&self) -> &ArbitrageDetector {
        &self.detector
    }

    /// Fetch and evaluate a single sport.
    ///
    /// Returns the number of events seen and the opportunities found.
    pub async fn scan_sport(&self, sport: &SportKey) -> Result<(usize, Vec<ArbitrageOpportunity>)> {
        let events = self.feed.fetch_events(sport).await?;
        let opportunities = events
            .iter()
            .flat_map(|event| self.detector.detect(event))
            .collect();
        Ok((events.len(), opportunities))
    }

    /// Scan every sport concurrently.
    pub async fn scan(&self, sports: &[SportKey]) -> ScanReport {
        let permits = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks = JoinSet::new();

        for (slot, sport) in sports.iter().cloned().enumerate() {
            let scanner = self.clone();
            let permits = Arc::clone(&permits);
            tasks.spawn(async move {
                let result = match permits.acquire_owned().await {
                    Ok(_permit) => scanner.scan_sport(&sport).await,
                    Err(err) => Err(Error::Task(err.to_string())),
                };
                (slot, sport, result)
            });
        }

        let mut outcomes: Vec<SportScan> = sports
            .iter()
            .map(|sport| SportScan {
                sport: sport.clone(),
                outcome: SportOutcome::Failed {
                    error: "scan task did not complete".to_string(),
                },
            })
            .collect();

        while let Some(joined) = tasks.join_next().await {
            let (slot, sport, result) = match joined {
                Ok(done) => done,
                Err(err) => {
                    warn!(error = %err, feed = self.feed.name(), "Scan task failed");
                    continue;
                }
            };

            let outcome = match result {
                Ok((events, opportunities)) => {
                    info!(
                        sport = %sport,
                        events,
                        opportunities = opportunities.len(),
                        "Sport scanned"
                    );
                    SportOutcome::Completed {
                        events,
                        opportunities,
                    }
                }
                Err(err) => {
                    warn!(sport = %sport, feed = self.feed.name(), error = %err, "Sport fetch failed");
                    SportOutcome::Failed {
                        error: err.to_string(),
                    }
                }
            };
            outcomes[slot].outcome = outcome;
        }

        ScanReport { sports: outcomes }
    }
}
