//! Per-event arbitrage detection.
//!
//! Wires the pipeline for a single event:
//!
//! ```text
//! Event --normalize--> Market --offer--> BestPriceBook --evaluate--> ArbitrageOpportunity
//! ```
//!
//! All intermediate state is local to one `detect` call, so a shared
//! `ArbitrageDetector` can serve any number of events concurrently.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::domain::{ArbitrageOpportunity, BookName, Event, OpportunityLeg};

use super::evaluator::{evaluate, Rejection};
use super::normalize::normalize;
use super::selector::BestPriceBook;

/// Thresholds and filters applied during detection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectionConfig {
    /// Books to consider. Absent or empty means every book.
    #[serde(default)]
    pub allowed_books: Option<BTreeSet<BookName>>,

    /// Largest margin (percent) still believed to be real.
    #[serde(default = "default_max_arbitrage_pct")]
    pub max_arbitrage_pct: Decimal,

    /// Prices beyond this magnitude are ignored as longshot noise.
    #[serde(default = "default_max_abs_odds")]
    pub max_abs_odds: u32,
}

fn default_max_arbitrage_pct() -> Decimal {
    Decimal::new(5, 0)
}

const fn default_max_abs_odds() -> u32 {
    500
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            allowed_books: None,
            max_arbitrage_pct: default_max_arbitrage_pct(),
            max_abs_odds: default_max_abs_odds(),
        }
    }
}

impl DetectionConfig {
    /// Whether quotes from this book take part in detection.
    #[must_use]
    pub fn allows(&self, book: &BookName) -> bool {
        match &self.allowed_books {
            Some(books) if !books.is_empty() => books.contains(book),
            _ => true,
        }
    }
}

/// Stateless detector applying one configuration to many events.
#[derive(Debug, Clone, Default)]
pub struct ArbitrageDetector {
    config: DetectionConfig,
}

impl ArbitrageDetector {
    #[must_use]
    pub fn new(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Collect best prices across books and return every accepted opportunity
    /// for the event, in first-seen market order.
    #[must_use]
    pub fn detect(&self, event: &Event) -> Vec<ArbitrageOpportunity> {
        let best = self.best_prices(event);

        let mut opportunities = Vec::new();
        for market in best.markets() {
            match evaluate(market, self.config.max_arbitrage_pct) {
                Ok(evaluation) => {
                    debug!(
                        event = %event.matchup(),
                        market = %market.key(),
                        margin = %evaluation.margin_pct.round_dp(3),
                        "Arbitrage detected"
                    );
                    let legs: [OpportunityLeg; 2] = evaluation.legs.map(Into::into);
                    opportunities.push(ArbitrageOpportunity::new(
                        event,
                        market.key().clone(),
                        legs,
                        evaluation.margin_pct,
                    ));
                }
                Err(reason @ Rejection::AboveCeiling(_)) => {
                    debug!(event = %event.matchup(), market = %market.key(), %reason, "Discarding implausible arbitrage");
                }
                Err(reason) => {
                    trace!(event = %event.matchup(), market = %market.key(), %reason, "No arbitrage");
                }
            }
        }
        opportunities
    }

    /// Run normalization and selection only.
    #[must_use]
    pub fn best_prices(&self, event: &Event) -> BestPriceBook {
        let mut best = BestPriceBook::new();
        for quote in &event.bookmakers {
            if !self.config.allows(&quote.book) {
                trace!(book = %quote.book, "Book not in allow-list");
                continue;
            }
            for listing in &quote.markets {
                if let Some(market) = normalize(event, listing) {
                    best.offer(&quote.book, market, self.config.max_abs_odds);
                }
            }
        }
        best
    }
}
