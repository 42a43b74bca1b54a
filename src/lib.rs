//! Oddsarb - cross-book sports betting arbitrage detection.
//!
//! Fetches two-way odds (moneyline, totals, spreads) from several sportsbooks,
//! picks the best price per side across books, and reports every market where
//! backing both sides at different books guarantees a profit, together with
//! the stake split that locks it in.
//!
//! # Architecture
//!
//! Hexagonal layout:
//!
//! - [`domain`] - Pure types: odds, events, markets, opportunities, stakes
//! - [`application`] - The detection pipeline and the multi-sport scanner
//! - [`port`] - The `OddsFeed` trait the application depends on
//! - [`adapter`] - CLI (inbound), Odds API client and file replay (outbound)
//! - [`infrastructure`] - Configuration, logging and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use oddsarb::application::ArbitrageDetector;
//! use oddsarb::domain::{AmericanOdds, BookQuote, Event, MarketQuote, OutcomeQuote};
//!
//! let odds = |v| AmericanOdds::try_new(v).unwrap();
//! let h2h = |home, away| {
//!     MarketQuote::new(
//!         "h2h",
//!         vec![
//!             OutcomeQuote::new("Lakers", odds(home), None),
//!             OutcomeQuote::new("Celtics", odds(away), None),
//!         ],
//!     )
//! };
//! let event = Event::new(
//!     "basketball_nba",
//!     "Lakers",
//!     "Celtics",
//!     vec![
//!         BookQuote::new("FanDuel", vec![h2h(105, -130)]),
//!         BookQuote::new("DraftKings", vec![h2h(-125, 102)]),
//!     ],
//! );
//!
//! let found = ArbitrageDetector::default().detect(&event);
//! assert_eq!(found.len(), 1);
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
