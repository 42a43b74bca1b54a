//! Validated per-event input: one event, many books, each quoting markets.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::id::{BookName, SportKey};
use super::odds::AmericanOdds;

/// One priced outcome within a book's market listing.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeQuote {
    /// Team name, or "Over"/"Under" for totals.
    pub name: String,
    pub price: AmericanOdds,
    /// Line value for totals and spreads.
    pub point: Option<Decimal>,
}

impl OutcomeQuote {
    pub fn new(name: impl Into<String>, price: AmericanOdds, point: Option<Decimal>) -> Self {
        Self {
            name: name.into(),
            price,
            point,
        }
    }
}

/// A book's listing for one market key.
///
/// The key is kept raw: unsupported keys are legal input and are dropped by
/// normalization rather than at decode time.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketQuote {
    pub key: String,
    pub outcomes: Vec<OutcomeQuote>,
}

impl MarketQuote {
    pub fn new(key: impl Into<String>, outcomes: Vec<OutcomeQuote>) -> Self {
        Self {
            key: key.into(),
            outcomes,
        }
    }
}

/// Every market one sportsbook quotes for an event.
#[derive(Debug, Clone, PartialEq)]
pub struct BookQuote {
    pub book: BookName,
    pub markets: Vec<MarketQuote>,
}

impl BookQuote {
    pub fn new(book: impl Into<BookName>, markets: Vec<MarketQuote>) -> Self {
        Self {
            book: book.into(),
            markets,
        }
    }
}

/// A real-world fixture with the quotes collected for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Feed-assigned identifier, empty when the source has none.
    pub id: String,
    pub sport: SportKey,
    pub home_team: String,
    pub away_team: String,
    pub commence_time: Option<DateTime<Utc>>,
    pub bookmakers: Vec<BookQuote>,
}

impl Event {
    pub fn new(
        sport: impl Into<SportKey>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        bookmakers: Vec<BookQuote>,
    ) -> Self {
        Self {
            id: String::new(),
            sport: sport.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            commence_time: None,
            bookmakers,
        }
    }

    /// Short "Away @ Home" description used in logs and reports.
    #[must_use]
    pub fn matchup(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }
}
