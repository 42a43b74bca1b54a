//! Detected cross-book arbitrage opportunity.
//!
//! An `ArbitrageOpportunity` pairs the two best-priced sides of one market,
//! each from a different book, together with the guaranteed margin and the
//! stake split that locks it in.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::event::Event;
use super::id::{BookName, SportKey};
use super::market::{MarketKey, MarketKind};
use super::odds::AmericanOdds;
use super::quote::BestQuote;
use super::stake::{stake_split, StakeSplit};

/// One side of an opportunity: what to back, where, and at what price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpportunityLeg {
    pub label: String,
    pub price: AmericanOdds,
    pub book: BookName,
    pub point: Option<Decimal>,
}

impl From<BestQuote> for OpportunityLeg {
    fn from(quote: BestQuote) -> Self {
        Self {
            label: quote.label,
            price: quote.price,
            book: quote.book,
            point: quote.point,
        }
    }
}

/// A detected arbitrage opportunity.
///
/// Invariants (enforced by the evaluator that builds it): both legs come from
/// different books and `profit_pct` is strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArbitrageOpportunity {
    sport: SportKey,
    event_id: String,
    home_team: String,
    away_team: String,
    commence_time: Option<DateTime<Utc>>,
    market: MarketKey,
    legs: [OpportunityLeg; 2],
    profit_pct: Decimal,
    stakes: StakeSplit,
}

impl ArbitrageOpportunity {
    /// Build an opportunity for an event; the stake split is derived from the
    /// legs' prices.
    #[must_use]
    pub fn new(
        event: &Event,
        market: MarketKey,
        legs: [OpportunityLeg; 2],
        profit_pct: Decimal,
    ) -> Self {
        let stakes = stake_split(legs[0].price.to_decimal(), legs[1].price.to_decimal());
        Self {
            sport: event.sport.clone(),
            event_id: event.id.clone(),
            home_team: event.home_team.clone(),
            away_team: event.away_team.clone(),
            commence_time: event.commence_time,
            market,
            legs,
            profit_pct,
            stakes,
        }
    }

    /// Get the sport the event belongs to.
    pub fn sport(&self) -> &SportKey {
        &self.sport
    }

    /// Get the feed's event identifier.
    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn commence_time(&self) -> Option<DateTime<Utc>> {
        self.commence_time
    }

    /// Get the market identity.
    pub fn market(&self) -> &MarketKey {
        &self.market
    }

    pub fn kind(&self) -> MarketKind {
        self.market.kind()
    }

    /// Get both legs in report order.
    pub fn legs(&self) -> &[OpportunityLeg; 2] {
        &self.legs
    }

    /// Get the guaranteed margin in percent.
    pub fn profit_pct(&self) -> Decimal {
        self.profit_pct
    }

    /// Get the stake split matching the legs' order.
    pub fn stakes(&self) -> &StakeSplit {
        &self.stakes
    }
}
