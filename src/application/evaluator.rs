//! Arbitrage evaluation for one market's best prices.

use std::fmt;

use rust_decimal::Decimal;

use crate::domain::{AmericanOdds, BestQuote, BookName};

use super::selector::MarketBook;

/// An accepted market: the two legs and the guaranteed margin in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub legs: [BestQuote; 2],
    pub margin_pct: Decimal,
}

/// Why a market did not yield an opportunity.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Fewer or more than two outcome labels survived selection.
    IncompleteSides(usize),
    /// Both best prices came from one book.
    SameBook(BookName),
    /// Combined implied probability is at or above 100%.
    NoEdge(Decimal),
    /// Margin above the configured ceiling; likely stale or bad data.
    AboveCeiling(Decimal),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteSides(n) => write!(f, "{n} priced sides"),
            Self::SameBook(book) => write!(f, "both sides best at {book}"),
            Self::NoEdge(margin) => write!(f, "no edge ({}%)", margin.round_dp(3)),
            Self::AboveCeiling(margin) => write!(f, "margin {}% above ceiling", margin.round_dp(3)),
        }
    }
}

/// Guaranteed margin in percent: `(1 - (1/d1 + 1/d2)) * 100`.
///
/// Negative when the two prices together overround the market.
#[must_use]
pub fn arbitrage_margin(first: AmericanOdds, second: AmericanOdds) -> Decimal {
    let combined = first.implied_probability() + second.implied_probability();
    (Decimal::ONE - combined) * Decimal::ONE_HUNDRED
}

/// Accept a market iff it has two sides from different books and
/// `0 < margin <= max_arbitrage_pct`.
pub fn evaluate(market: &MarketBook, max_arbitrage_pct: Decimal) -> Result<Evaluation, Rejection> {
    let [first, second] = market.sides() else {
        return Err(Rejection::IncompleteSides(market.sides().len()));
    };

    if first.book == second.book {
        return Err(Rejection::SameBook(first.book.clone()));
    }

    let margin_pct = arbitrage_margin(first.price, second.price);
    if margin_pct <= Decimal::ZERO {
        return Err(Rejection::NoEdge(margin_pct));
    }
    if margin_pct > max_arbitrage_pct {
        return Err(Rejection::AboveCeiling(margin_pct));
    }

    Ok(Evaluation {
        legs: [first.clone(), second.clone()],
        margin_pct,
    })
}
