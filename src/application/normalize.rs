//! Market normalization.
//!
//! Turns one book's raw market listing into a canonical [`Market`] with a
//! book-independent [`MarketKey`], or explains why it was dropped. Feed data
//! is noisy, so a rejection is never an error.

use std::fmt;

use rust_decimal::Decimal;
use tracing::trace;

use crate::domain::{
    Event, Market, MarketKey, MarketKind, MarketQuote, OutcomeQuote, OutcomeSide,
};

const OVER: &str = "Over";
const UNDER: &str = "Under";

/// Why a listing did not produce a canonical market.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    UnsupportedKey,
    OutcomeCount(usize),
    TeamMismatch,
    NotOverUnder,
    MissingLine,
    UnequalTotals,
    SpreadNotZeroSum,
    SpreadSameSign,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedKey => write!(f, "unsupported market key"),
            Self::OutcomeCount(n) => write!(f, "expected 2 outcomes, got {n}"),
            Self::TeamMismatch => write!(f, "outcomes do not match home/away teams"),
            Self::NotOverUnder => write!(f, "totals outcomes are not Over/Under"),
            Self::MissingLine => write!(f, "missing line value"),
            Self::UnequalTotals => write!(f, "totals lines differ"),
            Self::SpreadNotZeroSum => write!(f, "spread lines do not sum to zero"),
            Self::SpreadSameSign => write!(f, "spread lines do not have opposite signs"),
        }
    }
}

/// Canonicalize a listing, dropping it silently when it does not qualify.
#[must_use]
pub fn normalize(event: &Event, quote: &MarketQuote) -> Option<Market> {
    match try_normalize(event, quote) {
        Ok(market) => Some(market),
        Err(reason) => {
            trace!(key = %quote.key, %reason, "Market listing skipped");
            None
        }
    }
}

/// Canonicalize a listing, reporting the rejection reason.
pub fn try_normalize(event: &Event, quote: &MarketQuote) -> Result<Market, SkipReason> {
    let kind: MarketKind = quote
        .key
        .parse()
        .map_err(|_| SkipReason::UnsupportedKey)?;

    let [first, second] = quote.outcomes.as_slice() else {
        return Err(SkipReason::OutcomeCount(quote.outcomes.len()));
    };

    match kind {
        MarketKind::HeadToHead => head_to_head(event, first, second),
        MarketKind::Totals => totals(first, second),
        MarketKind::Spreads => spreads(event, first, second),
    }
}

/// Order the two outcomes as (home, away), or fail when the names differ from
/// the fixture's teams.
fn by_team<'a>(
    event: &Event,
    first: &'a OutcomeQuote,
    second: &'a OutcomeQuote,
) -> Result<(&'a OutcomeQuote, &'a OutcomeQuote), SkipReason> {
    if first.name == event.home_team && second.name == event.away_team {
        Ok((first, second))
    } else if first.name == event.away_team && second.name == event.home_team {
        Ok((second, first))
    } else {
        Err(SkipReason::TeamMismatch)
    }
}

fn head_to_head(
    event: &Event,
    first: &OutcomeQuote,
    second: &OutcomeQuote,
) -> Result<Market, SkipReason> {
    let (home, away) = by_team(event, first, second)?;
    let key = MarketKey::HeadToHead {
        home: event.home_team.clone(),
        away: event.away_team.clone(),
    };
    Ok(Market::new(
        key,
        [
            OutcomeSide::new(&home.name, home.price, None),
            OutcomeSide::new(&away.name, away.price, None),
        ],
    ))
}

fn totals(first: &OutcomeQuote, second: &OutcomeQuote) -> Result<Market, SkipReason> {
    let mut names = [first.name.as_str(), second.name.as_str()];
    names.sort_unstable();
    if names != [OVER, UNDER] {
        return Err(SkipReason::NotOverUnder);
    }

    let (Some(first_line), Some(second_line)) = (first.point, second.point) else {
        return Err(SkipReason::MissingLine);
    };
    if first_line != second_line {
        return Err(SkipReason::UnequalTotals);
    }

    Ok(Market::new(
        MarketKey::Totals {
            line: first_line.normalize(),
        },
        [
            OutcomeSide::new(&first.name, first.price, first.point),
            OutcomeSide::new(&second.name, second.price, second.point),
        ],
    ))
}

fn spreads(
    event: &Event,
    first: &OutcomeQuote,
    second: &OutcomeQuote,
) -> Result<Market, SkipReason> {
    let (home, away) = by_team(event, first, second)?;

    let (Some(home_line), Some(away_line)) = (home.point, away.point) else {
        return Err(SkipReason::MissingLine);
    };
    if !(home_line + away_line).round_dp(6).is_zero() {
        return Err(SkipReason::SpreadNotZeroSum);
    }
    let opposite = (home_line < Decimal::ZERO && away_line > Decimal::ZERO)
        || (away_line < Decimal::ZERO && home_line > Decimal::ZERO);
    if !opposite {
        return Err(SkipReason::SpreadSameSign);
    }

    let key = MarketKey::Spreads {
        home: event.home_team.clone(),
        away: event.away_team.clone(),
        home_line: home_line.normalize(),
    };
    Ok(Market::new(
        key,
        [
            OutcomeSide::new(&home.name, home.price, Some(home_line)),
            OutcomeSide::new(&away.name, away.price, Some(away_line)),
        ],
    ))
}
