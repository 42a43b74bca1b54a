//! American odds and their conversions.
//!
//! Feeds quote prices in the American format: a positive price is the profit
//! on a 100 stake, a negative price is the stake needed to profit 100. All
//! arbitrage math happens on decimal odds and implied probabilities derived
//! here.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A nonzero American odds price.
///
/// Ordering is numeric, so a greater value is always the better price for
/// the bettor (+150 beats +120, -105 beats -110).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AmericanOdds(i32);

impl AmericanOdds {
    /// Create a price, rejecting zero.
    pub fn try_new(value: i32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::ZeroOdds);
        }
        Ok(Self(value))
    }

    /// The signed price.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Absolute price, used by the longshot ceiling.
    #[must_use]
    pub const fn magnitude(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Decimal odds: `1 + p/100` for underdogs, `1 + 100/|p|` for favorites.
    ///
    /// Always strictly greater than one.
    #[must_use]
    pub fn to_decimal(self) -> Decimal {
        let price = Decimal::from(self.0);
        if self.0 > 0 {
            Decimal::ONE + price / Decimal::ONE_HUNDRED
        } else {
            Decimal::ONE + Decimal::ONE_HUNDRED / price.abs()
        }
    }

    /// Implied probability `1 / decimal_odds`.
    #[must_use]
    pub fn implied_probability(self) -> Decimal {
        Decimal::ONE / self.to_decimal()
    }
}

impl TryFrom<i32> for AmericanOdds {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<i64> for AmericanOdds {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let narrowed = i32::try_from(value).map_err(|_| DomainError::OddsOutOfRange { value })?;
        Self::try_new(narrowed)
    }
}

impl From<AmericanOdds> for i32 {
    fn from(odds: AmericanOdds) -> Self {
        odds.0
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
