//! Canonical markets and their book-independent identity.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::odds::AmericanOdds;

/// Supported market structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketKind {
    /// Moneyline: one team wins.
    #[serde(rename = "h2h")]
    HeadToHead,
    /// Over/under on combined score.
    Totals,
    /// Point spread, handicap applied to one team.
    Spreads,
}

impl MarketKind {
    /// Key used by the feed for this market.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HeadToHead => "h2h",
            Self::Totals => "totals",
            Self::Spreads => "spreads",
        }
    }
}

impl FromStr for MarketKind {
    type Err = DomainError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "h2h" => Ok(Self::HeadToHead),
            "totals" => Ok(Self::Totals),
            "spreads" => Ok(Self::Spreads),
            other => Err(DomainError::UnsupportedMarket {
                key: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for MarketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a market, independent of the book that quoted it.
///
/// Two book listings describe the same market only when their keys are
/// structurally equal. Spreads carry the signed home line so that a market
/// where the home side gives points never merges with one where it takes
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MarketKey {
    HeadToHead { home: String, away: String },
    Totals { line: Decimal },
    Spreads { home: String, away: String, home_line: Decimal },
}

impl MarketKey {
    #[must_use]
    pub const fn kind(&self) -> MarketKind {
        match self {
            Self::HeadToHead { .. } => MarketKind::HeadToHead,
            Self::Totals { .. } => MarketKind::Totals,
            Self::Spreads { .. } => MarketKind::Spreads,
        }
    }

    /// Absolute line for totals and spreads.
    #[must_use]
    pub fn line(&self) -> Option<Decimal> {
        match self {
            Self::HeadToHead { .. } => None,
            Self::Totals { line } => Some(*line),
            Self::Spreads { home_line, .. } => Some(home_line.abs()),
        }
    }
}

impl fmt::Display for MarketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeadToHead { home, away } => write!(f, "h2h {away} @ {home}"),
            Self::Totals { line } => write!(f, "totals {}", line.normalize()),
            Self::Spreads {
                home, home_line, ..
            } => {
                let line = home_line.normalize();
                if home_line.is_sign_negative() {
                    write!(f, "spreads {home} {line}")
                } else {
                    write!(f, "spreads {home} +{line}")
                }
            }
        }
    }
}

/// One side of a canonical market as quoted by a single book.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeSide {
    pub label: String,
    pub price: AmericanOdds,
    pub point: Option<Decimal>,
}

impl OutcomeSide {
    pub fn new(label: impl Into<String>, price: AmericanOdds, point: Option<Decimal>) -> Self {
        Self {
            label: label.into(),
            price,
            point,
        }
    }
}

/// A book's listing after normalization: identity plus exactly two sides.
#[derive(Debug, Clone, PartialEq)]
pub struct Market {
    pub key: MarketKey,
    pub sides: [OutcomeSide; 2],
}

impl Market {
    pub fn new(key: MarketKey, sides: [OutcomeSide; 2]) -> Self {
        Self { key, sides }
    }

    #[must_use]
    pub const fn kind(&self) -> MarketKind {
        self.key.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn market_kind_parses_wire_keys() {
        assert_eq!("h2h".parse::<MarketKind>(), Ok(MarketKind::HeadToHead));
        assert_eq!("totals".parse::<MarketKind>(), Ok(MarketKind::Totals));
        assert_eq!("spreads".parse::<MarketKind>(), Ok(MarketKind::Spreads));
        assert!(matches!(
            "outrights".parse::<MarketKind>(),
            Err(DomainError::UnsupportedMarket { .. })
        ));
    }

    #[test]
    fn totals_keys_with_equal_lines_collide() {
        let mut keys = HashSet::new();
        keys.insert(MarketKey::Totals { line: dec!(220.5) });
        keys.insert(MarketKey::Totals { line: dec!(220.50) });
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn spreads_keys_distinguish_favorite() {
        let home_favored = MarketKey::Spreads {
            home: "Lakers".into(),
            away: "Celtics".into(),
            home_line: dec!(-6.5),
        };
        let home_underdog = MarketKey::Spreads {
            home: "Lakers".into(),
            away: "Celtics".into(),
            home_line: dec!(6.5),
        };
        assert_ne!(home_favored, home_underdog);
        assert_eq!(home_favored.line(), home_underdog.line());
    }

    #[test]
    fn display_is_human_readable() {
        let key = MarketKey::Spreads {
            home: "Lakers".into(),
            away: "Celtics".into(),
            home_line: dec!(6.5),
        };
        assert_eq!(key.to_string(), "spreads Lakers +6.5");
        assert_eq!(
            MarketKey::Totals { line: dec!(220.50) }.to_string(),
            "totals 220.5"
        );
    }

    #[test]
    fn key_serializes_with_type_tag() {
        let json = serde_json::to_value(MarketKey::HeadToHead {
            home: "A".into(),
            away: "B".into(),
        })
        .unwrap();
        assert_eq!(json["type"], "head_to_head");
        assert_eq!(json["home"], "A");
    }
}
