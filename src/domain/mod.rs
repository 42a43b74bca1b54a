//! Book-agnostic domain types.
//!
//! Everything here is pure data plus the arithmetic that belongs to it:
//! odds conversion, market identity, quotes, opportunities and stake sizing.
//! No I/O happens in this module.

pub mod error;
pub mod event;
pub mod id;
pub mod market;
pub mod odds;
pub mod opportunity;
pub mod quote;
pub mod stake;

pub use error::DomainError;
pub use event::{BookQuote, Event, MarketQuote, OutcomeQuote};
pub use id::{BookName, SportKey};
pub use market::{Market, MarketKey, MarketKind, OutcomeSide};
pub use odds::AmericanOdds;
pub use opportunity::{ArbitrageOpportunity, OpportunityLeg};
pub use quote::BestQuote;
pub use stake::{stake_split, StakeSplit};
