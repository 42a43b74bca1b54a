//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! ```
//! use oddsarb::domain::error::DomainError;
//! use oddsarb::domain::odds::AmericanOdds;
//!
//! let result = AmericanOdds::try_new(0);
//! assert!(matches!(result, Err(DomainError::ZeroOdds)));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// American odds of zero have no meaning.
    #[error("american odds cannot be zero")]
    ZeroOdds,

    /// American odds outside the representable range.
    #[error("american odds out of range: {value}")]
    OddsOutOfRange {
        /// The rejected raw value.
        value: i64,
    },

    /// Unknown market key on the wire.
    #[error("unsupported market key: {key}")]
    UnsupportedMarket {
        /// The key that was received.
        key: String,
    },
}
