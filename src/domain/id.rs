//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sportsbook name as reported by the feed (e.g. "DraftKings").
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookName(String);

impl BookName {
    /// Create a new `BookName` from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the book name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BookName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for BookName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Sport category key used by the feed (e.g. "basketball_nba").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SportKey(String);

impl SportKey {
    /// Create a new `SportKey` from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the sport key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SportKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SportKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
