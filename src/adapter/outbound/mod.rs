//! Outbound adapters implement the feed port.

pub mod file;
pub mod oddsapi;
