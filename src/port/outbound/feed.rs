//! Odds feed port.
//!
//! A feed returns every event it currently lists for one sport. Decoding
//! noise is absorbed by the adapter; only transport-level problems surface as
//! errors, and those affect a single sport.

use async_trait::async_trait;

use crate::domain::{Event, SportKey};
use crate::error::Result;

/// Source of per-sport event snapshots.
#[async_trait]
pub trait OddsFeed: Send + Sync {
    /// Fetch all events currently quoted for a sport.
    ///
    /// An unexpected but well-formed response (e.g. not a list) yields an
    /// empty vector rather than an error.
    async fn fetch_events(&self, sport: &SportKey) -> Result<Vec<Event>>;

    /// Feed name for logging.
    fn name(&self) -> &'static str;
}
