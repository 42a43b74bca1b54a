//! Best-price selection across books.
//!
//! For each canonical market of one event, keeps the highest American price
//! per outcome label and the book that offered it. State lives only as long
//! as the event being processed.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{BestQuote, BookName, Market, MarketKey, OutcomeSide};

/// Best quotes for one market identity, in first-seen label order.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketBook {
    key: MarketKey,
    sides: Vec<BestQuote>,
}

impl MarketBook {
    fn new(key: MarketKey) -> Self {
        Self {
            key,
            sides: Vec::with_capacity(2),
        }
    }

    pub fn key(&self) -> &MarketKey {
        &self.key
    }

    pub fn sides(&self) -> &[BestQuote] {
        &self.sides
    }

    /// Best quote for a label, if any book has priced it.
    pub fn side(&self, label: &str) -> Option<&BestQuote> {
        self.sides.iter().find(|quote| quote.label == label)
    }

    fn offer(&mut self, book: &BookName, side: OutcomeSide) {
        match self.sides.iter_mut().find(|quote| quote.label == side.label) {
            Some(best) => {
                if best.improve(side.price, book, side.point) {
                    trace!(book = %book, label = %side.label, price = %side.price, "New best price");
                }
            }
            None => self
                .sides
                .push(BestQuote::new(side.label, side.price, book.clone(), side.point)),
        }
    }
}

/// Per-event accumulator of best prices, keyed by market identity.
///
/// Markets keep the order in which they were first seen so that output is
/// deterministic for a given feed response.
#[derive(Debug, Default)]
pub struct BestPriceBook {
    index: HashMap<MarketKey, usize>,
    markets: Vec<MarketBook>,
}

impl BestPriceBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one book's canonical market.
    ///
    /// Sides priced beyond `max_abs_odds` in either direction are dropped
    /// before comparison.
    pub fn offer(&mut self, book: &BookName, market: Market, max_abs_odds: u32) {
        let slot = match self.index.get(&market.key) {
            Some(&slot) => slot,
            None => {
                let slot = self.markets.len();
                self.index.insert(market.key.clone(), slot);
                self.markets.push(MarketBook::new(market.key.clone()));
                slot
            }
        };

        let entry = &mut self.markets[slot];
        for side in market.sides {
            if side.price.magnitude() > max_abs_odds {
                trace!(book = %book, label = %side.label, price = %side.price, "Price beyond odds ceiling");
                continue;
            }
            entry.offer(book, side);
        }
    }

    /// Best quotes for one market identity.
    pub fn get(&self, key: &MarketKey) -> Option<&MarketBook> {
        self.index.get(key).map(|&slot| &self.markets[slot])
    }

    pub fn markets(&self) -> &[MarketBook] {
        &self.markets
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}
