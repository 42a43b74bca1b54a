use rust_decimal::Decimal;

use super::id::BookName;
use super::odds::AmericanOdds;

/// Best price seen so far for one outcome of one market, and who offered it.
#[derive(Debug, Clone, PartialEq)]
pub struct BestQuote {
    pub label: String,
    pub price: AmericanOdds,
    pub book: BookName,
    pub point: Option<Decimal>,
}

impl BestQuote {
    pub fn new(
        label: impl Into<String>,
        price: AmericanOdds,
        book: BookName,
        point: Option<Decimal>,
    ) -> Self {
        Self {
            label: label.into(),
            price,
            book,
            point,
        }
    }

    /// Take the incoming quote only if it is strictly better.
    ///
    /// Returns true when the stored quote changed. Ties keep the first book.
    pub fn improve(&mut self, price: AmericanOdds, book: &BookName, point: Option<Decimal>) -> bool {
        if price <= self.price {
            return false;
        }
        self.price = price;
        self.book = book.clone();
        self.point = point;
        true
    }
}
