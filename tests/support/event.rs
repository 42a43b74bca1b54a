use oddsarb::domain::{AmericanOdds, BookQuote, Event, MarketQuote, OutcomeQuote};
use rust_decimal::Decimal;

pub const HOME: &str = "Lakers";
pub const AWAY: &str = "Celtics";

pub fn odds(value: i32) -> AmericanOdds {
    AmericanOdds::try_new(value).expect("nonzero odds")
}

pub fn outcome(name: &str, price: i32, point: Option<Decimal>) -> OutcomeQuote {
    OutcomeQuote::new(name, odds(price), point)
}

pub fn h2h(home_price: i32, away_price: i32) -> MarketQuote {
    MarketQuote::new(
        "h2h",
        vec![
            outcome(HOME, home_price, None),
            outcome(AWAY, away_price, None),
        ],
    )
}

pub fn totals(line: Decimal, over: i32, under: i32) -> MarketQuote {
    MarketQuote::new(
        "totals",
        vec![
            outcome("Over", over, Some(line)),
            outcome("Under", under, Some(line)),
        ],
    )
}

pub fn spreads(home_line: Decimal, home_price: i32, away_line: Decimal, away_price: i32) -> MarketQuote {
    MarketQuote::new(
        "spreads",
        vec![
            outcome(HOME, home_price, Some(home_line)),
            outcome(AWAY, away_price, Some(away_line)),
        ],
    )
}

pub fn book(name: &str, markets: Vec<MarketQuote>) -> BookQuote {
    BookQuote::new(name, markets)
}

pub fn nba_event(bookmakers: Vec<BookQuote>) -> Event {
    let mut event = Event::new("basketball_nba", HOME, AWAY, bookmakers);
    event.id = "evt-1".to_string();
    event
}
