//! Odds API response types.
//!
//! Events, bookmakers and markets are decoded leniently: one that fails to
//! decode is dropped on its own and the rest of the payload survives. Outcomes
//! are the exception. A market with any malformed outcome is dropped whole, so
//! the two-outcome check always sees the listing as the book published it.
//!
//! Example event:
//! ```json
//! {"id":"e1","sport_key":"basketball_nba","commence_time":"2024-01-01T00:00:00Z",
//!  "home_team":"Lakers","away_team":"Celtics",
//!  "bookmakers":[{"key":"fanduel","title":"FanDuel","markets":[
//!    {"key":"h2h","outcomes":[{"name":"Lakers","price":-140},{"name":"Celtics","price":120}]}]}]}
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use crate::domain::{AmericanOdds, BookQuote, Event, MarketQuote, OutcomeQuote, SportKey};

/// Decode a list, dropping elements that fail to decode. `null` is empty.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(err) => {
                debug!(error = %err, "Dropping malformed feed entry");
                None
            }
        })
        .collect())
}

/// Decode a list keeping one slot per element; a malformed element is `None`.
fn lenient_slots<'de, D, T>(deserializer: D) -> Result<Vec<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|value| serde_json::from_value(value).ok())
        .collect())
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiOutcome {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub point: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiMarket {
    pub key: Option<String>,
    #[serde(default, deserialize_with = "lenient_slots")]
    pub outcomes: Vec<Option<OddsApiOutcome>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiBookmaker {
    pub key: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub markets: Vec<OddsApiMarket>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiEvent {
    pub id: Option<String>,
    pub sport_key: Option<String>,
    pub commence_time: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub bookmakers: Vec<OddsApiBookmaker>,
}

/// American prices arrive as JSON numbers; only integral, nonzero values in
/// range are accepted.
fn american_price(raw: f64) -> Option<AmericanOdds> {
    if !raw.is_finite() || raw.fract() != 0.0 {
        return None;
    }
    if raw < f64::from(i32::MIN) || raw > f64::from(i32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    AmericanOdds::try_new(raw as i32).ok()
}

impl OddsApiOutcome {
    fn into_domain(self) -> Option<OutcomeQuote> {
        let name = self.name?;
        let price = american_price(self.price?)?;
        let point = match self.point {
            Some(point) => Some(Decimal::from_f64(point)?),
            None => None,
        };
        Some(OutcomeQuote::new(name, price, point))
    }
}

impl OddsApiMarket {
    fn into_domain(self) -> Option<MarketQuote> {
        let key = self.key?;
        let outcomes: Option<Vec<OutcomeQuote>> = self
            .outcomes
            .into_iter()
            .map(|slot| slot.and_then(OddsApiOutcome::into_domain))
            .collect();
        match outcomes {
            Some(outcomes) => Some(MarketQuote::new(key, outcomes)),
            None => {
                debug!(market = %key, "Dropping market with malformed outcome");
                None
            }
        }
    }
}

impl OddsApiBookmaker {
    fn into_domain(self) -> Option<BookQuote> {
        let book = self.title.or(self.key)?;
        let markets = self
            .markets
            .into_iter()
            .filter_map(OddsApiMarket::into_domain)
            .collect();
        Some(BookQuote::new(book, markets))
    }
}

impl OddsApiEvent {
    /// Convert to a domain event; `None` when the teams are missing.
    pub fn into_domain(self, sport: &SportKey) -> Option<Event> {
        let home_team = self.home_team?;
        let away_team = self.away_team?;
        let commence_time = self
            .commence_time
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|time| time.with_timezone(&Utc));
        let bookmakers = self
            .bookmakers
            .into_iter()
            .filter_map(OddsApiBookmaker::into_domain)
            .collect();

        let mut event = Event::new(
            self.sport_key.map_or_else(|| sport.clone(), SportKey::from),
            home_team,
            away_team,
            bookmakers,
        );
        event.id = self.id.unwrap_or_default();
        event.commence_time = commence_time;
        Some(event)
    }
}

/// Decode a feed response body for one sport.
///
/// A body that is not a JSON array means "no events" for that sport.
pub fn decode_events(body: serde_json::Value, sport: &SportKey) -> Vec<Event> {
    let serde_json::Value::Array(items) = body else {
        warn!(sport = %sport, "Feed response is not a list, treating as no events");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<OddsApiEvent>(item) {
            Ok(raw) => raw.into_domain(sport).or_else(|| {
                debug!(sport = %sport, "Dropping event without teams");
                None
            }),
            Err(err) => {
                debug!(sport = %sport, error = %err, "Dropping malformed event");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ArbitrageDetector;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn nba() -> SportKey {
        SportKey::from("basketball_nba")
    }

    #[test]
    fn decodes_full_event() {
        let body = json!([{
            "id": "abc",
            "sport_key": "basketball_nba",
            "commence_time": "2024-03-01T00:10:00Z",
            "home_team": "Lakers",
            "away_team": "Celtics",
            "bookmakers": [{
                "key": "fanduel",
                "title": "FanDuel",
                "markets": [
                    {"key": "h2h", "outcomes": [
                        {"name": "Lakers", "price": -140},
                        {"name": "Celtics", "price": 120}
                    ]},
                    {"key": "totals", "outcomes": [
                        {"name": "Over", "price": -110, "point": 220.5},
                        {"name": "Under", "price": -110, "point": 220.5}
                    ]}
                ]
            }]
        }]);

        let events = decode_events(body, &nba());
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.id, "abc");
        assert!(event.commence_time.is_some());
        assert_eq!(event.bookmakers[0].book.as_str(), "FanDuel");
        assert_eq!(event.bookmakers[0].markets.len(), 2);
        assert_eq!(event.bookmakers[0].markets[1].outcomes[0].point, Some(dec!(220.5)));
    }

    #[test]
    fn non_list_body_is_no_events() {
        let body = json!({"message": "Invalid API key"});
        assert!(decode_events(body, &nba()).is_empty());
    }

    #[test]
    fn malformed_outcome_drops_whole_market() {
        let body = json!([{
            "home_team": "Lakers",
            "away_team": "Celtics",
            "bookmakers": [{
                "title": "FanDuel",
                "markets": [
                    {"key": "h2h", "outcomes": [
                        {"name": "Lakers", "price": "bad"},
                        {"name": "Celtics", "price": 120},
                        {"name": "Lakers", "price": 0}
                    ]},
                    {"key": "totals", "outcomes": [
                        {"name": "Over", "price": -110, "point": 220.5},
                        {"name": "Under", "price": -110, "point": 220.5}
                    ]}
                ]
            }]
        }]);

        let events = decode_events(body, &nba());
        let markets = &events[0].bookmakers[0].markets;
        assert_eq!(markets.len(), 1);
        assert_eq!(markets[0].key, "totals");
    }

    #[test]
    fn three_way_market_with_unpriced_draw_is_not_an_arbitrage() {
        let book = |title: &str, home: i32, away: i32| {
            json!({
                "title": title,
                "markets": [{"key": "h2h", "outcomes": [
                    {"name": "Arsenal", "price": home},
                    {"name": "Chelsea", "price": away},
                    {"name": "Draw", "price": null}
                ]}]
            })
        };
        let body = json!([{
            "id": "epl-1",
            "home_team": "Arsenal",
            "away_team": "Chelsea",
            "bookmakers": [book("X", 110, -300), book("Y", -300, 105)]
        }]);

        let events = decode_events(body, &SportKey::from("soccer_epl"));
        assert_eq!(events.len(), 1);
        assert!(events[0].bookmakers.iter().all(|book| book.markets.is_empty()));
        assert!(ArbitrageDetector::default().detect(&events[0]).is_empty());
    }

    #[test]
    fn event_without_teams_is_dropped() {
        let body = json!([
            {"away_team": "Celtics", "bookmakers": []},
            {"home_team": "Knicks", "away_team": "Nets", "bookmakers": null}
        ]);
        let events = decode_events(body, &nba());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].home_team, "Knicks");
        assert!(events[0].bookmakers.is_empty());
        assert_eq!(events[0].sport, nba());
    }

    #[test]
    fn bookmaker_without_name_is_dropped() {
        let body = json!([{
            "home_team": "Lakers",
            "away_team": "Celtics",
            "bookmakers": [
                {"markets": []},
                {"key": "pinnacle", "markets": "not a list"},
                {"key": "betmgm", "markets": []}
            ]
        }]);
        let events = decode_events(body, &nba());
        let books: Vec<&str> = events[0].bookmakers.iter().map(|b| b.book.as_str()).collect();
        assert_eq!(books, vec!["betmgm"]);
    }

    #[test]
    fn fractional_price_is_rejected() {
        assert!(american_price(-110.5).is_none());
        assert!(american_price(f64::NAN).is_none());
        assert_eq!(american_price(-110.0).map(AmericanOdds::value), Some(-110));
    }
}
