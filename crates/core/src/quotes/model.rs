//! Domain model for persisted price history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use twstock_market_data::Quote;

/// One persisted OHLCV bar for a ticker.
///
/// `symbol` references a [`crate::tickers::Ticker`] that must already exist
/// in the store; bars are keyed by `(symbol, date)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBar {
    pub symbol: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl PriceBar {
    /// Builds a bar from a provider quote for `symbol`.
    pub fn from_quote(symbol: &str, quote: Quote) -> Self {
        Self {
            symbol: symbol.to_string(),
            date: quote.timestamp.date_naive(),
            open: quote.open,
            high: quote.high,
            low: quote.low,
            close: quote.close,
            volume: quote.volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn from_quote_uses_the_session_date() {
        let quote = Quote {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 3, 5, 30, 0).unwrap(),
            open: 560.0,
            high: 568.0,
            low: 555.0,
            close: 566.0,
            volume: 31_415_926,
        };

        let bar = PriceBar::from_quote("2330.TW", quote);
        assert_eq!(bar.symbol, "2330.TW");
        assert_eq!(bar.date, NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert_eq!(bar.close, 566.0);
        assert_eq!(bar.volume, 31_415_926);
    }
}
