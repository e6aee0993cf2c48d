//! Provider-level quote model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar as returned by a market data provider.
///
/// Timestamps are UTC; daily bars carry the exchange's session timestamp.
/// Prices are plain floats and volume a signed integer, matching the
/// persisted schema downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl Quote {
    /// Whether the bar carries a usable market price.
    pub fn has_market_price(&self) -> bool {
        self.close.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bar(close: f64) -> Quote {
        Quote {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 8, 0, 0, 0).unwrap(),
            open: 100.0,
            high: 101.5,
            low: 99.0,
            close,
            volume: 12_345,
        }
    }

    #[test]
    fn finite_close_has_market_price() {
        assert!(bar(100.5).has_market_price());
    }

    #[test]
    fn nan_close_has_no_market_price() {
        assert!(!bar(f64::NAN).has_market_price());
    }
}
