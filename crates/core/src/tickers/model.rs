//! Domain model for discovered tickers.

use serde::{Deserialize, Serialize};

/// An exchange-qualified stock symbol, e.g. `2330.TW`.
///
/// Validity is determined by the market data capability, not structurally;
/// anything stored here has already been probed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    pub symbol: String,
}

impl Ticker {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}
