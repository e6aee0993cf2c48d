//! Candidate symbol validation against the market data capability.

use std::sync::Arc;

use log::{debug, warn};
use twstock_market_data::MarketDataProvider;

use super::constants::TAIWAN_SUFFIX;

/// Formats a raw candidate index as an exchange-qualified symbol,
/// e.g. `23` becomes `"0023.TW"`.
pub fn format_ticker(index: i64) -> String {
    format!("{:04}{}", index, TAIWAN_SUFFIX)
}

/// Probes candidate symbols for tradability.
///
/// A pure query over the market data capability: no state, no side effects
/// beyond diagnostics. Provider failures never propagate out of
/// [`is_valid`](Self::is_valid); every outcome collapses to a boolean.
pub struct TickerValidator {
    provider: Arc<dyn MarketDataProvider>,
}

impl TickerValidator {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Whether `symbol` resolves to a live instrument with a usable price.
    ///
    /// Symbol misses are the expected outcome for most of the candidate
    /// space and are only debug-logged; any other capability fault is
    /// warn-logged. Both classify as "not valid".
    pub async fn is_valid(&self, symbol: &str) -> bool {
        match self.provider.get_latest_quote(symbol).await {
            Ok(quote) => quote.has_market_price(),
            Err(e) if e.is_symbol_miss() => {
                debug!("{} is not a listed instrument: {}", symbol, e);
                false
            }
            Err(e) => {
                warn!("quote lookup for {} failed: {}", symbol, e);
                false
            }
        }
    }
}
