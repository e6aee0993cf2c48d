//! Market data provider trait definition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new quote source. Callers only
/// ever see a symbol going in and quote data (or a typed error) coming out.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// A constant string like "YAHOO", used in logs and error payloads.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a symbol.
    ///
    /// Returns the most recent bar on success. A symbol that does not
    /// resolve to a live instrument yields
    /// [`MarketDataError::SymbolNotFound`].
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Fetch historical quotes for a symbol over `[start, end]`.
    ///
    /// Quotes are ordered by timestamp ascending. A known symbol with no
    /// bars in the window yields [`MarketDataError::NoDataForRange`].
    async fn get_historical_quotes(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Quote>, MarketDataError>;
}
