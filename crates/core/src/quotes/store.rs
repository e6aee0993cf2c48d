//! Storage trait for price history.

use async_trait::async_trait;

use crate::errors::Result;
use crate::quotes::PriceBar;

/// Abstract interface for persisting and querying price history.
///
/// Implementations must be duplicate-safe: saving a bar for a
/// `(symbol, date)` pair that already exists refreshes the row instead of
/// inserting a second one.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Upserts the given bars. Returns the number of rows written.
    async fn save_bars(&self, bars: &[PriceBar]) -> Result<usize>;

    /// The most recently ingested bar, if any.
    async fn latest_bar(&self) -> Result<Option<PriceBar>>;

    /// Number of stored bars.
    async fn count(&self) -> Result<i64>;

    /// Removes all stored bars. Returns the number of rows deleted.
    async fn delete_all(&self) -> Result<usize>;
}
