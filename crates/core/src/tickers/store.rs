//! Storage trait for tickers.

use async_trait::async_trait;

use crate::errors::Result;
use crate::tickers::Ticker;

/// Abstract interface for persisting discovered tickers.
///
/// Implementations must be duplicate-tolerant: saving a symbol that already
/// exists is ignored, never an error.
#[async_trait]
pub trait TickerStore: Send + Sync {
    /// Inserts the given tickers, skipping symbols that already exist.
    /// Returns the number of newly inserted rows.
    async fn save_all(&self, tickers: &[Ticker]) -> Result<usize>;

    /// Number of stored tickers.
    async fn count(&self) -> Result<i64>;

    /// Removes all stored tickers. Returns the number of rows deleted.
    ///
    /// Callers must delete dependent price history first; the schema
    /// enforces the foreign key.
    async fn delete_all(&self) -> Result<usize>;
}
