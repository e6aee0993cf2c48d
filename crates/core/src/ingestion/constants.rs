//! Ingestion tuning constants.

use std::time::Duration;

/// Number of candidate codes probed per batch.
pub const BATCH_SIZE: i64 = 5;

/// Default probe range applied when a start request carries no range or a
/// malformed one.
pub const DEFAULT_START_IDX: i64 = 0;
pub const DEFAULT_TOTAL_STOCKS: i64 = 20;

/// Trailing window of daily history fetched per discovered ticker.
pub const HISTORY_WINDOW_DAYS: i64 = 180;

/// Courtesy pause between batches, keeping probe traffic friendly toward
/// the upstream quote service.
pub const BATCH_PACING: Duration = Duration::from_secs(1);

/// Courtesy pause between per-ticker history fetches.
pub const HISTORY_PACING: Duration = Duration::from_millis(500);

/// Exchange suffix for Taiwan-listed symbols.
pub const TAIWAN_SUFFIX: &str = ".TW";
