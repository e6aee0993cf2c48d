//! Parsing of user-supplied probe ranges.

use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_START_IDX, DEFAULT_TOTAL_STOCKS};

/// The slice of the candidate code space an ingestion run covers.
///
/// `total_stocks` can come out non-positive from inputs like `"10-5"`; the
/// planner treats those as degenerate and produces an empty plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRange {
    pub start_idx: i64,
    pub total_stocks: i64,
}

impl RunRange {
    /// The fallback range used for missing or malformed input.
    pub const fn default_range() -> Self {
        Self {
            start_idx: DEFAULT_START_IDX,
            total_stocks: DEFAULT_TOTAL_STOCKS,
        }
    }

    /// Parses `"N-M"` as start `N`, total `M-N`, and a bare integer `"M"`
    /// as start `0`, total `M`. Anything else falls back to the default
    /// range rather than failing the request.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if let Some((start, end)) = input.split_once('-') {
            if let (Ok(start_idx), Ok(end_idx)) =
                (start.trim().parse::<i64>(), end.trim().parse::<i64>())
            {
                return Self {
                    start_idx,
                    total_stocks: end_idx - start_idx,
                };
            }
        } else if let Ok(end_idx) = input.parse::<i64>() {
            return Self {
                start_idx: 0,
                total_stocks: end_idx,
            };
        }
        Self::default_range()
    }
}

impl Default for RunRange {
    fn default() -> Self {
        Self::default_range()
    }
}
