//! Batch planning over the numeric candidate space.
//!
//! Pure arithmetic, no side effects: given a resumable start offset, a
//! total candidate count and a batch size, produce the ordered index
//! ranges the controller probes.

/// Number of batches needed to cover `total_stocks` candidates.
///
/// `ceil(total_stocks / batch_size)`; zero for degenerate (non-positive)
/// totals.
pub fn total_batches(total_stocks: i64, batch_size: i64) -> usize {
    debug_assert!(batch_size > 0);
    if total_stocks <= 0 {
        return 0;
    }
    ((total_stocks + batch_size - 1) / batch_size) as usize
}

/// Index bounds `[range_start, range_end)` of the 0-indexed batch `index`.
///
/// The end is clipped to the overall candidate space, so a batch past the
/// point of exhaustion comes out with `range_start >= range_end` - an empty
/// range that yields no candidates.
pub fn batch_bounds(
    start_idx: i64,
    total_stocks: i64,
    batch_size: i64,
    index: usize,
) -> (i64, i64) {
    let range_start = start_idx + index as i64 * batch_size;
    let range_end = (range_start + batch_size).min(start_idx + total_stocks);
    (range_start, range_end)
}

/// One contiguous slice of the candidate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    /// 1-based ordinal, as reported to the progress channel.
    pub number: usize,
    /// First candidate index, inclusive.
    pub range_start: i64,
    /// One past the last candidate index.
    pub range_end: i64,
}

impl Batch {
    /// Candidate indices covered by this batch; empty when the batch lies
    /// beyond exhaustion.
    pub fn candidates(&self) -> impl Iterator<Item = i64> {
        self.range_start..self.range_end
    }

    pub fn len(&self) -> usize {
        (self.range_end - self.range_start).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.range_start >= self.range_end
    }
}

/// The ordered sequence of batches covering
/// `[start_idx, start_idx + total_stocks)`.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    batches: Vec<Batch>,
}

impl BatchPlan {
    pub fn new(start_idx: i64, total_stocks: i64, batch_size: i64) -> Self {
        let batches = (0..total_batches(total_stocks, batch_size))
            .map(|i| {
                let (range_start, range_end) =
                    batch_bounds(start_idx, total_stocks, batch_size, i);
                Batch {
                    number: i + 1,
                    range_start,
                    range_end,
                }
            })
            .collect();
        Self { batches }
    }

    pub fn total_batches(&self) -> usize {
        self.batches.len()
    }

    pub fn batches(&self) -> impl Iterator<Item = &Batch> {
        self.batches.iter()
    }
}
