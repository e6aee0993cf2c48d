//! Shared progress and cancellation state.
//!
//! One `ProgressChannel` is shared between the HTTP layer and the ingestion
//! worker. The worker is the only writer during a run; the HTTP layer reads
//! snapshots and may raise the stop flag. Admission control lives here too:
//! claiming the run slot and resetting the state happen under one write
//! lock, so at most one run can ever be active.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Read-only snapshot of the channel, served by the progress endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub current: usize,
    pub total: usize,
    pub is_running: bool,
    pub messages: Vec<String>,
}

#[derive(Debug, Default)]
struct ProgressState {
    current_batch: usize,
    total_batches: usize,
    is_running: bool,
    start_idx: i64,
    messages: Vec<String>,
}

/// Shared, thread-visible ingestion progress plus the cooperative stop flag.
#[derive(Debug, Default)]
pub struct ProgressChannel {
    state: RwLock<ProgressState>,
    stop_requested: AtomicBool,
}

impl ProgressChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current progress; safe to call concurrently with a
    /// running worker. The message log is copied out, so consumers never
    /// observe a partially appended entry.
    pub fn snapshot(&self) -> ProgressReport {
        let state = self.state.read().unwrap();
        ProgressReport {
            current: state.current_batch,
            total: state.total_batches,
            is_running: state.is_running,
            messages: state.messages.clone(),
        }
    }

    /// Appends a log entry. Entries keep the exact order the worker
    /// produced them.
    pub fn push(&self, message: impl Into<String>) {
        self.state.write().unwrap().messages.push(message.into());
    }

    /// Records the 1-based ordinal of the batch being processed.
    /// Monotonically non-decreasing within a run.
    pub fn set_current_batch(&self, number: usize) {
        self.state.write().unwrap().current_batch = number;
    }

    /// The start offset the active (or last) run was planned from.
    pub fn start_idx(&self) -> i64 {
        self.state.read().unwrap().start_idx
    }

    /// Raises the cooperative stop flag. Idempotent; the worker polls it
    /// between units of work and winds down at the next poll point.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::SeqCst);
    }

    /// Whether a stop has been requested for the active run.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::SeqCst)
    }
}

/// RAII guard for the run slot; dropping it marks the run as finished.
#[must_use = "dropping the guard releases the run slot"]
pub struct RunGuard {
    channel: Arc<ProgressChannel>,
}

impl RunGuard {
    /// Claims the run slot and resets the channel for a new run.
    ///
    /// Returns `None` when a run is already active, leaving all state
    /// untouched. On success the stop flag is cleared, progress counters
    /// and the message log are reset, and the returned guard releases the
    /// slot when dropped - on every exit path of the worker, panics
    /// included. The check and the reset happen under one write lock, so
    /// racing start requests can never both be admitted.
    pub fn try_acquire(
        channel: &Arc<ProgressChannel>,
        start_idx: i64,
        total_batches: usize,
    ) -> Option<Self> {
        let mut state = channel.state.write().unwrap();
        if state.is_running {
            return None;
        }
        *state = ProgressState {
            current_batch: 0,
            total_batches,
            is_running: true,
            start_idx,
            messages: vec!["starting database update".to_string()],
        };
        channel.stop_requested.store(false, Ordering::SeqCst);
        drop(state);
        Some(Self {
            channel: Arc::clone(channel),
        })
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.channel.state.write().unwrap().is_running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_acquire_resets_state_and_marks_running() {
        let channel = Arc::new(ProgressChannel::new());
        channel.push("stale message");
        channel.request_stop();

        let guard = RunGuard::try_acquire(&channel, 10, 5).expect("slot should be free");

        let report = channel.snapshot();
        assert!(report.is_running);
        assert_eq!(report.current, 0);
        assert_eq!(report.total, 5);
        assert_eq!(report.messages, vec!["starting database update"]);
        assert_eq!(channel.start_idx(), 10);
        assert!(!channel.is_stop_requested());

        drop(guard);
    }

    #[test]
    fn second_acquire_is_rejected_while_running() {
        let channel = Arc::new(ProgressChannel::new());
        let guard = RunGuard::try_acquire(&channel, 0, 4).unwrap();
        channel.push("processing batch 1");

        assert!(RunGuard::try_acquire(&channel, 0, 1).is_none());

        // The rejected attempt must not have touched anything.
        let report = channel.snapshot();
        assert_eq!(report.total, 4);
        assert_eq!(
            report.messages,
            vec!["starting database update", "processing batch 1"]
        );

        drop(guard);
    }

    #[test]
    fn dropping_the_guard_releases_the_slot() {
        let channel = Arc::new(ProgressChannel::new());
        let guard = RunGuard::try_acquire(&channel, 0, 1).unwrap();
        assert!(channel.snapshot().is_running);

        drop(guard);
        assert!(!channel.snapshot().is_running);

        // The slot can be claimed again afterwards.
        let guard = RunGuard::try_acquire(&channel, 0, 2).unwrap();
        assert!(channel.snapshot().is_running);
        drop(guard);
    }

    #[test]
    fn request_stop_is_idempotent() {
        let channel = Arc::new(ProgressChannel::new());
        let guard = RunGuard::try_acquire(&channel, 0, 1).unwrap();

        assert!(!channel.is_stop_requested());
        channel.request_stop();
        channel.request_stop();
        assert!(channel.is_stop_requested());

        drop(guard);
    }

    #[test]
    fn messages_keep_append_order() {
        let channel = Arc::new(ProgressChannel::new());
        let guard = RunGuard::try_acquire(&channel, 0, 2).unwrap();
        channel.set_current_batch(1);
        channel.push("processing batch 1");
        channel.push("batch 1 complete");
        channel.set_current_batch(2);
        channel.push("processing batch 2");

        let report = channel.snapshot();
        assert_eq!(report.current, 2);
        assert_eq!(
            report.messages,
            vec![
                "starting database update",
                "processing batch 1",
                "batch 1 complete",
                "processing batch 2",
            ]
        );

        drop(guard);
    }
}
