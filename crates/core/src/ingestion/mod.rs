//! Batch ingestion of Taiwan-listed tickers and their price history.
//!
//! This module is the center of the application:
//!
//! - [`planner`] - pure batch-slicing arithmetic over the candidate space
//! - [`range`] - parsing of user-supplied probe ranges
//! - [`progress`] - shared progress/cancellation state between the worker
//!   and the HTTP layer
//! - [`validator`] - probing candidate symbols against the market data
//!   capability
//! - [`export`] - CSV export of discovered symbols
//! - [`service`] - the ingestion controller driving all of the above
//!
//! The controller runs as a single background task per run; the HTTP layer
//! communicates with it only through the [`progress::ProgressChannel`].

pub mod constants;
pub mod errors;
pub mod export;
pub mod planner;
pub mod progress;
pub mod range;
pub mod service;
pub mod validator;


pub use constants::*;
pub use errors::IngestionError;
pub use planner::{batch_bounds, total_batches, Batch, BatchPlan};
pub use progress::{ProgressChannel, ProgressReport, RunGuard};
pub use range::RunRange;
pub use service::{IngestionConfig, IngestionService, RunOutcome};
pub use validator::{format_ticker, TickerValidator};
