//! twstock web server: thin HTTP glue over the ingestion core.
//!
//! The route layer never drives the ingestion worker directly; it talks to
//! the `IngestionService` for admission and to the shared progress channel
//! for reporting and cancellation.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use api::app_router;
pub use config::Config;
pub use main_lib::{build_state, init_tracing, AppState};
