//! Ingestion-specific error types.

use thiserror::Error;

/// Errors surfaced by the ingestion controller's admission layer.
///
/// Faults inside a running ingestion pass are not represented here; they
/// are contained per unit of work or end the run as FAILED via the root
/// error type.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum IngestionError {
    /// A second start request arrived while a run was active. The request
    /// is rejected without touching progress state.
    #[error("an ingestion run is already in progress")]
    AlreadyRunning,
}
