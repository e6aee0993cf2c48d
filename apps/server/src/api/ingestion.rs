//! Ingestion run endpoints: start, progress, stop.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use twstock_core::errors::Error;
use twstock_core::ingestion::{IngestionError, ProgressReport, RunRange};

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct StartRequest {
    /// Probe range as `"start-end"` or a bare total. Missing or malformed
    /// input falls back to the default range.
    range: Option<String>,
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    message: String,
}

/// Start an ingestion run on the background worker.
///
/// A start while a run is active is a user-facing error outcome, not a
/// server fault: the response stays 200 with `status: "error"`.
async fn start_ingestion(
    State(state): State<Arc<AppState>>,
    body: Option<Json<StartRequest>>,
) -> ApiResult<Json<StatusResponse>> {
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let range = request
        .range
        .as_deref()
        .map(RunRange::parse)
        .unwrap_or_default();

    match state.ingestion_service.start(range) {
        Ok(()) => Ok(Json(StatusResponse {
            status: "started",
            message: "batch update started".to_string(),
        })),
        Err(Error::Ingestion(IngestionError::AlreadyRunning)) => Ok(Json(StatusResponse {
            status: "error",
            message: "an ingestion run is already in progress".to_string(),
        })),
        Err(e) => Err(e.into()),
    }
}

/// Snapshot of the active (or last) run's progress.
async fn get_progress(State(state): State<Arc<AppState>>) -> Json<ProgressReport> {
    Json(state.progress.snapshot())
}

/// Request cooperative cancellation of the active run.
async fn stop_ingestion(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    state.progress.request_stop();
    Json(StatusResponse {
        status: "stopped",
        message: "stop signal sent".to_string(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ingestion/start", post(start_ingestion))
        .route("/ingestion/progress", get(get_progress))
        .route("/ingestion/stop", post(stop_ingestion))
}
