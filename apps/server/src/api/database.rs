//! Database inspection endpoints.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::error::ApiResult;
use crate::main_lib::AppState;

#[derive(Serialize)]
struct MessagesResponse {
    messages: Vec<String>,
}

/// Summarize the persisted state: empty, or last ingested symbol and how
/// stale its history is.
async fn database_status(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessagesResponse>> {
    let messages = state.ingestion_service.database_status().await?;
    Ok(Json(MessagesResponse { messages }))
}

/// Delete everything ingested so far.
async fn delete_database(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessagesResponse>> {
    let messages = state.ingestion_service.purge().await?;
    Ok(Json(MessagesResponse { messages }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/database/status", post(database_status))
        .route("/database/delete", post(delete_database))
}
