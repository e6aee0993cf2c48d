//! HTTP route modules.

pub mod database;
pub mod ingestion;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

/// Builds the full API router.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(ingestion::router())
                .merge(database::router()),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
