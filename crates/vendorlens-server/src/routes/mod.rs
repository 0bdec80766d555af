//! HTTP route handlers.

pub mod analyze;
pub mod export;
pub mod forward;
pub mod stats;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use vendorlens_core::Error;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(stats::routes())
        .merge(analyze::routes())
        .merge(export::routes())
        .merge(forward::routes())
}

/// JSON error body with a status derived from the error kind.
pub(crate) fn error_response(err: &Error) -> (StatusCode, Json<serde_json::Value>) {
    let status = match err {
        Error::EmptyInput | Error::MissingRecord => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}
