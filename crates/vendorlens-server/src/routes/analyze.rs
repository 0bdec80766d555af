//! Thread analysis and summary panel routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{debug, warn};
use vendorlens_export::{require_record, summary_panels};
use vendorlens_extract::{extract, validate_submission, VendorRecord};

use super::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/summary", post(summary))
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub content: String,
}

/// Body shared by routes that operate on an existing analysis result.
#[derive(Debug, Deserialize)]
pub struct RecordRequest {
    #[serde(default)]
    pub record: Option<VendorRecord>,
}

/// POST /api/analyze: extract a vendor record from a pasted thread.
async fn analyze(State(state): State<Arc<AppState>>, Json(req): Json<AnalyzeRequest>) -> Response {
    let content = match validate_submission(&req.content) {
        Ok(text) => text.to_string(),
        Err(e) => {
            state.stats.write().rejected_submissions += 1;
            return error_response(&e).into_response();
        }
    };

    if let Some(delay) = state.config.simulated_latency() {
        debug!(?delay, "Simulating analysis latency");
        tokio::time::sleep(delay).await;
    }

    match tokio::task::spawn_blocking(move || extract(&content)).await {
        Ok(record) => {
            state.stats.write().analyses += 1;
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(e) => {
            warn!("Extraction task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": format!("Analysis failed: {}", e) })),
            )
                .into_response()
        }
    }
}

/// POST /api/summary: display panels for a previously analyzed record.
async fn summary(State(state): State<Arc<AppState>>, Json(req): Json<RecordRequest>) -> Response {
    match require_record(req.record.as_ref()) {
        Ok(record) => {
            state.stats.write().summaries += 1;
            Json(serde_json::json!({ "panels": summary_panels(record) })).into_response()
        }
        Err(e) => error_response(&e).into_response(),
    }
}
