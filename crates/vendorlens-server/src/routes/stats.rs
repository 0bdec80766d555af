//! Health and counter routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .route("/stats", get(get_stats))
}

/// GET /api/health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/stats: request counters since startup.
async fn get_stats(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let stats = state.stats.read().clone();
    let uptime = chrono::Utc::now() - state.started_at;

    Json(serde_json::json!({
        "analyses": stats.analyses,
        "rejectedSubmissions": stats.rejected_submissions,
        "summaries": stats.summaries,
        "exports": stats.exports,
        "forwardRequests": stats.forward_requests,
        "uptimeSeconds": uptime.num_seconds(),
        "simulatedLatencyMs": state.config.simulated_latency_ms,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendorlens_core::VendorLensConfig;

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "ok");
        assert!(body["version"].is_string());
    }

    #[tokio::test]
    async fn test_stats_reflect_counters() {
        let state = Arc::new(AppState::new(VendorLensConfig::default()));
        state.stats.write().analyses = 3;
        state.stats.write().exports = 1;

        let Json(body) = get_stats(State(state)).await;
        assert_eq!(body["analyses"], 3);
        assert_eq!(body["exports"], 1);
        assert_eq!(body["rejectedSubmissions"], 0);
        assert!(body["uptimeSeconds"].as_i64().unwrap() >= 0);
    }
}
