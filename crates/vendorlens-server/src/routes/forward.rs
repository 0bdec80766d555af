//! Email-forwarding workflow route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;
use vendorlens_extract::describe_forwarding_workflow;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/forward", post(forward))
}

#[derive(Debug, Deserialize)]
pub struct ForwardRequest {
    #[serde(default)]
    pub address: String,
}

/// POST /api/forward: explain where to forward a thread. Nothing is sent.
async fn forward(State(state): State<Arc<AppState>>, Json(req): Json<ForwardRequest>) -> Response {
    let address = req.address.trim();
    if address.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Email address is required" })),
        )
            .into_response();
    }

    info!(%address, "Forwarding workflow requested");
    state.stats.write().forward_requests += 1;

    Json(serde_json::json!({
        "message": describe_forwarding_workflow(&state.config.forward_address),
        "forwardTo": state.config.forward_address,
        "replyTo": address,
    }))
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use vendorlens_core::VendorLensConfig;

    #[tokio::test]
    async fn test_forward_describes_workflow() {
        let state = Arc::new(AppState::new(VendorLensConfig::default()));
        let resp = forward(
            State(state.clone()),
            Json(ForwardRequest {
                address: " buyer@example.com ".into(),
            }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["replyTo"], "buyer@example.com");
        assert_eq!(body["forwardTo"], "vendor-analysis@example.com");
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("vendor-analysis@example.com"));
        assert_eq!(state.stats.read().forward_requests, 1);
    }

    #[tokio::test]
    async fn test_forward_requires_address() {
        let state = Arc::new(AppState::new(VendorLensConfig::default()));
        let resp = forward(State(state), Json(ForwardRequest { address: "".into() })).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
