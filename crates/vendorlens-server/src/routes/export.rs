//! Spreadsheet download route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;
use vendorlens_export::{build_sheets, export_filename, render_xlsx, require_record};

use super::analyze::RecordRequest;
use super::error_response;
use crate::state::AppState;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/export", post(export))
}

/// POST /api/export: four-sheet workbook for the submitted record.
async fn export(State(state): State<Arc<AppState>>, Json(req): Json<RecordRequest>) -> Response {
    let record = match require_record(req.record.as_ref()) {
        Ok(record) => record,
        Err(e) => return error_response(&e).into_response(),
    };

    let today = chrono::Local::now().date_naive();
    let bytes = match render_xlsx(&build_sheets(record, today)) {
        Ok(bytes) => bytes,
        Err(e) => return error_response(&e).into_response(),
    };

    let filename = export_filename(&record.vendor_name);
    info!(file = %filename, bytes = bytes.len(), "Serving workbook");
    state.stats.write().exports += 1;

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use vendorlens_core::VendorLensConfig;
    use vendorlens_extract::extract;

    #[tokio::test]
    async fn test_export_serves_workbook() {
        let state = Arc::new(AppState::new(VendorLensConfig::default()));
        let record = extract("From: Acme Aluminum <sales@acme.test>\nLead time is 3 weeks.");

        let resp = export(
            State(state.clone()),
            Json(RecordRequest {
                record: Some(record),
            }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], XLSX_MIME);
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"AcmeAluminum_summary.xlsx\""
        );
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..2], b"PK");
        assert_eq!(state.stats.read().exports, 1);
    }

    #[tokio::test]
    async fn test_export_without_record() {
        let state = Arc::new(AppState::new(VendorLensConfig::default()));
        let resp = export(State(state.clone()), Json(RecordRequest { record: None })).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.stats.read().exports, 0);
    }
}
