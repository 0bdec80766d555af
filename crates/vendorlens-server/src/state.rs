//! Shared application state.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use vendorlens_core::VendorLensConfig;

/// Per-process request counters. Records themselves are never kept.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStats {
    pub analyses: u64,
    pub rejected_submissions: u64,
    pub summaries: u64,
    pub exports: u64,
    pub forward_requests: u64,
}

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: VendorLensConfig,
    pub stats: RwLock<RequestStats>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: VendorLensConfig) -> Self {
        Self {
            config,
            stats: RwLock::new(RequestStats::default()),
            started_at: Utc::now(),
        }
    }
}
