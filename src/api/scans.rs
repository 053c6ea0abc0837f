//! Verification scan API endpoint.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::{ScanRequest, ScanResponse};
use crate::AppState;

/// POST /api/scan - Record a verification scan against a member.
///
/// Only this explicit verification path logs scans; fuzzy search and the
/// directory listing never do.
pub async fn record_scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> ApiResult<ScanResponse> {
    state
        .repo
        .record_scan(&request.id_number, request.scanner_info.as_deref())
        .await?;

    tracing::debug!("Recorded scan for {}", request.id_number);
    Ok(Json(ScanResponse { success: true }))
}
