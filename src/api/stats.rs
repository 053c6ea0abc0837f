//! Dashboard statistics endpoint.

use axum::{extract::State, Json};

use super::ApiResult;
use crate::models::Stats;
use crate::AppState;

/// GET /api/stats - Total member and scan counts.
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Stats> {
    let stats = state.repo.get_stats().await?;
    Ok(Json(stats))
}
