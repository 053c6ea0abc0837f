//! Member API endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{CreateMemberRequest, CreatedMember, Member};
use crate::AppState;

/// POST /api/members - Register a new officer.
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<CreateMemberRequest>,
) -> ApiResult<CreatedMember> {
    // Validate required fields
    for (value, name) in [
        (&request.full_name, "full_name"),
        (&request.rank, "rank"),
        (&request.responsibility, "responsibility"),
        (&request.phone_number, "phone_number"),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::InvalidArgument(format!("{} is required", name)));
        }
    }

    let created = state.repo.create_member(&request).await?;
    tracing::info!("Registered member {}", created.id_number);
    Ok(Json(created))
}

/// Query parameters for member search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

/// GET /api/members/search - Substring search across ID number, name, and phone.
pub async fn search_members(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Vec<Member>> {
    let query = match params.query.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => return Err(AppError::InvalidArgument("Query is required".to_string())),
    };

    let members = state.repo.search_members(query).await?;
    Ok(Json(members))
}

/// GET /api/members - List all members sorted by name.
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Vec<Member>> {
    let members = state.repo.list_members().await?;
    Ok(Json(members))
}

/// GET /api/members/:id_number - Look up a single member by ID number.
pub async fn get_member(
    State(state): State<AppState>,
    Path(id_number): Path<String>,
) -> ApiResult<Member> {
    match state.repo.get_member_by_id_number(&id_number).await? {
        Some(member) => Ok(Json(member)),
        None => Err(AppError::NotFound("Member not found".to_string())),
    }
}
