use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::{AdminUser, CurrentUser};
use crate::api::AppState;
use crate::domain::section::{InductionSection, NewSection};

/// Response from a section summary request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub section_id: Uuid,
    pub summary: String,
}

/// List the induction curriculum
///
/// GET /api/sections
pub async fn list_sections(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
) -> Json<Vec<InductionSection>> {
    let store = state.store.read().await;
    Json(store.sections().to_vec())
}

/// Publish a new induction module
///
/// POST /api/sections
pub async fn create_section(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(req): Json<NewSection>,
) -> Result<(StatusCode, Json<InductionSection>), ApiError> {
    let mut store = state.store.write().await;
    let section = store.add_section(req).await?;
    Ok((StatusCode::CREATED, Json(section)))
}

/// Delete an induction module
///
/// DELETE /api/sections/:id
pub async fn delete_section(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    store.delete_section(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Ask the assistant for a short summary of one module
///
/// POST /api/sections/:id/summary
pub async fn summarize_section(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<SummaryResponse>, ApiError> {
    // Clone the section out so the store lock is not held across the
    // external call.
    let section = {
        let store = state.store.read().await;
        store.section(id).cloned()
    }
    .ok_or_else(|| ApiError::not_found(format!("Section not found: {}", id)))?;

    let summary = state.assistant.summarize_section(&section).await;

    Ok(Json(SummaryResponse {
        section_id: id,
        summary,
    }))
}
