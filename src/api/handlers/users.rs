use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::AdminUser;
use crate::api::AppState;
use crate::domain::user::{Email, NewUser, User};

/// List all user accounts
///
/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
) -> Json<Vec<User>> {
    let store = state.store.read().await;
    Json(store.users().to_vec())
}

/// Create a user account
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(req): Json<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    // Validate the email when one was provided; the store's default for an
    // omitted email is the empty string.
    if let Some(email) = req.email.as_deref() {
        Email::new(email).map_err(|e| ApiError::bad_request(e))?;
    }

    let mut store = state.store.write().await;
    let user = store.add_user(req).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Delete a user account
///
/// DELETE /api/users/:id
///
/// Responds 409 when the target is the last remaining administrator.
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut store = state.store.write().await;
    store.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
