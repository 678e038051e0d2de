use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::user::{Role, User};

/// Session extractor for routes that require a signed-in user
///
/// Yields a snapshot of the session's user; rejects with 401 while the
/// session is anonymous.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state.session.read().await;
        session
            .current_user()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ApiError::unauthorized("Not signed in"))
    }
}

/// Session extractor for routes reserved for the admin console
///
/// Rejects with 401 while anonymous and 403 when the signed-in user is not
/// an administrator. This is the same rule the session's view routing
/// enforces, applied at the HTTP boundary.
pub struct AdminUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if user.role != Role::Admin {
            return Err(ApiError::forbidden("Administrator access required"));
        }
        Ok(AdminUser(user))
    }
}
