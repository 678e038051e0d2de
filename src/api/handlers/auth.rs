use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::user::User;
use crate::session::{Session, View};

/// Request body for signing in
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Current session as reported to the presentation layer
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,
}

impl SessionResponse {
    fn from_session(session: &Session) -> Self {
        Self {
            authenticated: session.is_authenticated(),
            user: session.current_user().cloned(),
            view: session.current_view(),
        }
    }
}

/// Request body for switching views
#[derive(Debug, Deserialize)]
pub struct SwitchViewRequest {
    pub view: View,
}

/// Sign in with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    // Single collapsed failure message: an unknown email and a wrong
    // password are indistinguishable to the caller.
    let user = {
        let store = state.store.read().await;
        store.authenticate(&req.email, &req.password)
    }
    .ok_or_else(|| ApiError::unauthorized("Invalid email or password. Please try again."))?;

    tracing::info!(role = %user.role, "user signed in");

    let mut session = state.session.write().await;
    session.login(user);
    Ok(Json(SessionResponse::from_session(&session)))
}

/// Sign out, returning the session to anonymous
///
/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.session.write().await.logout();
    StatusCode::NO_CONTENT
}

/// Report the current session state
///
/// GET /api/auth/session
pub async fn current_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.read().await;
    Json(SessionResponse::from_session(&session))
}

/// Switch between the dashboard and admin console views
///
/// POST /api/auth/view
pub async fn switch_view(
    State(state): State<AppState>,
    Json(req): Json<SwitchViewRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let mut session = state.session.write().await;
    session.navigate(req.view)?;
    Ok(Json(SessionResponse::from_session(&session)))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
