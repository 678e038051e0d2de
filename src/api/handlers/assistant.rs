use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::middleware::auth::CurrentUser;
use crate::api::AppState;

/// Request body for an assistant question
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Assistant answer payload
///
/// Always produced: service failures arrive here as fixed fallback replies,
/// never as HTTP errors.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Ask the onboarding assistant a question
///
/// POST /api/assistant/ask
pub async fn ask(
    State(state): State<AppState>,
    CurrentUser(_): CurrentUser,
    Json(req): Json<AskRequest>,
) -> Json<AskResponse> {
    // Snapshot the curriculum so the store lock is not held across the
    // external call; other mutations may proceed while a question is
    // pending.
    let sections = {
        let store = state.store.read().await;
        store.sections().to_vec()
    };

    let answer = state.assistant.answer_question(&req.question, &sections).await;
    Json(AskResponse { answer })
}
