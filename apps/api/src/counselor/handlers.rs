//! Axum route handlers for the counselor chat.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::counselor::session::{ChatMessage, ChatSession};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
    /// Career currently in view; replaces the session's context when present.
    pub career_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResetQuery {
    pub career_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CounselorHealthResponse {
    pub available: bool,
}

/// GET /api/v1/counselor/messages
pub async fn handle_get_messages(State(state): State<AppState>) -> Json<ChatSession> {
    Json(state.chat.lock().await.clone())
}

/// POST /api/v1/counselor/messages
///
/// Sends the message with the last ten messages as history. On failure the
/// user-facing error is recorded on the session and returned; nothing is retried.
/// A conversation reset while the counselor is answering gets a 409 and the
/// reply is discarded.
pub async fn handle_send_message(
    State(state): State<AppState>,
    request: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<ChatMessage>, AppError> {
    let Json(request) = request?;
    let text = request.message.trim();
    if text.is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }
    if let Some(id) = &request.career_id {
        if !state.catalog.contains(id) {
            return Err(AppError::NotFound(format!("Career {id} not found")));
        }
    }

    let (career_id, turn) = {
        let mut chat = state.chat.lock().await;
        if request.career_id.is_some() {
            chat.set_career_id(request.career_id.clone());
        }
        let turn = chat.begin_turn(text);
        (chat.career_id().map(str::to_string), turn)
    };

    let result = state
        .counselor
        .send(text, career_id.as_deref(), &turn.history)
        .await;

    let mut chat = state.chat.lock().await;
    match result {
        Ok(reply) => {
            let message = chat.complete_turn(turn.generation, reply).cloned();
            message.map(Json).ok_or_else(|| {
                AppError::Conflict(
                    "The conversation was reset before the counselor replied".to_string(),
                )
            })
        }
        Err(e) => {
            chat.fail_turn(turn.generation, e.user_message());
            Err(AppError::Counselor(e))
        }
    }
}

/// DELETE /api/v1/counselor/messages
///
/// Starts a fresh conversation, optionally about a specific career.
pub async fn handle_reset_messages(
    State(state): State<AppState>,
    query: Result<Query<ResetQuery>, QueryRejection>,
) -> Result<Json<ChatSession>, AppError> {
    let Query(query) = query?;
    let career = match query.career_id.as_deref() {
        Some(id) => Some(
            state
                .catalog
                .get(id)
                .ok_or_else(|| AppError::NotFound(format!("Career {id} not found")))?,
        ),
        None => None,
    };

    let mut chat = state.chat.lock().await;
    chat.restart(career.map(|r| (r.id.as_str(), r.title.as_str())));
    Ok(Json(chat.clone()))
}

/// GET /api/v1/counselor/health
///
/// Pings the remote counselor. Never fails; an unreachable endpoint reports `false`.
pub async fn handle_counselor_health(State(state): State<AppState>) -> Json<CounselorHealthResponse> {
    Json(CounselorHealthResponse {
        available: state.counselor.check_health().await,
    })
}
