//! Axum route handlers for the Quiz API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::AppError;
use crate::quiz::answers::QuizAnswerSet;
use crate::quiz::questions::{find_question, Question, QUESTIONS};
use crate::quiz::scoring::{rank_matches, TOP_MATCHES};
use crate::quiz::session::QuizSession;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub question_id: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct QuizStateResponse {
    pub current_index: usize,
    pub total_questions: usize,
    pub question: &'static Question,
    pub answers: QuizAnswerSet,
    pub complete: bool,
}

impl From<&QuizSession> for QuizStateResponse {
    fn from(session: &QuizSession) -> Self {
        Self {
            current_index: session.current_index(),
            total_questions: QUESTIONS.len(),
            question: session.current_question(),
            answers: session.answers().clone(),
            complete: session.is_complete(),
        }
    }
}

fn ranked_json(state: &AppState, answers: &QuizAnswerSet) -> Value {
    let matches = rank_matches(
        state.catalog.all(),
        answers,
        state.scorer.as_ref(),
        TOP_MATCHES,
    );
    debug!(
        "Quiz ranked {} careers, top score {}",
        matches.len(),
        matches.first().map(|m| m.match_score).unwrap_or(0)
    );
    json!({ "matches": matches })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz/questions
pub async fn handle_questions() -> Json<&'static [Question]> {
    Json(QUESTIONS.as_slice())
}

/// POST /api/v1/quiz/matches
///
/// Stateless scoring of a complete answer set. Unknown or missing questions score zero.
pub async fn handle_matches(
    State(state): State<AppState>,
    answers: Result<Json<QuizAnswerSet>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(answers) = answers?;
    Ok(Json(ranked_json(&state, &answers)))
}

/// GET /api/v1/quiz
pub async fn handle_get_quiz(State(state): State<AppState>) -> Json<QuizStateResponse> {
    let session = state.quiz.lock().await;
    Json(QuizStateResponse::from(&*session))
}

/// POST /api/v1/quiz/answer
pub async fn handle_answer(
    State(state): State<AppState>,
    request: Result<Json<AnswerRequest>, JsonRejection>,
) -> Result<Json<QuizStateResponse>, AppError> {
    let Json(request) = request?;
    let question = find_question(&request.question_id).ok_or_else(|| {
        AppError::Validation(format!("Unknown question '{}'", request.question_id))
    })?;
    if !question.has_option(&request.value) {
        return Err(AppError::Validation(format!(
            "'{}' is not an option for question '{}'",
            request.value, question.id
        )));
    }

    let mut session = state.quiz.lock().await;
    session.answer(question, &request.value);
    Ok(Json(QuizStateResponse::from(&*session)))
}

/// POST /api/v1/quiz/next
pub async fn handle_next(State(state): State<AppState>) -> Json<QuizStateResponse> {
    let mut session = state.quiz.lock().await;
    session.next();
    Json(QuizStateResponse::from(&*session))
}

/// POST /api/v1/quiz/previous
pub async fn handle_previous(State(state): State<AppState>) -> Json<QuizStateResponse> {
    let mut session = state.quiz.lock().await;
    session.previous();
    Json(QuizStateResponse::from(&*session))
}

/// POST /api/v1/quiz/reset
pub async fn handle_reset(State(state): State<AppState>) -> Json<QuizStateResponse> {
    let mut session = state.quiz.lock().await;
    session.reset();
    Json(QuizStateResponse::from(&*session))
}

/// GET /api/v1/quiz/results
pub async fn handle_results(State(state): State<AppState>) -> Json<Value> {
    let answers = state.quiz.lock().await.answers().clone();
    Json(ranked_json(&state, &answers))
}
