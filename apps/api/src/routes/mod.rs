pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::counselor::handlers as counselor;
use crate::explore::handlers as explore;
use crate::favorites::handlers as favorites;
use crate::quiz::handlers as quiz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog + browse
        .route("/api/v1/careers", get(explore::handle_browse))
        .route("/api/v1/careers/:id", get(catalog::handle_get_career))
        .route("/api/v1/vocabulary", get(catalog::handle_vocabulary))
        // Quiz
        .route("/api/v1/quiz", get(quiz::handle_get_quiz))
        .route("/api/v1/quiz/questions", get(quiz::handle_questions))
        .route("/api/v1/quiz/matches", post(quiz::handle_matches))
        .route("/api/v1/quiz/answer", post(quiz::handle_answer))
        .route("/api/v1/quiz/next", post(quiz::handle_next))
        .route("/api/v1/quiz/previous", post(quiz::handle_previous))
        .route("/api/v1/quiz/reset", post(quiz::handle_reset))
        .route("/api/v1/quiz/results", get(quiz::handle_results))
        // Favorites
        .route("/api/v1/favorites", get(favorites::handle_list_favorites))
        .route(
            "/api/v1/favorites/:id/toggle",
            post(favorites::handle_toggle_favorite),
        )
        // Counselor
        .route(
            "/api/v1/counselor/messages",
            get(counselor::handle_get_messages)
                .post(counselor::handle_send_message)
                .delete(counselor::handle_reset_messages),
        )
        .route(
            "/api/v1/counselor/health",
            get(counselor::handle_counselor_health),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use crate::state::testing::{call, test_app};

    #[tokio::test]
    async fn test_health() {
        let app = test_app();
        let (status, body) = call(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["careers"], 27);
    }
}
