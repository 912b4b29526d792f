use std::sync::Arc;

use tokio::sync::Mutex;

use crate::catalog::Catalog;
use crate::counselor::session::ChatSession;
use crate::counselor::Counselor;
use crate::favorites::registry::FavoritesRegistry;
use crate::quiz::scoring::{MatchScorer, WeightedMatchScorer};
use crate::quiz::session::QuizSession;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The catalog is immutable. Favorites, the quiz and the chat are single-user
/// sessions; each is owned here and mutated only through its own handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub favorites: Arc<Mutex<FavoritesRegistry>>,
    /// Pluggable match scorer. Default: WeightedMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
    pub quiz: Arc<Mutex<QuizSession>>,
    pub chat: Arc<Mutex<ChatSession>>,
    pub counselor: Arc<dyn Counselor>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        favorites: FavoritesRegistry,
        counselor: Arc<dyn Counselor>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            favorites: Arc::new(Mutex::new(favorites)),
            scorer: Arc::new(WeightedMatchScorer::default()),
            quiz: Arc::new(Mutex::new(QuizSession::new())),
            chat: Arc::new(Mutex::new(ChatSession::new(None))),
            counselor,
        }
    }
}

/// Shared helpers for handler tests.
#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::counselor::{CounselorError, CounselorReply, HistoryTurn};
    use crate::favorites::store::MemoryStore;
    use crate::routes::build_router;

    /// What the fake counselor saw on its last call.
    #[derive(Debug, Clone, Default)]
    pub struct SeenRequest {
        pub message: String,
        pub career_id: Option<String>,
        pub history_len: usize,
    }

    /// Replies with a canned message, or fails with a 503 when `fail` is set.
    /// `delay` holds the reply back to simulate a slow endpoint.
    #[derive(Default)]
    pub struct FakeCounselor {
        pub fail: bool,
        pub delay: Option<Duration>,
        pub seen: StdMutex<Option<SeenRequest>>,
    }

    #[async_trait]
    impl Counselor for FakeCounselor {
        async fn send(
            &self,
            message: &str,
            career_id: Option<&str>,
            history: &[HistoryTurn],
        ) -> Result<CounselorReply, CounselorError> {
            *self.seen.lock().unwrap() = Some(SeenRequest {
                message: message.to_string(),
                career_id: career_id.map(str::to_string),
                history_len: history.len(),
            });
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail {
                return Err(CounselorError::Api {
                    status: 503,
                    message: "unavailable".into(),
                });
            }
            Ok(CounselorReply {
                message: format!("You asked: {message}"),
                timestamp: Some(1_700_000_000),
            })
        }

        async fn check_health(&self) -> bool {
            !self.fail
        }
    }

    pub fn test_state_with(counselor: Arc<FakeCounselor>) -> AppState {
        AppState::new(
            Catalog::builtin().unwrap(),
            FavoritesRegistry::hydrate(Box::new(MemoryStore::new())),
            counselor,
        )
    }

    pub fn test_app() -> Router {
        build_router(test_state_with(Arc::new(FakeCounselor::default())))
    }

    /// Sends one request through the router and returns the status and JSON body.
    pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}
