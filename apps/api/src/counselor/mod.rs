//! Counselor client: the single point of entry for the remote career-counselor chat endpoint.
//!
//! The endpoint takes `{message, careerId, history}` and answers `{message, timestamp?}`.
//! Failures are never retried here; the user resends from the chat window.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod handlers;
pub mod session;

#[derive(Debug, Error)]
pub enum CounselorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Counselor returned an empty message")]
    EmptyReply,
}

impl CounselorError {
    /// The text shown in the chat window.
    pub fn user_message(&self) -> &'static str {
        match self {
            CounselorError::Http(e) if e.is_connect() || e.is_timeout() || e.is_request() => {
                "Network error. Please check your internet connection."
            }
            CounselorError::Api { status, .. } if *status >= 500 => {
                "Server error. The career counselor is temporarily unavailable."
            }
            _ => "Unable to connect to the career counselor. Please try again.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One prior message sent along as conversation context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryTurn {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CounselorRequest<'a> {
    message: &'a str,
    career_id: Option<&'a str>,
    history: &'a [HistoryTurn],
}

#[derive(Debug, Clone, Deserialize)]
pub struct CounselorReply {
    pub message: String,
    /// Unix seconds, when the endpoint supplies one.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[async_trait]
pub trait Counselor: Send + Sync {
    async fn send(
        &self,
        message: &str,
        career_id: Option<&str>,
        history: &[HistoryTurn],
    ) -> Result<CounselorReply, CounselorError>;

    /// Whether the endpoint currently answers with a success status.
    async fn check_health(&self) -> bool;
}

/// Message the health check sends; the endpoint treats it as a normal turn.
const HEALTH_PING: &str = "ping";

#[derive(Clone)]
pub struct HttpCounselor {
    client: Client,
    endpoint: String,
}

impl HttpCounselor {
    pub fn new(endpoint: String, timeout: std::time::Duration) -> Result<Self, CounselorError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Counselor for HttpCounselor {
    async fn send(
        &self,
        message: &str,
        career_id: Option<&str>,
        history: &[HistoryTurn],
    ) -> Result<CounselorReply, CounselorError> {
        let body = CounselorRequest {
            message,
            career_id,
            history,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CounselorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: CounselorReply = response.json().await?;
        if reply.message.trim().is_empty() {
            return Err(CounselorError::EmptyReply);
        }

        debug!(
            "Counselor replied: {} chars (career: {:?}, history: {})",
            reply.message.len(),
            career_id,
            history.len()
        );
        Ok(reply)
    }

    async fn check_health(&self) -> bool {
        let body = CounselorRequest {
            message: HEALTH_PING,
            career_id: None,
            history: &[],
        };
        match self.client.post(&self.endpoint).json(&body).send().await {
            Ok(response) => {
                debug!("Counselor health check: {}", response.status());
                response.status().is_success()
            }
            Err(e) => {
                debug!("Counselor health check failed: {e}");
                false
            }
        }
    }
}
