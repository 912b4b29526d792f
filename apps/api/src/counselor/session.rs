use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::counselor::{CounselorReply, HistoryTurn, Role};

/// Prior messages sent with each request.
pub const HISTORY_WINDOW: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A message in flight. `generation` ties the eventual reply to the
/// conversation it was asked in.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    pub generation: u64,
    pub history: Vec<HistoryTurn>,
}

/// The in-memory conversation. Nothing here is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    #[serde(skip)]
    generation: u64,
    career_id: Option<String>,
    messages: Vec<ChatMessage>,
    /// Suggested prompts shown under the greeting.
    quick_questions: Vec<String>,
    last_error: Option<String>,
}

impl ChatSession {
    /// Starts a conversation with a greeting, tailored when a career is in view.
    pub fn new(career: Option<(&str, &str)>) -> Self {
        let greeting = match career {
            Some((_, title)) => format!(
                "Hi! I'm your AI career counselor. I see you're interested in {title}. \
                 I can help you learn more about this career, suggest university programs, \
                 and recommend companies that hire for this role. What would you like to know?"
            ),
            None => "Hi! I'm your AI career counselor. I'm here to help you explore different \
                     career paths, suggest university programs, and provide information about \
                     companies hiring in various fields. What career are you curious about?"
                .to_string(),
        };
        Self {
            generation: 0,
            career_id: career.map(|(id, _)| id.to_string()),
            messages: vec![ChatMessage {
                role: Role::Assistant,
                content: greeting,
                timestamp: Utc::now(),
            }],
            quick_questions: quick_questions(career.map(|(_, title)| title)),
            last_error: None,
        }
    }

    /// Replaces the conversation with a fresh one. Replies still in flight for
    /// the old conversation are discarded when they arrive.
    pub fn restart(&mut self, career: Option<(&str, &str)>) {
        let generation = self.generation.wrapping_add(1);
        *self = Self::new(career);
        self.generation = generation;
    }

    pub fn career_id(&self) -> Option<&str> {
        self.career_id.as_deref()
    }

    pub fn set_career_id(&mut self, career_id: Option<String>) {
        self.career_id = career_id;
    }

    /// The last `HISTORY_WINDOW` messages, oldest first.
    pub fn history(&self) -> Vec<HistoryTurn> {
        let start = self.messages.len().saturating_sub(HISTORY_WINDOW);
        self.messages[start..]
            .iter()
            .map(|m| HistoryTurn {
                role: m.role,
                content: m.content.clone(),
            })
            .collect()
    }

    /// Records the user's message and returns the history to send with it.
    /// The history excludes the message being sent.
    pub fn begin_turn(&mut self, text: &str) -> PendingTurn {
        let history = self.history();
        self.last_error = None;
        self.messages.push(ChatMessage {
            role: Role::User,
            content: text.to_string(),
            timestamp: Utc::now(),
        });
        PendingTurn {
            generation: self.generation,
            history,
        }
    }

    /// Appends the reply. Returns `None` when the conversation was restarted
    /// after the turn began; the reply is dropped.
    pub fn complete_turn(&mut self, generation: u64, reply: CounselorReply) -> Option<&ChatMessage> {
        if generation != self.generation {
            debug!("Dropping counselor reply for a restarted conversation");
            return None;
        }
        let timestamp = reply
            .timestamp
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or_else(Utc::now);
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: reply.message,
            timestamp,
        });
        self.messages.last()
    }

    /// Keeps the user's message so they can resend; only the error is recorded.
    pub fn fail_turn(&mut self, generation: u64, error: &str) {
        if generation != self.generation {
            debug!("Dropping counselor error for a restarted conversation");
            return;
        }
        self.last_error = Some(error.to_string());
    }
}

fn quick_questions(career_title: Option<&str>) -> Vec<String> {
    match career_title {
        Some(title) => vec![
            format!("What universities are best for {title}?"),
            format!("Which companies hire {title}s?"),
            "What degrees do I need?".to_string(),
            "What's the career path?".to_string(),
        ],
        None => [
            "What tech careers pay the most?",
            "Best universities for design?",
            "How do I become a software developer?",
            "What careers involve creativity?",
        ]
        .map(str::to_string)
        .to_vec(),
    }
}
