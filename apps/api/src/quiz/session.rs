use serde::Serialize;

use crate::quiz::answers::QuizAnswerSet;
use crate::quiz::questions::{Question, QUESTIONS};

/// Progress through the quiz. One session per running service (single user).
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuizSession {
    current: usize,
    answers: QuizAnswerSet,
    show_results: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &'static Question {
        &QUESTIONS[self.current]
    }

    pub fn answers(&self) -> &QuizAnswerSet {
        &self.answers
    }

    pub fn answer(&mut self, question: &Question, value: &str) {
        self.answers.answer(question, value);
    }

    /// Advances one question; stepping past the last one reveals the results.
    pub fn next(&mut self) {
        if self.current + 1 < QUESTIONS.len() {
            self.current += 1;
        } else {
            self.show_results = true;
        }
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_complete(&self) -> bool {
        self.show_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::questions::{find_question, GROWTH, INTERESTS};

    #[test]
    fn test_next_walks_questions_then_shows_results() {
        let mut session = QuizSession::new();
        for expected in 1..QUESTIONS.len() {
            session.next();
            assert_eq!(session.current_index(), expected);
            assert!(!session.is_complete());
        }
        session.next();
        assert_eq!(session.current_question().id, GROWTH);
        assert!(session.is_complete());
    }

    #[test]
    fn test_previous_stops_at_first_question() {
        let mut session = QuizSession::new();
        session.previous();
        assert_eq!(session.current_index(), 0);
        session.next();
        session.previous();
        assert_eq!(session.current_question().id, INTERESTS);
    }

    #[test]
    fn test_reset_discards_answers() {
        let mut session = QuizSession::new();
        session.answer(find_question(INTERESTS).unwrap(), "technology");
        session.next();
        session.reset();
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert!(!session.is_complete());
    }
}
