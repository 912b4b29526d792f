use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::quiz::questions::{Question, QuestionKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multiple(Vec<String>),
}

/// Answers keyed by question id. Missing questions read as empty selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuizAnswerSet(BTreeMap<String, AnswerValue>);

impl QuizAnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one click: multi-choice toggles `value`, single-choice replaces.
    pub fn answer(&mut self, question: &Question, value: &str) {
        match question.kind {
            QuestionKind::Single => {
                self.0
                    .insert(question.id.to_string(), AnswerValue::Single(value.to_string()));
            }
            QuestionKind::Multiple => {
                let entry = self
                    .0
                    .entry(question.id.to_string())
                    .or_insert_with(|| AnswerValue::Multiple(Vec::new()));
                if let AnswerValue::Single(previous) = entry {
                    let previous = std::mem::take(previous);
                    *entry = AnswerValue::Multiple(vec![previous]);
                }
                if let AnswerValue::Multiple(values) = entry {
                    if let Some(pos) = values.iter().position(|v| v == value) {
                        values.remove(pos);
                    } else {
                        values.push(value.to_string());
                    }
                }
            }
        }
    }

    pub fn set(&mut self, question_id: impl Into<String>, value: AnswerValue) {
        self.0.insert(question_id.into(), value);
    }

    /// Distinct selected values, in the order they were chosen.
    pub fn selected(&self, question_id: &str) -> Vec<&str> {
        match self.0.get(question_id) {
            None => Vec::new(),
            Some(AnswerValue::Single(value)) => vec![value.as_str()],
            Some(AnswerValue::Multiple(values)) => {
                let mut out: Vec<&str> = Vec::with_capacity(values.len());
                for v in values {
                    if !out.contains(&v.as_str()) {
                        out.push(v);
                    }
                }
                out
            }
        }
    }

    /// The value of a single-choice answer. A multi-value answer yields its first entry.
    pub fn single(&self, question_id: &str) -> Option<&str> {
        match self.0.get(question_id)? {
            AnswerValue::Single(value) => Some(value.as_str()),
            AnswerValue::Multiple(values) => values.first().map(String::as_str),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
