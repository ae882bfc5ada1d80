//! Session settings and their defaults.

use std::collections::BTreeSet;

pub const DEFAULT_QUESTIONS_PATH: &str = "quiz_dataset.json";

pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const MIN_QUESTION_COUNT: usize = 5;
pub const MAX_QUESTION_COUNT: usize = 20;

/// How many past quizzes the history screen lists.
pub const HISTORY_WINDOW: usize = 10;

/// Initial quiz options for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub question_count: usize,
    pub shuffle: bool,
    pub tags: BTreeSet<String>,
}

impl Settings {
    /// Clamp the question count into the supported range.
    pub fn normalized(mut self) -> Self {
        self.question_count = self
            .question_count
            .clamp(MIN_QUESTION_COUNT, MAX_QUESTION_COUNT);
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            shuffle: true,
            tags: BTreeSet::new(),
        }
    }
}
