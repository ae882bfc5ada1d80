use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Scoring strategy for a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Exactly one option must be picked.
    #[default]
    Single,
    /// Any number of options may be picked; scored with partial credit.
    Multiple,
}

impl Mode {
    /// Parse a mode string from a dataset record.
    ///
    /// Anything other than `"multiple"` falls back to [`Mode::Single`].
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        match raw {
            Some("multiple") => Mode::Multiple,
            _ => Mode::Single,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Single => "single",
            Mode::Multiple => "multiple",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One quiz item, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub text: String,
    pub choices: Vec<String>,
    pub correct_answers: BTreeSet<String>,
    pub mode: Mode,
    pub tags: BTreeSet<String>,
}

impl Question {
    pub fn new<I, T>(text: impl Into<String>, choices: I, correct: T, mode: Mode) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            text: text.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            correct_answers: correct.into_iter().map(Into::into).collect(),
            mode,
            tags: BTreeSet::new(),
        }
    }

    /// Builder-style helper to attach tags.
    pub fn with_tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_single(&self) -> bool {
        self.mode == Mode::Single
    }

    pub fn is_multiple(&self) -> bool {
        self.mode == Mode::Multiple
    }

    /// Whether the question can ever earn credit: it has at least one correct
    /// answer and every correct answer is one of the choices.
    pub fn is_scoreable(&self) -> bool {
        !self.correct_answers.is_empty()
            && self
                .correct_answers
                .iter()
                .all(|answer| self.choices.contains(answer))
    }

}
