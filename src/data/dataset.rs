//! The loaded question bank.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::data::loader::{LoadError, load_questions_from_json};
use crate::models::Question;

/// All questions loaded from one source, in file order.
///
/// A dataset is an ordinary value: build one at startup and pass it by
/// reference to whatever needs it. Reloading replaces the whole question list
/// or nothing at all.
#[derive(Debug, Clone, Default)]
pub struct QuestionDataset {
    questions: Vec<Question>,
    source: Option<PathBuf>,
}

impl QuestionDataset {
    /// An empty dataset with no source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from questions already in memory.
    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            source: None,
        }
    }

    /// Create a dataset and load it from `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let mut dataset = Self::new();
        dataset.load(path)?;
        Ok(dataset)
    }

    /// Replace the current questions with the contents of `path`.
    ///
    /// On error the dataset is left exactly as it was.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        let questions = load_questions_from_json(path)?;

        self.questions = questions;
        self.source = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            questions = self.questions.len(),
            tags = self.all_tags().len(),
            "loaded question dataset"
        );
        Ok(())
    }

    /// Every question, in load order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Path of the last successful load, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct tags across all questions.
    pub fn all_tags(&self) -> BTreeSet<String> {
        self.questions
            .iter()
            .flat_map(|q| q.tags.iter().cloned())
            .collect()
    }

    /// Questions carrying at least one of `tags`, in load order.
    ///
    /// An empty filter matches every question.
    pub fn questions_by_tags(&self, tags: &BTreeSet<String>) -> Vec<&Question> {
        if tags.is_empty() {
            return self.questions.iter().collect();
        }

        self.questions
            .iter()
            .filter(|q| !q.tags.is_disjoint(tags))
            .collect()
    }
}
