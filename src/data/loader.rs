use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Mode, Question};

/// Errors raised while reading a question file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist or cannot be read.
    #[error("question file not found at {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a well-formed array of question records.
    #[error("malformed question file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

/// Record shape as it appears in the JSON file.
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    question: String,
    choices: Vec<String>,
    correct: Vec<String>,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<QuestionRecord> for Question {
    fn from(record: QuestionRecord) -> Self {
        Question::new(
            record.question,
            record.choices,
            record.correct,
            Mode::parse_lenient(record.mode.as_deref()),
        )
        .with_tags(record.tags)
    }
}

/// Parse question records from a JSON string.
pub(crate) fn parse_questions(json: &str) -> Result<Vec<Question>, serde_json::Error> {
    let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(Question::from).collect())
}

/// Read and parse a JSON question file.
///
/// Records whose correct answers are not among their choices are kept as-is
/// (they simply never earn credit) and reported with a warning.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    for (index, question) in questions.iter().enumerate() {
        if !question.is_scoreable() {
            tracing::warn!(
                index,
                question = %question.text,
                "question can never be scored: correct answers missing from choices"
            );
        }
    }

    Ok(questions)
}
