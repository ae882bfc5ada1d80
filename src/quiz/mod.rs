//! Quiz assembly, scoring and the aggregates built on top of scores.

mod corrector;
mod generator;
mod history;
mod stats;

use std::collections::{BTreeSet, HashMap};

use crate::models::Question;

pub use corrector::{CorrectionResult, QuestionScore, QuizCorrector};
pub use generator::QuizGenerator;
pub use history::{HistorySummary, QuizHistory, QuizRecord};
pub use stats::{DEFAULT_TAG, Grade, TagStat, tag_stats};

/// Questions selected for one attempt, in presentation order.
pub type Quiz<'a> = Vec<&'a Question>;

/// Options picked by the user, keyed by position in the quiz.
pub type Answers = HashMap<usize, BTreeSet<String>>;
