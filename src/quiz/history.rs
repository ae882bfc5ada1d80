use std::collections::BTreeSet;

use chrono::{DateTime, Local};
use uuid::Uuid;

use crate::models::Question;
use crate::quiz::{CorrectionResult, QuestionScore, TagStat, tag_stats};

/// A finished quiz kept for the rest of the session.
#[derive(Debug, Clone)]
pub struct QuizRecord {
    pub id: Uuid,
    pub finished_at: DateTime<Local>,
    pub total_score: f64,
    pub question_count: usize,
    /// Distinct tags of the quiz's questions, sorted.
    pub tags: Vec<String>,
    pub per_question: Vec<QuestionScore>,
    pub tag_stats: Vec<TagStat>,
}

impl QuizRecord {
    pub fn new(quiz: &[&Question], result: &CorrectionResult) -> Self {
        let tags: BTreeSet<&String> = quiz.iter().flat_map(|q| q.tags.iter()).collect();

        Self {
            id: Uuid::new_v4(),
            finished_at: Local::now(),
            total_score: result.total_score,
            question_count: quiz.len(),
            tags: tags.into_iter().cloned().collect(),
            per_question: result.per_question.clone(),
            tag_stats: tag_stats(quiz, result),
        }
    }
}

/// Aggregate over all finished quizzes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HistorySummary {
    pub total_quizzes: usize,
    pub average_score: f64,
    pub best_score: f64,
}

/// In-memory list of finished quizzes, oldest first.
#[derive(Debug, Clone, Default)]
pub struct QuizHistory {
    records: Vec<QuizRecord>,
}

impl QuizHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: QuizRecord) {
        tracing::debug!(id = %record.id, score = record.total_score, "recorded quiz");
        self.records.push(record);
    }

    pub fn records(&self) -> &[QuizRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Up to `n` records, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &QuizRecord> {
        self.records.iter().rev().take(n)
    }

    pub fn summary(&self) -> HistorySummary {
        if self.records.is_empty() {
            return HistorySummary::default();
        }

        let scores = self.records.iter().map(|r| r.total_score);
        let total: f64 = scores.clone().sum();
        let best = scores.fold(0.0, f64::max);

        HistorySummary {
            total_quizzes: self.records.len(),
            average_score: total / self.records.len() as f64,
            best_score: best,
        }
    }
}
