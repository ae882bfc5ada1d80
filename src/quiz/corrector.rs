use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::{Mode, Question};
use crate::quiz::Answers;

/// Score of one question within a corrected quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionScore {
    pub index: usize,
    pub question: String,
    pub mode: Mode,
    pub correct: BTreeSet<String>,
    pub selected: BTreeSet<String>,
    /// Earned credit in `0.0..=1.0`.
    pub score: f64,
    pub max_score: f64,
}

impl QuestionScore {
    pub fn is_full_credit(&self) -> bool {
        self.score >= self.max_score
    }
}

/// Outcome of correcting a whole quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrectionResult {
    pub per_question: Vec<QuestionScore>,
    /// Percentage in `0.0..=100.0`.
    pub total_score: f64,
}

impl CorrectionResult {
    /// Sum of per-question scores.
    pub fn points(&self) -> f64 {
        self.per_question.iter().map(|q| q.score).sum()
    }
}

/// Stateless scorer.
///
/// Single-choice questions are all or nothing. Multiple-choice questions earn
/// `|correct ∩ selected| / |correct|` minus `|selected \ correct| / |correct|`,
/// floored at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizCorrector;

impl QuizCorrector {
    pub fn new() -> Self {
        Self
    }

    pub fn score_single(correct: &BTreeSet<String>, selected: &BTreeSet<String>) -> f64 {
        if correct.is_empty() || selected.len() != 1 {
            return 0.0;
        }
        match selected.first() {
            Some(choice) if correct.contains(choice) => 1.0,
            _ => 0.0,
        }
    }

    pub fn score_multiple(correct: &BTreeSet<String>, selected: &BTreeSet<String>) -> f64 {
        if correct.is_empty() {
            return 0.0;
        }

        let total = correct.len() as f64;
        let hits = correct.intersection(selected).count() as f64;
        let misses = selected.difference(correct).count() as f64;

        (hits / total - misses / total).max(0.0)
    }

    /// Score one question with the strategy its mode calls for.
    pub fn score(question: &Question, selected: &BTreeSet<String>) -> f64 {
        match question.mode {
            Mode::Single => Self::score_single(&question.correct_answers, selected),
            Mode::Multiple => Self::score_multiple(&question.correct_answers, selected),
        }
    }

    /// Correct every question of `quiz` against `answers`.
    ///
    /// A position absent from `answers` counts as an empty selection. An empty
    /// quiz scores 0.
    pub fn correct_quiz(&self, quiz: &[&Question], answers: &Answers) -> CorrectionResult {
        let empty = BTreeSet::new();

        let per_question: Vec<QuestionScore> = quiz
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let selected = answers.get(&index).unwrap_or(&empty);
                QuestionScore {
                    index,
                    question: question.text.clone(),
                    mode: question.mode,
                    correct: question.correct_answers.clone(),
                    selected: selected.clone(),
                    score: Self::score(question, selected),
                    max_score: 1.0,
                }
            })
            .collect();

        let points: f64 = per_question.iter().map(|q| q.score).sum();
        let total_score = if per_question.is_empty() {
            0.0
        } else {
            points / per_question.len() as f64 * 100.0
        };

        tracing::debug!(
            questions = per_question.len(),
            points,
            total_score,
            "corrected quiz"
        );

        CorrectionResult {
            per_question,
            total_score,
        }
    }
}
