use std::collections::BTreeMap;

use crate::models::Question;
use crate::quiz::CorrectionResult;

/// Bucket for questions without tags.
pub const DEFAULT_TAG: &str = "General";

/// Average performance on one tag within a corrected quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct TagStat {
    pub tag: String,
    /// Average score as a percentage.
    pub score: f64,
    pub count: usize,
}

impl TagStat {
    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.score)
    }
}

/// Group per-question scores by tag.
///
/// A question counts toward every one of its tags; untagged questions go to
/// [`DEFAULT_TAG`]. Sorted best first, ties by tag name.
pub fn tag_stats(quiz: &[&Question], result: &CorrectionResult) -> Vec<TagStat> {
    let mut buckets: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for (question, scored) in quiz.iter().zip(&result.per_question) {
        if question.tags.is_empty() {
            let entry = buckets.entry(DEFAULT_TAG).or_default();
            entry.0 += scored.score;
            entry.1 += 1;
        }
        for tag in &question.tags {
            let entry = buckets.entry(tag.as_str()).or_default();
            entry.0 += scored.score;
            entry.1 += 1;
        }
    }

    let mut stats: Vec<TagStat> = buckets
        .into_iter()
        .map(|(tag, (sum, count))| TagStat {
            tag: tag.to_string(),
            score: sum / count as f64 * 100.0,
            count,
        })
        .collect();

    // Stable sort keeps the tag-name order from the BTreeMap among equal scores.
    stats.sort_by(|a, b| b.score.total_cmp(&a.score));
    stats
}

/// Qualitative feedback for a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    VeryGood,
    Good,
    NotBad,
    CouldBeBetter,
    KeepGoing,
    Review,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        match percentage {
            p if p >= 90.0 => Grade::Excellent,
            p if p >= 75.0 => Grade::VeryGood,
            p if p >= 60.0 => Grade::Good,
            p if p >= 50.0 => Grade::NotBad,
            p if p >= 40.0 => Grade::CouldBeBetter,
            p if p >= 25.0 => Grade::KeepGoing,
            _ => Grade::Review,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent!",
            Grade::VeryGood => "Very good!",
            Grade::Good => "Good work",
            Grade::NotBad => "Not bad",
            Grade::CouldBeBetter => "Could be better",
            Grade::KeepGoing => "Keep going",
            Grade::Review => "Needs review",
        }
    }
}
