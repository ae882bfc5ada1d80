use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::data::QuestionDataset;
use crate::quiz::Quiz;

/// Draws random quizzes from a dataset.
#[derive(Debug, Clone, Copy)]
pub struct QuizGenerator<'a> {
    dataset: &'a QuestionDataset,
}

impl<'a> QuizGenerator<'a> {
    pub fn new(dataset: &'a QuestionDataset) -> Self {
        Self { dataset }
    }

    /// Build a quiz of at most `count` questions matching `tags`, using the
    /// thread-local RNG.
    pub fn generate(&self, tags: &BTreeSet<String>, count: usize, shuffle: bool) -> Quiz<'a> {
        self.generate_with_rng(tags, count, shuffle, &mut rand::thread_rng())
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied RNG.
    ///
    /// Asking for more questions than the pool holds returns the whole pool.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        tags: &BTreeSet<String>,
        count: usize,
        shuffle: bool,
        rng: &mut R,
    ) -> Quiz<'a> {
        let mut pool = self.dataset.questions_by_tags(tags);
        let pool_size = pool.len();

        if shuffle {
            pool.shuffle(rng);
        }
        pool.truncate(count);

        tracing::debug!(
            pool_size,
            requested = count,
            selected = pool.len(),
            shuffle,
            "generated quiz"
        );
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mode, Question};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dataset(size: usize) -> QuestionDataset {
        QuestionDataset::from_questions(
            (0..size)
                .map(|i| {
                    let tag = if i % 2 == 0 { "even" } else { "odd" };
                    Question::new(format!("q{i}"), ["a", "b"], ["a"], Mode::Single)
                        .with_tags([tag])
                })
                .collect(),
        )
    }

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_generation_bound() {
        let dataset = dataset(7);
        let generator = QuizGenerator::new(&dataset);
        let mut rng = StdRng::seed_from_u64(7);

        for count in 0..12 {
            for filter in [tags(&[]), tags(&["even"]), tags(&["odd"]), tags(&["none"])] {
                let pool = dataset.questions_by_tags(&filter).len();
                let quiz = generator.generate_with_rng(&filter, count, true, &mut rng);
                assert_eq!(quiz.len(), count.min(pool));
            }
        }
    }

    #[test]
    fn test_count_larger_than_pool_returns_all() {
        let dataset = dataset(3);
        let quiz = QuizGenerator::new(&dataset).generate(&BTreeSet::new(), 10, true);
        assert_eq!(quiz.len(), 3);

        let mut texts: Vec<&str> = quiz.iter().map(|q| q.text.as_str()).collect();
        texts.sort();
        assert_eq!(texts, vec!["q0", "q1", "q2"]);
    }

    #[test]
    fn test_empty_pool_gives_empty_quiz() {
        let dataset = dataset(4);
        let quiz = QuizGenerator::new(&dataset).generate(&tags(&["missing"]), 5, true);
        assert!(quiz.is_empty());

        let empty = QuestionDataset::new();
        assert!(QuizGenerator::new(&empty).generate(&BTreeSet::new(), 5, true).is_empty());
    }

    #[test]
    fn test_no_shuffle_keeps_pool_order() {
        let dataset = dataset(6);
        let quiz = QuizGenerator::new(&dataset).generate(&tags(&["even"]), 2, false);
        let texts: Vec<&str> = quiz.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["q0", "q2"]);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let dataset = dataset(20);
        let generator = QuizGenerator::new(&dataset);
        let filter = BTreeSet::new();

        let first = generator.generate_with_rng(&filter, 10, true, &mut StdRng::seed_from_u64(42));
        let second = generator.generate_with_rng(&filter, 10, true, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_reorders_pool() {
        let dataset = dataset(20);
        let filter = BTreeSet::new();
        let pool = dataset.questions_by_tags(&filter);

        let quiz = QuizGenerator::new(&dataset).generate_with_rng(
            &filter,
            pool.len(),
            true,
            &mut StdRng::seed_from_u64(3),
        );

        assert_eq!(quiz.len(), pool.len());
        assert_ne!(quiz, pool);

        let drawn: BTreeSet<&str> = quiz.iter().map(|q| q.text.as_str()).collect();
        let expected: BTreeSet<&str> = pool.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_quiz_references_dataset_questions() {
        let dataset = dataset(3);
        let quiz = QuizGenerator::new(&dataset).generate(&BTreeSet::new(), 3, true);
        for question in quiz {
            assert!(dataset.questions().iter().any(|q| std::ptr::eq(q, question)));
        }
    }
}
