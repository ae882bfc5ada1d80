use std::collections::BTreeSet;

use crate::config::{HISTORY_WINDOW, MAX_QUESTION_COUNT, MIN_QUESTION_COUNT, Settings};
use crate::data::QuestionDataset;
use crate::models::{AppState, Question};
use crate::quiz::{
    Answers, CorrectionResult, Quiz, QuizCorrector, QuizGenerator, QuizHistory, QuizRecord,
    TagStat, tag_stats,
};

/// One user's terminal session: setup choices, the running quiz and its
/// answers, the latest result and the history of finished quizzes.
pub struct App<'a> {
    pub state: AppState,
    generator: QuizGenerator<'a>,
    corrector: QuizCorrector,
    available_tags: Vec<String>,
    selected_tags: BTreeSet<String>,
    tag_cursor: usize,
    question_count: usize,
    shuffle: bool,
    quiz: Quiz<'a>,
    current_question_index: usize,
    selected_option: usize,
    answers: Answers,
    result: Option<CorrectionResult>,
    tag_stats: Vec<TagStat>,
    history: QuizHistory,
    result_scroll: usize,
    history_cursor: usize,
    viewed_record: Option<usize>,
    detail_scroll: usize,
    notice: Option<String>,
}

/// The breakdown lists each question on two lines.
const LINES_PER_SCORE: usize = 2;

impl<'a> App<'a> {
    pub fn new(dataset: &'a QuestionDataset, settings: Settings) -> Self {
        let settings = settings.normalized();
        let available_tags: Vec<String> = dataset.all_tags().into_iter().collect();
        let selected_tags = settings
            .tags
            .into_iter()
            .filter(|tag| available_tags.contains(tag))
            .collect();

        Self {
            state: AppState::Setup,
            generator: QuizGenerator::new(dataset),
            corrector: QuizCorrector::new(),
            available_tags,
            selected_tags,
            tag_cursor: 0,
            question_count: settings.question_count,
            shuffle: settings.shuffle,
            quiz: Vec::new(),
            current_question_index: 0,
            selected_option: 0,
            answers: Answers::new(),
            result: None,
            tag_stats: Vec::new(),
            history: QuizHistory::new(),
            result_scroll: 0,
            history_cursor: 0,
            viewed_record: None,
            detail_scroll: 0,
            notice: None,
        }
    }

    // Setup

    pub fn available_tags(&self) -> &[String] {
        &self.available_tags
    }

    pub fn selected_tags(&self) -> &BTreeSet<String> {
        &self.selected_tags
    }

    pub fn tag_cursor(&self) -> usize {
        self.tag_cursor
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn select_next_tag(&mut self) {
        if !self.available_tags.is_empty() {
            self.tag_cursor = (self.tag_cursor + 1) % self.available_tags.len();
        }
    }

    pub fn select_previous_tag(&mut self) {
        let len = self.available_tags.len();
        if len > 0 {
            self.tag_cursor = (self.tag_cursor + len - 1) % len;
        }
    }

    pub fn toggle_tag(&mut self) {
        let Some(tag) = self.available_tags.get(self.tag_cursor) else {
            return;
        };
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.clone());
        }
    }

    pub fn increase_count(&mut self) {
        self.question_count = (self.question_count + 1).min(MAX_QUESTION_COUNT);
    }

    pub fn decrease_count(&mut self) {
        self.question_count = self.question_count.saturating_sub(1).max(MIN_QUESTION_COUNT);
    }

    /// Draw a new quiz from the current filter. Stays on setup when no
    /// question matches.
    pub fn start_quiz(&mut self) {
        let quiz = self
            .generator
            .generate(&self.selected_tags, self.question_count, self.shuffle);
        self.begin(quiz);
    }

    fn begin(&mut self, quiz: Quiz<'a>) {
        self.reset_progress();
        if quiz.is_empty() {
            self.notice = Some("No question matches the selected tags".to_string());
            self.state = AppState::Setup;
            return;
        }
        self.quiz = quiz;
        self.state = AppState::Quiz;
    }

    // Quiz

    pub fn quiz(&self) -> &[&'a Question] {
        &self.quiz
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        self.quiz.get(self.current_question_index).copied()
    }

    pub fn current_question_number(&self) -> usize {
        self.current_question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.quiz.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_question_index + 1 >= self.quiz.len()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    /// Options picked so far for the current question.
    pub fn current_answer(&self) -> Option<&BTreeSet<String>> {
        self.answers.get(&self.current_question_index)
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    fn option_count(&self) -> usize {
        self.current_question().map_or(0, |q| q.choices.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Pick the option under the cursor. Single-choice questions keep only
    /// that option; multiple-choice questions toggle it.
    pub fn toggle_option(&mut self) {
        let Some(question) = self.current_question() else {
            return;
        };
        let Some(choice) = question.choices.get(self.selected_option) else {
            return;
        };

        let picked = self.answers.entry(self.current_question_index).or_default();
        if question.is_single() {
            picked.clear();
            picked.insert(choice.clone());
        } else if !picked.remove(choice) {
            picked.insert(choice.clone());
        }
    }

    pub fn clear_answer(&mut self) {
        self.answers.remove(&self.current_question_index);
    }

    pub fn next_question(&mut self) {
        if !self.is_last_question() {
            self.current_question_index += 1;
            self.selected_option = 0;
        }
    }

    pub fn previous_question(&mut self) {
        if self.current_question_index > 0 {
            self.current_question_index -= 1;
            self.selected_option = 0;
        }
    }

    /// Score the quiz, keep the result for display and add it to history.
    pub fn finish_quiz(&mut self) {
        let result = self.corrector.correct_quiz(&self.quiz, &self.answers);
        self.tag_stats = tag_stats(&self.quiz, &result);
        self.history.push(QuizRecord::new(&self.quiz, &result));
        self.result = Some(result);
        self.result_scroll = 0;
        self.state = AppState::Result;
    }

    // Result and history

    pub fn result(&self) -> Option<&CorrectionResult> {
        self.result.as_ref()
    }

    pub fn tag_stats(&self) -> &[TagStat] {
        &self.tag_stats
    }

    pub fn history(&self) -> &QuizHistory {
        &self.history
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        let len = self.result.as_ref().map_or(0, |r| r.per_question.len());
        self.result_scroll = (self.result_scroll + 1).min(len * LINES_PER_SCORE);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn show_history(&mut self) {
        self.history_cursor = 0;
        self.viewed_record = None;
        self.state = AppState::History;
    }

    /// Leave the history screen for wherever it makes sense to return.
    pub fn close_history(&mut self) {
        self.state = if self.result.is_some() {
            AppState::Result
        } else {
            AppState::Setup
        };
    }

    /// Position of the highlighted row in the history list, newest first.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    fn visible_records(&self) -> usize {
        self.history.len().min(HISTORY_WINDOW)
    }

    pub fn select_next_record(&mut self) {
        let count = self.visible_records();
        if count > 0 {
            self.history_cursor = (self.history_cursor + 1) % count;
        }
    }

    pub fn select_previous_record(&mut self) {
        let count = self.visible_records();
        if count > 0 {
            self.history_cursor = (self.history_cursor + count - 1) % count;
        }
    }

    /// Open the highlighted past quiz in the detail view.
    pub fn open_record(&mut self) {
        if self.history_cursor >= self.visible_records() {
            return;
        }
        self.viewed_record = Some(self.history.len() - 1 - self.history_cursor);
        self.detail_scroll = 0;
        self.state = AppState::HistoryDetail;
    }

    pub fn close_record(&mut self) {
        self.viewed_record = None;
        self.state = AppState::History;
    }

    /// The past quiz shown by the detail view.
    pub fn viewed_record(&self) -> Option<&QuizRecord> {
        self.viewed_record
            .and_then(|index| self.history.records().get(index))
    }

    pub fn detail_scroll(&self) -> usize {
        self.detail_scroll
    }

    pub fn scroll_detail_down(&mut self) {
        let len = self.viewed_record().map_or(0, |r| r.per_question.len());
        self.detail_scroll = (self.detail_scroll + 1).min(len * LINES_PER_SCORE);
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// Back to setup. History survives; the quiz and its answers do not.
    pub fn restart(&mut self) {
        self.reset_progress();
        self.quiz.clear();
        self.state = AppState::Setup;
    }

    fn reset_progress(&mut self) {
        self.current_question_index = 0;
        self.selected_option = 0;
        self.answers.clear();
        self.result = None;
        self.tag_stats.clear();
        self.result_scroll = 0;
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mode;

    fn dataset() -> QuestionDataset {
        QuestionDataset::from_questions(vec![
            Question::new("Capital of France?", ["Paris", "Lyon"], ["Paris"], Mode::Single)
                .with_tags(["geo"]),
            Question::new("Pick vowels", ["a", "b", "e"], ["a", "e"], Mode::Multiple)
                .with_tags(["letters"]),
        ])
    }

    fn ordered_settings() -> Settings {
        Settings {
            shuffle: false,
            ..Settings::default()
        }
    }

    #[test]
    fn test_new_filters_unknown_tags() {
        let dataset = dataset();
        let settings = Settings {
            tags: ["geo".to_string(), "nope".to_string()].into_iter().collect(),
            ..Settings::default()
        };
        let app = App::new(&dataset, settings);
        assert_eq!(app.available_tags(), ["geo", "letters"]);
        assert_eq!(app.selected_tags().len(), 1);
        assert!(app.selected_tags().contains("geo"));
    }

    #[test]
    fn test_tag_toggle_and_count_bounds() {
        let dataset = dataset();
        let mut app = App::new(&dataset, Settings::default());

        app.select_next_tag();
        app.toggle_tag();
        assert!(app.selected_tags().contains("letters"));
        app.toggle_tag();
        assert!(app.selected_tags().is_empty());

        for _ in 0..50 {
            app.increase_count();
        }
        assert_eq!(app.question_count(), MAX_QUESTION_COUNT);
        for _ in 0..50 {
            app.decrease_count();
        }
        assert_eq!(app.question_count(), MIN_QUESTION_COUNT);
    }

    #[test]
    fn test_full_quiz_flow() {
        let dataset = dataset();
        let mut app = App::new(&dataset, ordered_settings());

        app.start_quiz();
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.total_questions(), 2);

        // Single choice: picking Lyon then Paris keeps only Paris.
        app.select_next_option();
        app.toggle_option();
        app.select_previous_option();
        app.toggle_option();
        assert_eq!(app.current_answer().map(|a| a.len()), Some(1));
        assert!(app.current_answer().is_some_and(|a| a.contains("Paris")));

        app.next_question();
        assert!(app.is_last_question());

        // Multiple choice: a, then e, toggling b on and off.
        app.toggle_option();
        app.select_next_option();
        app.toggle_option();
        app.toggle_option();
        app.select_next_option();
        app.toggle_option();

        app.finish_quiz();
        assert_eq!(app.state, AppState::Result);
        let result = app.result().unwrap();
        assert_eq!(result.total_score, 100.0);
        assert_eq!(app.tag_stats().len(), 2);
        assert_eq!(app.history().len(), 1);
    }

    #[test]
    fn test_clear_answer_and_navigation() {
        let dataset = dataset();
        let mut app = App::new(&dataset, ordered_settings());
        app.start_quiz();

        app.toggle_option();
        assert!(app.current_answer().is_some());
        app.clear_answer();
        assert!(app.current_answer().is_none());

        app.previous_question();
        assert_eq!(app.current_question_number(), 1);
        app.next_question();
        app.next_question();
        assert_eq!(app.current_question_number(), 2);
    }

    #[test]
    fn test_empty_pool_stays_on_setup() {
        let dataset = QuestionDataset::new();
        let mut app = App::new(&dataset, Settings::default());
        app.start_quiz();
        assert_eq!(app.state, AppState::Setup);
        assert!(app.notice().is_some());
        assert!(app.current_question().is_none());
    }

    #[test]
    fn test_result_scroll_is_bounded() {
        let dataset = dataset();
        let mut app = App::new(&dataset, ordered_settings());
        app.start_quiz();
        app.finish_quiz();

        for _ in 0..100 {
            app.scroll_results_down();
        }
        assert_eq!(app.result_scroll(), 2 * LINES_PER_SCORE);
        app.scroll_results_up();
        assert_eq!(app.result_scroll(), 2 * LINES_PER_SCORE - 1);
    }

    #[test]
    fn test_history_detail_round_trip() {
        let dataset = dataset();
        let mut app = App::new(&dataset, ordered_settings());

        // First quiz: everything right.
        app.start_quiz();
        app.toggle_option();
        app.next_question();
        app.toggle_option();
        app.select_next_option();
        app.select_next_option();
        app.toggle_option();
        app.finish_quiz();
        app.restart();

        // Second quiz: nothing answered.
        app.start_quiz();
        app.finish_quiz();

        app.show_history();
        assert_eq!(app.history_cursor(), 0);
        assert!(app.viewed_record().is_none());

        app.open_record();
        assert_eq!(app.state, AppState::HistoryDetail);
        assert_eq!(app.viewed_record().map(|r| r.total_score), Some(0.0));
        app.close_record();
        assert_eq!(app.state, AppState::History);

        app.select_next_record();
        assert_eq!(app.history_cursor(), 1);
        app.open_record();
        let record = app.viewed_record().unwrap();
        assert_eq!(record.total_score, 100.0);
        assert_eq!(record.per_question.len(), 2);
        assert_eq!(record.per_question[1].selected.len(), 2);
        assert_eq!(record.tag_stats.len(), 2);

        for _ in 0..10 {
            app.scroll_detail_down();
        }
        assert_eq!(app.detail_scroll(), 2 * LINES_PER_SCORE);

        app.close_record();
        app.select_next_record();
        assert_eq!(app.history_cursor(), 0);
        app.select_previous_record();
        assert_eq!(app.history_cursor(), 1);

        app.close_history();
        assert_eq!(app.state, AppState::Result);
    }

    #[test]
    fn test_open_record_with_empty_history() {
        let dataset = dataset();
        let mut app = App::new(&dataset, Settings::default());
        app.show_history();
        app.select_next_record();
        app.open_record();
        assert_eq!(app.state, AppState::History);
        assert!(app.viewed_record().is_none());
    }

    #[test]
    fn test_restart_keeps_history() {
        let dataset = dataset();
        let mut app = App::new(&dataset, ordered_settings());
        app.start_quiz();
        app.finish_quiz();
        assert_eq!(app.result().map(|r| r.total_score), Some(0.0));

        app.show_history();
        assert_eq!(app.state, AppState::History);
        app.close_history();
        assert_eq!(app.state, AppState::Result);

        app.restart();
        assert_eq!(app.state, AppState::Setup);
        assert!(app.result().is_none());
        assert!(app.quiz().is_empty());
        assert_eq!(app.history().len(), 1);

        app.show_history();
        app.close_history();
        assert_eq!(app.state, AppState::Setup);
    }
}
