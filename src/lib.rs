//! # tag-quiz
//!
//! Tag-filtered quizzes with partial-credit scoring, plus a terminal front end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::collections::{BTreeSet, HashMap};
//!
//! use tag_quiz::{QuestionDataset, QuizCorrector, QuizGenerator, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load the question bank once and pass it around by reference
//!     let dataset = QuestionDataset::open("quiz_dataset.json")?;
//!
//!     let tags: BTreeSet<String> = ["rust".to_string()].into_iter().collect();
//!     let quiz = QuizGenerator::new(&dataset).generate(&tags, 10, true);
//!
//!     let answers = HashMap::new();
//!     let result = QuizCorrector::new().correct_quiz(&quiz, &answers);
//!     println!("{:.0}%", result.total_score);
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
mod data;
mod models;
mod quiz;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::App;
pub use config::Settings;
pub use data::{LoadError, QuestionDataset, load_questions_from_json};
pub use models::{AppState, Mode, Question};
pub use quiz::{
    Answers, CorrectionResult, DEFAULT_TAG, Grade, HistorySummary, QuestionScore, Quiz,
    QuizCorrector, QuizGenerator, QuizHistory, QuizRecord, TagStat, tag_stats,
};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading questions from file.
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error while driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// An interactive terminal session over a loaded dataset.
pub struct Session<'a> {
    app: App<'a>,
}

impl<'a> Session<'a> {
    pub fn new(dataset: &'a QuestionDataset, settings: Settings) -> Self {
        Self {
            app: App::new(dataset, settings),
        }
    }

    /// Run the session in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App<'a> {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App<'a> {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Setup => handle_setup_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
        AppState::History => handle_history_input(app, key),
        AppState::HistoryDetail => handle_history_detail_input(app, key),
    }
}

fn handle_setup_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_tag(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_tag(),
        KeyCode::Char(' ') => app.toggle_tag(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => app.increase_count(),
        KeyCode::Char('-') | KeyCode::Left => app.decrease_count(),
        KeyCode::Enter => app.start_quiz(),
        KeyCode::Char('h') | KeyCode::Char('H') => app.show_history(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Char(' ') => app.toggle_option(),
        KeyCode::Char('c') | KeyCode::Char('C') => app.clear_answer(),
        KeyCode::Left | KeyCode::Char('p') => app.previous_question(),
        KeyCode::Right | KeyCode::Char('n') => app.next_question(),
        KeyCode::Enter if app.is_last_question() => app.finish_quiz(),
        KeyCode::Enter => app.next_question(),
        KeyCode::Char('f') | KeyCode::Char('F') => app.finish_quiz(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('h') | KeyCode::Char('H') => app.show_history(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_history_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_record(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_record(),
        KeyCode::Enter => app.open_record(),
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Backspace => {
            app.close_history()
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

fn handle_history_detail_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(),
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Backspace => {
            app.close_record()
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> QuestionDataset {
        QuestionDataset::from_questions(vec![
            Question::new("Capital of France?", ["Paris", "Lyon"], ["Paris"], Mode::Single),
            Question::new("Capital of Italy?", ["Rome", "Milan"], ["Rome"], Mode::Single),
        ])
    }

    fn settings() -> Settings {
        Settings {
            shuffle: false,
            ..Settings::default()
        }
    }

    #[test]
    fn test_keyboard_flow() {
        let dataset = dataset();
        let mut app = App::new(&dataset, settings());

        assert!(!handle_input(&mut app, KeyCode::Enter));
        assert_eq!(app.state, AppState::Quiz);

        handle_input(&mut app, KeyCode::Char(' '));
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.current_question_number(), 2);

        handle_input(&mut app, KeyCode::Char('j'));
        handle_input(&mut app, KeyCode::Char(' '));
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.result().map(|r| r.total_score), Some(50.0));

        handle_input(&mut app, KeyCode::Char('h'));
        assert_eq!(app.state, AppState::History);
        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::HistoryDetail);
        assert_eq!(app.viewed_record().map(|r| r.total_score), Some(50.0));
        handle_input(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::History);
        handle_input(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::Result);

        handle_input(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state, AppState::Setup);
        assert!(handle_input(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_error_display() {
        let err = QuizError::from(load_questions_from_json("missing.json").unwrap_err());
        assert!(err.to_string().starts_with("failed to load questions"));
    }
}
