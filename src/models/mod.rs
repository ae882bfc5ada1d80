mod question;

pub use question::{Mode, Question};

/// Which screen the terminal session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Setup,
    Quiz,
    Result,
    History,
    HistoryDetail,
}
