mod history;
mod history_detail;
mod quiz;
mod result;
mod setup;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::AppState;
use crate::quiz::Grade;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Setup => setup::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
        AppState::History => history::render(frame, area, app),
        AppState::HistoryDetail => history_detail::render(frame, area, app),
    }
}

fn grade_color(grade: Grade) -> Color {
    match grade {
        Grade::Excellent | Grade::VeryGood => Color::Green,
        Grade::Good => Color::Cyan,
        Grade::NotBad | Grade::CouldBeBetter => Color::Yellow,
        Grade::KeepGoing | Grade::Review => Color::Red,
    }
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
