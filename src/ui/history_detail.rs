use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::quiz::{DEFAULT_TAG, Grade};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(record) = app.viewed_record() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    let grade = Grade::from_percentage(record.total_score);
    let color = super::grade_color(grade);
    let tags = if record.tags.is_empty() {
        DEFAULT_TAG.to_string()
    } else {
        record.tags.join(", ")
    };

    let header = vec![
        Line::from(Span::styled(
            format!("QUIZ OF {}", record.finished_at.format("%Y-%m-%d %H:%M")),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            format!(
                "{:.0}%  ·  {}  ·  {} question(s)",
                record.total_score,
                grade.label(),
                record.question_count
            ),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(
            format!("Topics: {}", tags),
            Style::default().fg(Color::Gray),
        )),
    ];

    let widget = Paragraph::new(header).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[0]);

    super::result::render_question_breakdown(
        frame,
        chunks[1],
        &record.per_question,
        app.detail_scroll(),
    );
    super::result::render_tag_stats(frame, chunks[2], &record.tag_stats);
    super::render_controls(frame, chunks[3], "j/k scroll  ·  esc/h back  ·  q quit");
}
