use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::config::HISTORY_WINDOW;
use crate::quiz::{DEFAULT_TAG, Grade};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[0], app);
    render_records(frame, chunks[1], app);
    super::render_controls(
        frame,
        chunks[2],
        "j/k move  ·  enter details  ·  esc/h back  ·  q quit",
    );
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.history().summary();
    let content = vec![
        Line::from(Span::styled(
            "HISTORY",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(
            format!(
                "{} completed  ·  average {:.1}%  ·  best {:.1}%",
                summary.total_quizzes, summary.average_score, summary.best_score
            ),
            Style::default().fg(Color::Gray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_records(frame: &mut Frame, area: Rect, app: &App) {
    let history = app.history();
    let total = history.len();

    let mut lines: Vec<Line> = history
        .recent(HISTORY_WINDOW)
        .enumerate()
        .map(|(offset, record)| {
            let color = super::grade_color(Grade::from_percentage(record.total_score));
            let tags = if record.tags.is_empty() {
                DEFAULT_TAG.to_string()
            } else {
                record.tags.join(", ")
            };

            let is_cursor = offset == app.history_cursor();
            let (marker, name_style) = if is_cursor {
                (">", Style::default().fg(Color::Cyan).bold())
            } else {
                (" ", Style::default().fg(Color::White))
            };

            Line::from(vec![
                Span::styled(format!(" {} ", marker), name_style),
                Span::styled(format!("Quiz {:<3}", total - offset), name_style),
                Span::styled(
                    record.finished_at.format("%Y-%m-%d %H:%M  ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("{:>5.1}%", record.total_score),
                    Style::default().fg(color).bold(),
                ),
                Span::styled(
                    format!("  {} question(s)  ", record.question_count),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(tags, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No quiz completed yet...",
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Recent quizzes ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}
