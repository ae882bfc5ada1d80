use std::collections::BTreeSet;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::quiz::{CorrectionResult, Grade, QuestionScore, TagStat};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.result() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(6),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], result);
    render_question_breakdown(frame, chunks[1], &result.per_question, app.result_scroll());
    render_tag_stats(frame, chunks[2], app.tag_stats());
    super::render_controls(
        frame,
        chunks[3],
        "j/k scroll  ·  h history  ·  r new quiz  ·  q quit",
    );
}

fn render_score_summary(frame: &mut Frame, area: Rect, result: &CorrectionResult) {
    let grade = Grade::from_percentage(result.total_score);
    let color = super::grade_color(grade);

    let content = vec![
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{:.2} / {} points  ({:.0}%)",
                result.points(),
                result.per_question.len(),
                result.total_score
            ),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(grade.label(), Style::default().fg(color))),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

pub(super) fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    per_question: &[QuestionScore],
    scroll: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(per_question.len() * 2);

    for scored in per_question {
        let (symbol, color) = score_marker(scored);
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", scored.index + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                truncate_question(&scored.question),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("  {:.2}", scored.score),
                Style::default().fg(color),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("       "),
            Span::styled(
                format!("you: {}", join(&scored.selected)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("  ·  answer: {}", join(&scored.correct)),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(widget, area);
}

pub(super) fn render_tag_stats(frame: &mut Frame, area: Rect, stats: &[TagStat]) {
    let lines: Vec<Line> = stats
        .iter()
        .map(|stat| {
            let grade = stat.grade();
            let color = super::grade_color(grade);
            Line::from(vec![
                Span::styled(
                    format!("  {:<18}", stat.tag),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>5.1}%", stat.score),
                    Style::default().fg(color).bold(),
                ),
                Span::styled(
                    format!("  {} question(s)  ", stat.count),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(grade.label(), Style::default().fg(color)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" By topic ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn score_marker(scored: &QuestionScore) -> (&'static str, Color) {
    if scored.is_full_credit() {
        ("+", Color::Green)
    } else if scored.score > 0.0 {
        ("~", Color::Yellow)
    } else {
        ("-", Color::Red)
    }
}

fn join(values: &BTreeSet<String>) -> String {
    if values.is_empty() {
        return "-".to_string();
    }
    values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
