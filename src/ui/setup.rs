use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::config::{MAX_QUESTION_COUNT, MIN_QUESTION_COUNT};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0], app);
    render_tags(frame, chunks[1], app);
    render_count(frame, chunks[2], app.question_count());
    render_notice(frame, chunks[3], app.notice());
    super::render_controls(
        frame,
        chunks[4],
        "j/k move  ·  space tag  ·  +/- count  ·  enter start  ·  h history  ·  q quit",
    );
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.history().summary();
    let history_line = if summary.total_quizzes == 0 {
        Line::from("No quiz completed yet".fg(Color::DarkGray))
    } else {
        Line::from(Span::styled(
            format!(
                "{} quiz(zes) completed  ·  average {:.1}%  ·  best {:.1}%",
                summary.total_quizzes, summary.average_score, summary.best_score
            ),
            Style::default().fg(Color::DarkGray),
        ))
    };

    let content = vec![
        Line::from(Span::styled(
            "TAG QUIZ",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        history_line,
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_tags(frame: &mut Frame, area: Rect, app: &App) {
    let tags = app.available_tags();
    let mut lines: Vec<Line> = Vec::with_capacity(tags.len() + 1);

    if tags.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No tags in this dataset, every question is eligible",
            Style::default().fg(Color::DarkGray).italic(),
        )));
    }

    for (index, tag) in tags.iter().enumerate() {
        let is_cursor = index == app.tag_cursor();
        let is_selected = app.selected_tags().contains(tag);
        let style = if is_cursor {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_cursor { ">" } else { " " };
        let checkbox = if is_selected { "[x]" } else { "[ ]" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", checkbox), style),
            Span::styled(tag.as_str(), style),
        ]));
    }

    let title = if app.selected_tags().is_empty() {
        " Topics (none selected: all questions) ".to_string()
    } else {
        format!(" Topics ({} selected) ", app.selected_tags().len())
    };

    // Keep the cursor visible on long tag lists.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = app.tag_cursor().saturating_sub(visible.saturating_sub(1));

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title)
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_count(frame: &mut Frame, area: Rect, count: usize) {
    let content = Line::from(vec![
        Span::styled("Questions: ", Style::default().fg(Color::Gray)),
        Span::styled(count.to_string(), Style::default().fg(Color::Green).bold()),
        Span::styled(
            format!("  ({}-{})", MIN_QUESTION_COUNT, MAX_QUESTION_COUNT),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    if let Some(text) = notice {
        let widget = Paragraph::new(text)
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(widget, area);
    }
}
