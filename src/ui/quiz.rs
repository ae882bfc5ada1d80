use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Question;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        let widget = Paragraph::new("This quiz has no questions")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app, question);
    render_question_text(frame, chunks[1], &question.text);
    render_options(frame, chunks[2], app, question);
    render_selection(frame, chunks[3], app);

    let controls = if app.is_last_question() {
        "j/k navigate  ·  space select  ·  c clear  ·  ← back  ·  f finish  ·  q quit"
    } else {
        "j/k navigate  ·  space select  ·  c clear  ·  ←/→ move  ·  f finish  ·  q quit"
    };
    super::render_controls(frame, chunks[4], controls);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App, question: &Question) {
    let mode = if question.is_multiple() {
        "several answers"
    } else {
        "one answer"
    };
    let tags = if question.tags.is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = question.tags.iter().map(String::as_str).collect();
        format!("{}  ·  ", names.join(", "))
    };

    let widget = Paragraph::new(format!(
        "{}{}  ·  {}/{}",
        tags,
        mode,
        app.current_question_number(),
        app.total_questions()
    ))
    .alignment(Alignment::Right)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, question: &Question) {
    let picked = app.current_answer();
    let mut lines: Vec<Line> = Vec::with_capacity(question.choices.len() * 2);

    for (index, option) in question.choices.iter().enumerate() {
        let is_cursor = index == app.selected_option();
        let is_picked = picked.is_some_and(|p| p.contains(option));
        let style = match (is_cursor, is_picked) {
            (true, _) => Style::default().fg(Color::Cyan).bold(),
            (false, true) => Style::default().fg(Color::Green),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let marker = if is_cursor { ">" } else { " " };
        let checkbox = match (question.is_multiple(), is_picked) {
            (true, true) => "[x]",
            (true, false) => "[ ]",
            (false, true) => "(*)",
            (false, false) => "( )",
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{} ", checkbox), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Color::DarkGray)
                .padding(Padding::vertical(1)),
        );
    frame.render_widget(widget, area);
}

fn render_selection(frame: &mut Frame, area: Rect, app: &App) {
    let text = match app.current_answer() {
        Some(picked) if !picked.is_empty() => {
            let names: Vec<&str> = picked.iter().map(String::as_str).collect();
            format!("Selected: {}", names.join(", "))
        }
        _ => "Nothing selected".to_string(),
    };
    let widget = Paragraph::new(text).fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
