//! Greeting view: pick a budget file or create one

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::session::view::{format_time_ago, GreetingView, CREATE_BUDGET_ROW, GREETING_QUESTION};

/// Budget names longer than this are cut with "..."
const NAME_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, view: &GreetingView<'_>, area: Rect) {
    let now = Utc::now();
    let selected_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            view.greeting,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(GREETING_QUESTION),
        Line::from(""),
    ];

    for (i, file) in view.files.iter().enumerate() {
        let marker = if i == view.selected { "[x] " } else { "[ ] " };
        let text = format!(
            "{}{:<width$} Updated {}",
            marker,
            truncate(file.name, NAME_WIDTH),
            format_time_ago(file.updated_at, now),
            width = NAME_WIDTH
        );
        let style = if i == view.selected {
            selected_style
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    let on_create = view.selected >= view.files.len();
    let create_marker = if on_create { "[x] " } else { "[ ] " };
    lines.push(Line::from(Span::styled(
        format!("{}{}", create_marker, CREATE_BUDGET_ROW),
        if on_create {
            selected_style
        } else {
            Style::default().fg(Color::Green)
        },
    )));

    lines.push(Line::from(""));
    lines.push(Line::from("─".repeat(area.width.saturating_sub(2) as usize)));
    lines.push(Line::from(Span::styled(
        "Use ↑↓ to select, ⏎ to open  |  [d] or Delete to delete",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "[ctrl+c] to quit the app",
        Style::default().fg(Color::DarkGray),
    )));

    if let Some(error) = view.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red),
        )));
    }

    let block = Block::default()
        .title(" Budget ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Cut `s` to `max` characters, ending in "..." when shortened
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max <= 3 {
        return s.chars().take(max).collect();
    }
    let kept: String = s.chars().take(max - 3).collect();
    format!("{}...", kept)
}
