//! Confirmation dialog
//!
//! Yes/no question in front of a destructive action

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::session::view::ConfirmationView;
use crate::tui::layout::centered_rect_fixed;

/// Render the confirmation dialog over the current frame
pub fn render(frame: &mut Frame, view: &ConfirmationView<'_>) {
    let width = (view.prompt.chars().count() as u16 + 4).clamp(50, 80);
    let area = centered_rect_fixed(width, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(view.prompt, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw("es | "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw("o / "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(Span::styled(
            "Press Y to confirm, N or Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
