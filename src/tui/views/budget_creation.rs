//! Budget name entry

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::session::view::BudgetCreationView;
use crate::tui::widgets::TextInput;

pub fn render(frame: &mut Frame, view: &BudgetCreationView<'_>, area: Rect) {
    let block = Block::default()
        .title(" CREATE NEW BUDGET ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Prompt
            Constraint::Length(3), // Input
            Constraint::Min(1),    // Error + help
        ])
        .split(inner);

    frame.render_widget(Paragraph::new("Enter budget name:"), chunks[0]);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let input_area = input_block.inner(chunks[1]);
    frame.render_widget(input_block, chunks[1]);
    frame.render_widget(
        TextInput::new(view.input).placeholder("Budget name"),
        input_area,
    );

    let mut footer = Vec::new();
    if let Some(error) = view.error {
        footer.push(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red),
        )));
    }
    footer.push(Line::from(Span::styled(
        "Press Enter to create  |  Esc to go back",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(footer), chunks[2]);
}
