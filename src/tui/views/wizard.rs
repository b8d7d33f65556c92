//! Wallet creation wizard

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::session::view::WizardView;
use crate::tui::layout::WizardLayout;
use crate::tui::widgets::TextInput;

pub fn render(frame: &mut Frame, view: &WizardView<'_>, area: Rect) {
    let block = Block::default()
        .title(" CREATE NEW WALLET ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = WizardLayout::new(inner, view.suggestions.len() as u16);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            view.prompt.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        layout.header,
    );

    if !view.suggestions.is_empty() {
        let items: Vec<ListItem> = view
            .suggestions
            .iter()
            .map(|s| ListItem::new(s.as_str()))
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Options ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(view.selected));
        frame.render_stateful_widget(list, layout.options, &mut state);
    }

    let input_border = if view.accepts_text {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(input_border));
    let input_area = input_block.inner(layout.input);
    frame.render_widget(input_block, layout.input);
    frame.render_widget(
        TextInput::new(view.input)
            .placeholder("Type here...")
            .focused(view.accepts_text),
        input_area,
    );

    if let Some(current) = &view.current {
        frame.render_widget(
            Paragraph::new(Span::styled(
                current.as_str(),
                Style::default().fg(Color::Gray),
            )),
            layout.current,
        );
    }

    let mut footer = Vec::new();
    if let Some(error) = view.error {
        footer.push(Line::from(Span::styled(
            error,
            Style::default().fg(Color::Red),
        )));
    }
    footer.push(Line::from(Span::styled(
        view.instructions.as_str(),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(footer), layout.footer);
}
