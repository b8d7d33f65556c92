//! Wallet table, total line and command prompt

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Wallet;
use crate::session::view::{WalletRow, WalletsView};
use crate::tui::layout::WalletLayout;
use crate::tui::widgets::TextInput;

use super::greeting::truncate;

pub fn render(frame: &mut Frame, view: &WalletsView<'_>, area: Rect) {
    let layout = WalletLayout::new(area);

    render_table(frame, view, layout.table);
    render_input(frame, view, layout.input);
    render_message(frame, view, layout.message);

    let hints: Vec<Line> = view
        .hints
        .iter()
        .map(|hint| Line::from(Span::styled(*hint, Style::default().fg(Color::DarkGray))))
        .collect();
    frame.render_widget(Paragraph::new(hints), layout.hints);
}

fn render_table(frame: &mut Frame, view: &WalletsView<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" YOUR BUDGET: {} ", view.budget))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if view.rows.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No wallets found. Would you like to create one?",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::styled(
                "Type 'new' and press Enter",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        header_text(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))];
    lines.extend(view.rows.iter().map(wallet_line));
    lines.push(Line::from("─".repeat(view.total_line.chars().count())));
    lines.push(Line::from(Span::styled(
        view.total_line.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn header_text() -> String {
    format!(
        "    {:<15} {:<12} {:<10} {:>10}  {:<8}",
        "Name", "Owner", "Type", "Balance", "Currency"
    )
}

fn row_text(index: usize, wallet: &Wallet) -> String {
    format!(
        "{:>2}. {:<15} {:<12} {:<10} {:>10.2}  {:<8}",
        index,
        truncate(&wallet.name, 15),
        truncate(&wallet.owner, 12),
        truncate(&wallet.wallet_type, 10),
        wallet.balance,
        wallet.currency
    )
}

fn wallet_line<'a>(row: &WalletRow<'_>) -> Line<'a> {
    let text = row_text(row.index, row.wallet);
    if row.excluded {
        return Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT | Modifier::ITALIC),
        ));
    }

    let balance_color = if row.wallet.balance < 0.0 {
        Color::Red
    } else {
        Color::Green
    };
    // split so only the balance column is colored
    let balance_start = 4 + 15 + 1 + 12 + 1 + 10 + 1;
    let balance_end = balance_start + 10;
    let chars: Vec<char> = text.chars().collect();
    let head: String = chars[..balance_start.min(chars.len())].iter().collect();
    let balance: String = chars[balance_start.min(chars.len())..balance_end.min(chars.len())]
        .iter()
        .collect();
    let tail: String = chars[balance_end.min(chars.len())..].iter().collect();

    Line::from(vec![
        Span::raw(head),
        Span::styled(balance, Style::default().fg(balance_color)),
        Span::raw(tail),
    ])
}

fn render_input(frame: &mut Frame, view: &WalletsView<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        TextInput::new(view.input)
            .label(">")
            .placeholder("Enter command..."),
        inner,
    );
}

fn render_message(frame: &mut Frame, view: &WalletsView<'_>, area: Rect) {
    let text = match (view.error, view.result) {
        (Some(error), _) => Text::styled(error, Style::default().fg(Color::Red)),
        (None, Some(result)) => Text::styled(result, Style::default().fg(Color::Green)),
        (None, None) => Text::default(),
    };
    frame.render_widget(Paragraph::new(text), area);
}
