//! Layout definitions for the TUI
//!
//! Every screen is a single column: a bordered content panel on top, then the
//! rows specific to that screen below it.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of the wallet screen
pub struct WalletLayout {
    /// Wallet table with the total line
    pub table: Rect,
    /// Command input
    pub input: Rect,
    /// Result or error message
    pub message: Rect,
    /// Command hints
    pub hints: Rect,
}

impl WalletLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),    // Table + total
                Constraint::Length(3), // Input box
                Constraint::Length(3), // Message (help spans three lines)
                Constraint::Length(3), // Hints
            ])
            .split(area);

        Self {
            table: chunks[0],
            input: chunks[1],
            message: chunks[2],
            hints: chunks[3],
        }
    }
}

/// Regions of the wallet creation wizard
pub struct WizardLayout {
    pub header: Rect,
    pub options: Rect,
    pub input: Rect,
    pub current: Rect,
    pub footer: Rect,
}

impl WizardLayout {
    pub fn new(area: Rect, options: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),           // Title + step prompt
                Constraint::Length(options + 2), // Options list
                Constraint::Length(3),           // Text input
                Constraint::Length(1),           // Current values
                Constraint::Min(2),              // Error + instructions
            ])
            .split(area);

        Self {
            header: chunks[0],
            options: chunks[1],
            input: chunks[2],
            current: chunks[3],
            footer: chunks[4],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 5);
        let rect = centered_rect_fixed(50, 7, area);
        assert_eq!(rect, Rect::new(0, 0, 40, 5));

        let rect = centered_rect_fixed(20, 3, Rect::new(0, 0, 40, 11));
        assert_eq!(rect, Rect::new(10, 4, 20, 3));
    }

    #[test]
    fn test_wallet_layout_keeps_bottom_rows() {
        let layout = WalletLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.message.height, 3);
        assert_eq!(layout.hints.height, 3);
        assert_eq!(layout.table.height, 15);
    }
}
