//! TUI views
//!
//! One module per screen. Each renders a piece of [`ScreenView`]; none of them
//! touch the session directly.

pub mod budget_creation;
pub mod greeting;
pub mod wallets;
pub mod wizard;

use ratatui::Frame;

use crate::session::view::ScreenView;

use super::dialogs;

/// Render the whole frame for the active screen
pub fn render(frame: &mut Frame, view: &ScreenView<'_>) {
    let area = frame.area();
    match view {
        ScreenView::Greeting(v) => greeting::render(frame, v, area),
        ScreenView::BudgetCreation(v) => budget_creation::render(frame, v, area),
        ScreenView::Wallets(v) => wallets::render(frame, v, area),
        ScreenView::Wizard(v) => wizard::render(frame, v, area),
        ScreenView::Confirmation(v) => dialogs::confirm::render(frame, v),
    }
}
