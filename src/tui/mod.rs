//! Terminal User Interface module
//!
//! Draws [`crate::session::view::ScreenView`] with ratatui and feeds crossterm
//! key events back into the session.

pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use terminal::run_tui;
