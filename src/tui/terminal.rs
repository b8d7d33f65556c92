//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

use crate::currency::RateLookup;
use crate::session::{Outcome, Session};
use crate::storage::BudgetStore;

use super::event::{Event, EventHandler};
use super::handler::translate;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run an interactive session until the user quits
pub fn run_tui(store: &dyn BudgetStore, rates: &dyn RateLookup) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut session = Session::new(store, rates, StdRng::from_entropy());
    info!("session started");

    let result = event_loop(&mut terminal, &mut session);

    restore_terminal()?;
    info!("session ended");
    result
}

fn event_loop(terminal: &mut Tui, session: &mut Session<'_>) -> Result<()> {
    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, &session.view());
        })?;

        match events.next()? {
            Event::Key(key_event) => {
                if let Some(key) = translate(key_event) {
                    if session.handle(key) == Outcome::Quit {
                        return Ok(());
                    }
                }
            }
            // redrawn at the top of the loop
            Event::Resize(_, _) | Event::Tick => {}
        }
    }
}
