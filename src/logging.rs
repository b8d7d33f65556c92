//! Tracing setup
//!
//! Logs go to a file in the base directory; the terminal belongs to the TUI.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "terminal_budget=info";

/// Install the global subscriber, appending to `log_file`
///
/// Safe to call more than once. If the log file cannot be opened, logging
/// stays disabled.
pub fn init_tracing(log_file: &Path) {
    TRACING_INIT.call_once(|| {
        let file = match OpenOptions::new().create(true).append(true).open(log_file) {
            Ok(file) => file,
            Err(_) => return,
        };

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init();
    });
}
