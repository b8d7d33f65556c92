//! terminal-budget - Terminal wallet tracker
//!
//! Wallets live in named budget files. The interactive session lists them in a
//! table, keeps a running total in any currency, and edits them through a small
//! command language and a creation wizard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Base directory and settings
//! - `error`: Custom error types
//! - `models`: Wallets and budget files
//! - `storage`: The `BudgetStore` trait and its JSON implementation
//! - `currency`: Rate sources, the rate cache and conversion
//! - `session`: The interactive state machine, independent of any terminal
//! - `tui`: ratatui rendering and crossterm input for the session
//! - `display`: Plain text output for the CLI subcommands
//!
//! # Example
//!
//! ```rust,ignore
//! use terminal_budget::config::{BudgetPaths, Settings};
//! use terminal_budget::storage::JsonBudgetStore;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = JsonBudgetStore::new(paths, settings.default_base.clone())?;
//! ```

pub mod config;
pub mod currency;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
