//! Display formatting for plain terminal output
//!
//! Used by the non-interactive subcommands.

pub mod budget;

pub use budget::{format_budget_list, format_wallet_list};
