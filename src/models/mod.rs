//! Core data models for terminal-budget
//!
//! Budget files, the wallets they hold, and currency code handling.

pub mod budget_file;
pub mod currency;
pub mod wallet;

pub use budget_file::{BudgetFile, LegacyBudgetData};
pub use currency::{is_valid_code, normalize_code};
pub use wallet::{NewWallet, Wallet};
