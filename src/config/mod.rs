//! Configuration module for terminal-budget
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence (rate sources, cache TTL)

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
