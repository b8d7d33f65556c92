//! Custom error types for terminal-budget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for terminal-budget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Generic validation errors (empty names, bad input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed ISO currency code
    #[error("Invalid currency code '{0}': must be exactly 3 letters")]
    InvalidCurrencyCode(String),

    /// Amount text that does not parse as a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Positional wallet index outside the current wallet list
    #[error("Index {index} is out of range ({})", range_hint(.len))]
    IndexOutOfRange { index: i64, len: usize },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The rate table for the base currency has no entry for this code
    #[error("No exchange rate found for {0}")]
    RateNotFound(String),

    /// A single rate source failed
    #[error("Network error: {0}")]
    Network(String),

    /// Every rate source failed; carries the last failure
    #[error("Exchange rates unavailable: {0}")]
    RatesUnavailable(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

fn range_hint(len: &usize) -> String {
    let len = *len;
    if len == 0 {
        "no wallets".to_string()
    } else {
        format!("0-{}", len - 1)
    }
}

impl BudgetError {
    /// Create a "not found" error for budget files
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget file",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for budget files
    pub fn budget_exists(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Budget file",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for wallets
    pub fn wallet_exists(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Wallet",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::RateNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::InvalidCurrencyCode(_)
                | Self::InvalidAmount(_)
                | Self::IndexOutOfRange { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for BudgetError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for terminal-budget operations
pub type BudgetResult<T> = Result<T, BudgetError>;
