//! Budget file model
//!
//! A budget file is a named, ordered collection of wallets with a default currency.
//! Wallets are addressed by position, so removing one shifts every later index down.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wallet::Wallet;
use crate::error::{BudgetError, BudgetResult};

/// A budget file as persisted on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetFile {
    /// File name without extension; immutable once created
    pub name: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Wallets in display order
    #[serde(default)]
    pub wallets: Vec<Wallet>,

    /// Default currency code; empty means unset
    #[serde(default)]
    pub default_currency: String,
}

impl BudgetFile {
    /// Create an empty budget file
    pub fn new(name: impl Into<String>, default_currency: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created_at: now,
            updated_at: now,
            wallets: Vec::new(),
            default_currency: default_currency.into(),
        }
    }

    /// Check that a name can be used as a file stem on every platform
    pub fn validate_name(name: &str) -> BudgetResult<()> {
        if name.trim().is_empty() {
            return Err(BudgetError::Validation("Budget name is required".into()));
        }
        if name.len() > 64 {
            return Err(BudgetError::Validation(
                "Budget name too long (max 64 chars)".into(),
            ));
        }
        if name.starts_with('.')
            || name
                .chars()
                .any(|c| matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        {
            return Err(BudgetError::Validation(format!(
                "Budget name '{}' contains characters not allowed in file names",
                name
            )));
        }
        Ok(())
    }

    /// Re-stamp the last-updated time
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Currency used for totals: the explicit default, else the first wallet's currency
    pub fn effective_currency(&self) -> BudgetResult<String> {
        if !self.default_currency.is_empty() {
            return Ok(self.default_currency.clone());
        }
        self.wallets
            .first()
            .map(|w| w.currency.clone())
            .ok_or_else(|| {
                BudgetError::Validation(
                    "no default currency set and no wallets exist".to_string(),
                )
            })
    }

    /// Validate a positional index against the current wallet list
    pub fn check_index(&self, index: usize) -> BudgetResult<()> {
        if index >= self.wallets.len() {
            return Err(BudgetError::IndexOutOfRange {
                index: index as i64,
                len: self.wallets.len(),
            });
        }
        Ok(())
    }

    pub fn has_wallet_named(&self, name: &str) -> bool {
        self.wallets.iter().any(|w| w.name == name)
    }

    /// Distinct values of a wallet field, in first-seen order
    pub fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&Wallet) -> &str,
    {
        let mut values: Vec<String> = Vec::new();
        for wallet in &self.wallets {
            let value = field(wallet);
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
        values
    }
}

/// Pre-`name` on-disk layout, still accepted on load
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyBudgetData {
    #[serde(default)]
    pub wallets: Vec<Wallet>,
    #[serde(default)]
    pub default_currency: String,
}

impl LegacyBudgetData {
    /// Upgrade to the current layout, inferring a default currency if needed
    pub fn upgrade(self, name: impl Into<String>) -> BudgetFile {
        let mut file = BudgetFile::new(name, self.default_currency);
        file.wallets = self.wallets;
        if file.default_currency.is_empty() {
            if let Some(first) = file.wallets.first() {
                file.default_currency = first.currency.clone();
            }
        }
        file
    }
}
