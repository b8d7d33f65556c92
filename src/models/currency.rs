//! Currency code handling
//!
//! Codes are plain ISO-4217 style strings; there is no registry of known
//! currencies, only a shape check.

use crate::error::{BudgetError, BudgetResult};

/// Normalize a currency code: trimmed, upper-cased, exactly three ASCII letters
pub fn normalize_code(code: &str) -> BudgetResult<String> {
    let normalized = code.trim().to_uppercase();

    if normalized.len() != 3 || !normalized.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(BudgetError::InvalidCurrencyCode(code.to_string()));
    }

    Ok(normalized)
}

/// Check whether a code would pass [`normalize_code`]
pub fn is_valid_code(code: &str) -> bool {
    normalize_code(code).is_ok()
}
