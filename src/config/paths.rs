//! Path management for terminal-budget
//!
//! ## Path Resolution Order
//!
//! 1. `TERMINAL_BUDGET_DIR` environment variable (if set)
//! 2. `~/.budget` under the user's home directory

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::BudgetError;

/// Environment variable overriding the base directory
pub const BASE_DIR_ENV: &str = "TERMINAL_BUDGET_DIR";

/// Manages all paths used by terminal-budget
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all data (~/.budget)
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = match std::env::var(BASE_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one JSON document per budget file
    pub fn files_dir(&self) -> PathBuf {
        self.base_dir.join("files")
    }

    /// Path of the JSON document backing the named budget
    pub fn budget_file(&self, name: &str) -> PathBuf {
        self.files_dir().join(format!("{}.json", name))
    }

    /// Single-slot exchange rate cache
    pub fn cache_file(&self) -> PathBuf {
        self.base_dir.join("exchange_cache.json")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("budget.log")
    }

    /// Ensure the base and budget file directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.files_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create files directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| BudgetError::Config("Could not determine home directory".into()))?;
    Ok(dirs.home_dir().join(".budget"))
}
