//! User settings for terminal-budget
//!
//! Rate source endpoints, cache lifetime and bootstrap preferences.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// User settings, persisted as `config.json` in the base directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Primary rate endpoint; `{base}` is replaced by the base currency code
    #[serde(default = "default_primary_api")]
    pub primary_api: String,

    /// Fallback rate endpoint, queried when the primary fails
    #[serde(default = "default_backup_api")]
    pub backup_api: String,

    /// Lifetime of a cached rate table, in seconds
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: i64,

    /// Currency assigned to newly created budget files
    #[serde(default = "default_base")]
    pub default_base: String,

    /// Upper bound on a single rate request
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Seed the "example" budget when no budget files exist
    #[serde(default = "default_seed_example")]
    pub seed_example: bool,
}

fn default_primary_api() -> String {
    "https://api.frankfurter.dev/v1/latest?base={base}".to_string()
}

fn default_backup_api() -> String {
    "https://open.er-api.com/v6/latest/{base}".to_string()
}

fn default_cache_ttl() -> i64 {
    3600
}

fn default_base() -> String {
    "USD".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_seed_example() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            primary_api: default_primary_api(),
            backup_api: default_backup_api(),
            cache_ttl: default_cache_ttl(),
            default_base: default_base(),
            request_timeout_secs: default_request_timeout(),
            seed_example: default_seed_example(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
