//! JSON file store for budget files
//!
//! Each budget lives in `<base>/files/<name>.json`. Files written before budgets
//! carried their own name are upgraded in place the first time they are loaded.

use std::fs;

use tracing::{info, warn};

use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{normalize_code, BudgetFile, LegacyBudgetData};

use super::file_io::{read_json_value, write_json_atomic};
use super::BudgetStore;

/// Budget files stored as JSON documents under the base directory
pub struct JsonBudgetStore {
    paths: BudgetPaths,
    default_currency: String,
}

impl JsonBudgetStore {
    /// Create a store; new budget files get `default_currency`
    ///
    /// The currency is normalized up front, so a bad configured code fails here.
    pub fn new(paths: BudgetPaths, default_currency: impl Into<String>) -> BudgetResult<Self> {
        let default_currency = normalize_code(&default_currency.into())?;
        paths.ensure_directories()?;
        Ok(Self {
            paths,
            default_currency,
        })
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    fn parse(&self, name: &str, value: serde_json::Value) -> BudgetResult<BudgetFile> {
        let has_name = value
            .get("name")
            .and_then(|n| n.as_str())
            .is_some_and(|n| !n.is_empty());

        if has_name {
            return serde_json::from_value(value).map_err(|e| {
                BudgetError::Storage(format!("Failed to parse budget file '{}': {}", name, e))
            });
        }

        let legacy: LegacyBudgetData = serde_json::from_value(value).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to parse budget file '{}' in any known format: {}",
                name, e
            ))
        })?;

        let mut upgraded = legacy.upgrade(name);
        info!(budget = name, "upgrading legacy budget file");
        if let Err(e) = self.save_budget(&mut upgraded) {
            warn!(budget = name, error = %e, "failed to re-save upgraded budget file");
        }
        Ok(upgraded)
    }
}

impl BudgetStore for JsonBudgetStore {
    fn list_budgets(&self) -> BudgetResult<Vec<BudgetFile>> {
        let dir = self.paths.files_dir();
        fs::create_dir_all(&dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create budgets directory: {}", e)))?;

        let entries = fs::read_dir(&dir)
            .map_err(|e| BudgetError::Io(format!("Failed to read budgets directory: {}", e)))?;

        let mut files = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match self.load_budget(stem) {
                Ok(file) => files.push(file),
                Err(e) => warn!(file = %path.display(), error = %e, "skipping unreadable budget file"),
            }
        }

        files.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(files)
    }

    fn load_budget(&self, name: &str) -> BudgetResult<BudgetFile> {
        let path = self.paths.budget_file(name);
        if !path.exists() {
            return Err(BudgetError::budget_not_found(name));
        }
        let value = read_json_value(&path)?;
        self.parse(name, value)
    }

    fn create_budget(&self, name: &str) -> BudgetResult<()> {
        BudgetFile::validate_name(name)?;

        let path = self.paths.budget_file(name);
        if path.exists() {
            return Err(BudgetError::budget_exists(name));
        }

        let file = BudgetFile::new(name, self.default_currency.clone());
        write_json_atomic(&path, &file)?;
        info!(budget = name, "created budget file");
        Ok(())
    }

    fn save_budget(&self, file: &mut BudgetFile) -> BudgetResult<()> {
        file.touch();
        write_json_atomic(self.paths.budget_file(&file.name), file)
    }

    fn delete_budget(&self, name: &str) -> BudgetResult<()> {
        let path = self.paths.budget_file(name);
        if !path.exists() {
            return Err(BudgetError::budget_not_found(name));
        }
        fs::remove_file(&path).map_err(|e| {
            BudgetError::Io(format!("Failed to delete budget file '{}': {}", name, e))
        })?;
        info!(budget = name, "deleted budget file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewWallet;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonBudgetStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = JsonBudgetStore::new(paths, "USD").unwrap();
        (temp_dir, store)
    }

    fn wallet(name: &str, currency: &str, balance: f64) -> NewWallet {
        NewWallet {
            name: name.into(),
            owner: "me".into(),
            wallet_type: "bank".into(),
            currency: currency.into(),
            balance,
        }
    }

    #[test]
    fn test_create_and_load() {
        let (_temp_dir, store) = create_test_store();
        store.create_budget("household").unwrap();

        let file = store.load_budget("household").unwrap();
        assert_eq!(file.name, "household");
        assert_eq!(file.default_currency, "USD");
        assert!(file.wallets.is_empty());
    }

    #[test]
    fn test_default_currency_is_validated() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let err = JsonBudgetStore::new(paths.clone(), "dollars").err().unwrap();
        assert!(matches!(err, BudgetError::InvalidCurrencyCode(code) if code == "dollars"));

        let store = JsonBudgetStore::new(paths, " eur ").unwrap();
        store.create_budget("trip").unwrap();
        assert_eq!(store.load_budget("trip").unwrap().default_currency, "EUR");
    }

    #[test]
    fn test_create_duplicate_budget_fails() {
        let (_temp_dir, store) = create_test_store();
        store.create_budget("household").unwrap();

        let err = store.create_budget("household").unwrap_err();
        assert!(matches!(err, BudgetError::Duplicate { .. }));
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load_budget("nope").unwrap_err().is_not_found());
        assert!(store.delete_budget("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_wallet_rules() {
        let (_temp_dir, store) = create_test_store();
        store.create_budget("b").unwrap();

        store.create_wallet("b", wallet("Cash", "usd", 1.0)).unwrap();
        let file = store.load_budget("b").unwrap();
        assert_eq!(file.wallets[0].currency, "USD");

        let dup = store.create_wallet("b", wallet("Cash", "EUR", 2.0)).unwrap_err();
        assert!(matches!(dup, BudgetError::Duplicate { .. }));

        let bad = store.create_wallet("b", wallet("Other", "EURO", 2.0)).unwrap_err();
        assert!(matches!(bad, BudgetError::InvalidCurrencyCode(_)));

        assert_eq!(store.load_budget("b").unwrap().wallets.len(), 1);
    }

    #[test]
    fn test_balance_mutations_and_delete_shift() {
        let (_temp_dir, store) = create_test_store();
        store.create_budget("b").unwrap();
        for (name, balance) in [("A", 1.0), ("B", 2.0), ("C", 3.0)] {
            store.create_wallet("b", wallet(name, "USD", balance)).unwrap();
        }

        store.adjust_wallet_balance("b", 0, 10.0).unwrap();
        store.set_wallet_balance("b", 2, 99.0).unwrap();
        assert!(store.set_wallet_balance("b", 3, 1.0).is_err());

        let removed = store.delete_wallet("b", 1).unwrap();
        assert_eq!(removed.name, "B");

        let file = store.load_budget("b").unwrap();
        let names: Vec<_> = file.wallets.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(file.wallets[0].balance, 11.0);
        assert_eq!(file.wallets[1].balance, 99.0);
    }

    #[test]
    fn test_list_sorted_by_updated_and_skips_garbage() {
        let (temp_dir, store) = create_test_store();
        store.create_budget("older").unwrap();
        store.create_budget("newer").unwrap();
        store.create_wallet("newer", wallet("Cash", "USD", 1.0)).unwrap();
        fs::write(temp_dir.path().join("files").join("broken.json"), "{{{").unwrap();
        fs::write(temp_dir.path().join("files").join("notes.txt"), "hi").unwrap();

        let names: Vec<_> = store
            .list_budgets()
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["newer", "older"]);
    }

    #[test]
    fn test_legacy_file_is_upgraded_on_load() {
        let (temp_dir, store) = create_test_store();
        let path = temp_dir.path().join("files").join("legacy.json");
        fs::write(
            &path,
            r#"{"wallets":[{"name":"Cash","owner":"me","type":"cash","currency":"GBP","balance":12.5}],"default_currency":""}"#,
        )
        .unwrap();

        let file = store.load_budget("legacy").unwrap();
        assert_eq!(file.name, "legacy");
        assert_eq!(file.default_currency, "GBP");

        let rewritten: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(rewritten["name"], "legacy");
    }
}
