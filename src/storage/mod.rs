//! Storage layer for terminal-budget
//!
//! Budget files are whole-document snapshots addressed by name. The session engine
//! only talks to the [`BudgetStore`] trait; [`JsonBudgetStore`] is the on-disk
//! implementation.

pub mod budgets;
pub mod file_io;
pub mod init;

pub use budgets::JsonBudgetStore;
pub use file_io::{read_json_optional, write_json_atomic};
pub use init::seed_example_budget;

use tracing::debug;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{normalize_code, BudgetFile, NewWallet, Wallet};

/// Document store for budget files
///
/// Wallet mutations are expressed in terms of load/save so every change
/// re-stamps the file and persists the full snapshot. Indices are 0-based and
/// positional within the wallet sequence at call time.
pub trait BudgetStore {
    /// All readable budget files, most recently updated first
    fn list_budgets(&self) -> BudgetResult<Vec<BudgetFile>>;

    fn load_budget(&self, name: &str) -> BudgetResult<BudgetFile>;

    /// Create an empty budget file; fails if one with this name exists
    fn create_budget(&self, name: &str) -> BudgetResult<()>;

    /// Persist the snapshot, stamping its updated time
    fn save_budget(&self, file: &mut BudgetFile) -> BudgetResult<()>;

    fn delete_budget(&self, name: &str) -> BudgetResult<()>;

    /// Append a wallet; the name must be unique and the currency a valid code
    fn create_wallet(&self, budget: &str, fields: NewWallet) -> BudgetResult<()> {
        let mut file = self.load_budget(budget)?;

        if fields.name.trim().is_empty() {
            return Err(BudgetError::Validation("Wallet name is required".into()));
        }
        if file.has_wallet_named(&fields.name) {
            return Err(BudgetError::wallet_exists(&fields.name));
        }
        let currency = normalize_code(&fields.currency)?;

        let wallet = NewWallet { currency, ..fields }.into_wallet();
        debug!(budget, wallet = %wallet.name, "creating wallet");
        file.wallets.push(wallet);
        self.save_budget(&mut file)
    }

    /// Add `delta` to the balance of the wallet at `index`
    fn adjust_wallet_balance(&self, budget: &str, index: usize, delta: f64) -> BudgetResult<()> {
        let mut file = self.load_budget(budget)?;
        file.check_index(index)?;
        file.wallets[index].balance += delta;
        self.save_budget(&mut file)
    }

    /// Replace the balance of the wallet at `index`
    fn set_wallet_balance(&self, budget: &str, index: usize, value: f64) -> BudgetResult<()> {
        let mut file = self.load_budget(budget)?;
        file.check_index(index)?;
        file.wallets[index].balance = value;
        self.save_budget(&mut file)
    }

    /// Remove the wallet at `index`, shifting later wallets down by one
    fn delete_wallet(&self, budget: &str, index: usize) -> BudgetResult<Wallet> {
        let mut file = self.load_budget(budget)?;
        file.check_index(index)?;
        let removed = file.wallets.remove(index);
        debug!(budget, index, wallet = %removed.name, "deleting wallet");
        self.save_budget(&mut file)?;
        Ok(removed)
    }
}
