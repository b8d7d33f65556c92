//! In-memory collaborators for session tests

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::currency::{RateLookup, RateTable};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetFile, Wallet};
use crate::storage::BudgetStore;

use super::{Key, Screen, Session};

/// Budget files kept in a map, counting every save
#[derive(Default)]
pub struct MemoryStore {
    files: RefCell<BTreeMap<String, BudgetFile>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding one USD budget with `wallets`
    pub fn with_wallets(name: &str, wallets: Vec<Wallet>) -> Self {
        let store = Self::new();
        let mut file = BudgetFile::new(name, "USD");
        file.wallets = wallets;
        store.files.borrow_mut().insert(name.to_string(), file);
        store
    }

    pub fn saves(&self) -> usize {
        self.saves.get()
    }
}

impl BudgetStore for MemoryStore {
    fn list_budgets(&self) -> BudgetResult<Vec<BudgetFile>> {
        let mut files: Vec<BudgetFile> = self.files.borrow().values().cloned().collect();
        files.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(files)
    }

    fn load_budget(&self, name: &str) -> BudgetResult<BudgetFile> {
        self.files
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| BudgetError::budget_not_found(name))
    }

    fn create_budget(&self, name: &str) -> BudgetResult<()> {
        BudgetFile::validate_name(name)?;
        let mut files = self.files.borrow_mut();
        if files.contains_key(name) {
            return Err(BudgetError::budget_exists(name));
        }
        files.insert(name.to_string(), BudgetFile::new(name, "USD"));
        Ok(())
    }

    fn save_budget(&self, file: &mut BudgetFile) -> BudgetResult<()> {
        file.touch();
        self.saves.set(self.saves.get() + 1);
        self.files
            .borrow_mut()
            .insert(file.name.clone(), file.clone());
        Ok(())
    }

    fn delete_budget(&self, name: &str) -> BudgetResult<()> {
        self.files
            .borrow_mut()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| BudgetError::budget_not_found(name))
    }
}

/// Rate lookup that is always offline
pub struct NoRates;

impl RateLookup for NoRates {
    fn rates(&self, _base: &str) -> BudgetResult<RateTable> {
        Err(BudgetError::RatesUnavailable("offline".into()))
    }
}

/// Rate lookup answering with one fixed table
pub struct FixedRates(RateTable);

impl FixedRates {
    /// USD-based table with the given extra rates
    pub fn usd(pairs: &[(&str, f64)]) -> Self {
        let mut table: RateTable = pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        table.insert("USD".to_string(), 1.0);
        Self(table)
    }
}

impl RateLookup for FixedRates {
    fn rates(&self, _base: &str) -> BudgetResult<RateTable> {
        Ok(self.0.clone())
    }
}

/// Session on the greeting screen with a fixed greeting seed
pub fn session<'a>(store: &'a MemoryStore, rates: &'a dyn RateLookup) -> Session<'a> {
    Session::new(store, rates, StdRng::seed_from_u64(7))
}

/// Session with `budget` already open on the wallet screen
pub fn session_on_wallets<'a>(
    store: &'a MemoryStore,
    rates: &'a dyn RateLookup,
    budget: &str,
) -> Session<'a> {
    let mut session = session(store, rates);
    session.open_budget(budget);
    assert!(matches!(session.screen(), Screen::Wallet));
    session
}

impl Session<'_> {
    /// Type a command line and press Enter
    pub(crate) fn handle_line(&mut self, line: &str) {
        for c in line.chars() {
            self.handle(Key::Char(c));
        }
        self.handle(Key::Enter);
    }
}
