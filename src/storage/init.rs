//! Storage initialization
//!
//! First-run sample data so the greeting screen is never empty.

use tracing::info;

use crate::error::BudgetResult;
use crate::models::NewWallet;

use super::BudgetStore;

/// Name of the budget file created on first run
pub const EXAMPLE_BUDGET: &str = "example";

/// Create the "example" budget with a handful of sample wallets
///
/// Only meant to run when the store holds no budget files at all.
pub fn seed_example_budget(store: &dyn BudgetStore) -> BudgetResult<()> {
    store.create_budget(EXAMPLE_BUDGET)?;

    let samples = [
        ("Cash Wallet", "User", "cash", "USD", 250.75),
        ("Bank Account", "User", "bank", "USD", 1500.00),
        ("Savings Fund", "User", "bank", "EUR", 800.50),
        ("Investment Portfolio", "User", "invest", "USD", 5000.00),
        ("Emergency Fund", "Family", "bank", "USD", 2000.00),
    ];

    for (name, owner, wallet_type, currency, balance) in samples {
        store.create_wallet(
            EXAMPLE_BUDGET,
            NewWallet {
                name: name.into(),
                owner: owner.into(),
                wallet_type: wallet_type.into(),
                currency: currency.into(),
                balance,
            },
        )?;
    }

    info!("seeded example budget");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::storage::JsonBudgetStore;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[test]
    fn test_seed_example_budget() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = JsonBudgetStore::new(paths, "USD").unwrap();

        seed_example_budget(&store).unwrap();

        let file = store.load_budget(EXAMPLE_BUDGET).unwrap();
        assert_eq!(file.wallets.len(), 5);
        assert_eq!(file.wallets[2].currency, "EUR");
        assert_eq!(file.wallets[4].owner, "Family");

        // A second seed must not clobber the existing file
        assert!(seed_example_budget(&store).is_err());
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_seed_logs_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = JsonBudgetStore::new(paths, "USD").unwrap();

        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            seed_example_budget(&store).unwrap();
        });

        let logged = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logged.matches("seeded example budget").count(), 1);
    }
}
