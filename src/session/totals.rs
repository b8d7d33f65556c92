//! Wallet row exclusion and the total line under the wallet table
//!
//! A row is excluded when it is hidden by index or fails any active filter.
//! Excluded rows are still listed but do not count toward the total.

use std::cell::RefCell;
use std::collections::BTreeSet;

use tracing::debug;

use crate::currency::{ConversionService, RateLookup, RateTable};
use crate::error::{BudgetError, BudgetResult};
use crate::models::Wallet;

/// Width of the total line, matching the wallet table
pub const TOTAL_LINE_WIDTH: usize = 64;

/// Owner/type/currency filters; `None` means "any"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub owner: Option<String>,
    pub wallet_type: Option<String>,
    pub currency: Option<String>,
}

impl Filters {
    pub fn admits(&self, wallet: &Wallet) -> bool {
        let matches = |filter: &Option<String>, value: &str| {
            filter.as_deref().map_or(true, |wanted| wanted == value)
        };
        matches(&self.owner, &wallet.owner)
            && matches(&self.wallet_type, &wallet.wallet_type)
            && matches(&self.currency, &wallet.currency)
    }

    pub fn is_active(&self) -> bool {
        self.owner.is_some() || self.wallet_type.is_some() || self.currency.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn is_excluded(
    index: usize,
    wallet: &Wallet,
    hidden: &BTreeSet<usize>,
    filters: &Filters,
) -> bool {
    hidden.contains(&index) || !filters.admits(wallet)
}

/// Remembers the first answer so one recompute hits the provider at most once
struct OnceRates<'a> {
    inner: &'a dyn RateLookup,
    answer: RefCell<Option<Result<RateTable, String>>>,
}

impl RateLookup for OnceRates<'_> {
    fn rates(&self, base: &str) -> BudgetResult<RateTable> {
        let mut slot = self.answer.borrow_mut();
        let answer = slot.get_or_insert_with(|| self.inner.rates(base).map_err(|e| e.to_string()));
        answer.clone().map_err(BudgetError::RatesUnavailable)
    }
}

/// Sum of the included wallets in one currency
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    pub visible: usize,
    pub amount: f64,
    /// Target currency; empty when the budget has none yet
    pub currency: String,
}

impl Totals {
    /// Sum included wallets in `target`, converting through `base`
    ///
    /// A wallet whose conversion fails contributes its raw balance.
    pub fn compute(
        wallets: &[Wallet],
        hidden: &BTreeSet<usize>,
        filters: &Filters,
        target: &str,
        base: &str,
        rates: &dyn RateLookup,
    ) -> Self {
        let once = OnceRates {
            inner: rates,
            answer: RefCell::new(None),
        };
        let converter = ConversionService::new(&once);

        let mut visible = 0;
        let mut amount = 0.0;
        for (index, wallet) in wallets.iter().enumerate() {
            if is_excluded(index, wallet, hidden, filters) {
                continue;
            }
            visible += 1;

            if wallet.currency == target {
                amount += wallet.balance;
                continue;
            }
            match converter.convert(wallet.balance, &wallet.currency, target, base) {
                Ok(converted) => amount += converted,
                Err(e) => {
                    debug!(wallet = %wallet.name, error = %e, "conversion failed, using raw balance");
                    amount += wallet.balance;
                }
            }
        }

        Self {
            visible,
            amount,
            currency: target.to_string(),
        }
    }

    /// "N wallets" on the left, "T CUR" on the right, padded to `width`
    pub fn line(&self, width: usize) -> String {
        let left = if self.visible == 1 {
            "1 wallet".to_string()
        } else {
            format!("{} wallets", self.visible)
        };
        let right = if self.currency.is_empty() {
            format!("{:.2}", self.amount)
        } else {
            format!("{:.2} {}", self.amount, self.currency)
        };
        let spacing = width
            .saturating_sub(left.chars().count() + right.chars().count())
            .max(1);
        format!("{}{}{}", left, " ".repeat(spacing), right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingRates {
        table: Option<RateTable>,
        calls: Cell<usize>,
    }

    impl RateLookup for CountingRates {
        fn rates(&self, _base: &str) -> BudgetResult<RateTable> {
            self.calls.set(self.calls.get() + 1);
            self.table
                .clone()
                .ok_or_else(|| BudgetError::RatesUnavailable("offline".into()))
        }
    }

    fn wallets() -> Vec<Wallet> {
        vec![
            Wallet::new("Cash", "me", "cash", "USD", 100.0),
            Wallet::new("Euro", "me", "bank", "EUR", 80.0),
            Wallet::new("Joint", "Family", "bank", "USD", 50.0),
        ]
    }

    fn rates(table: Option<RateTable>) -> CountingRates {
        CountingRates {
            table,
            calls: Cell::new(0),
        }
    }

    #[test]
    fn test_filters_and_hidden_exclude_rows() {
        let wallets = wallets();
        let hidden = BTreeSet::from([0]);
        let filters = Filters {
            wallet_type: Some("bank".into()),
            ..Filters::default()
        };

        let excluded: Vec<bool> = wallets
            .iter()
            .enumerate()
            .map(|(i, w)| is_excluded(i, w, &hidden, &filters))
            .collect();
        assert_eq!(excluded, vec![true, false, false]);
        assert!(filters.is_active());
    }

    #[test]
    fn test_total_converts_foreign_wallets() {
        let rates = rates(Some(RateTable::from([("EUR".to_string(), 0.8)])));
        let totals = Totals::compute(
            &wallets(),
            &BTreeSet::new(),
            &Filters::default(),
            "USD",
            "USD",
            &rates,
        );
        assert_eq!(totals.visible, 3);
        assert!((totals.amount - 250.0).abs() < 1e-9);
        assert_eq!(rates.calls.get(), 1);
    }

    #[test]
    fn test_failed_conversion_uses_raw_balance_and_asks_once() {
        let mut all = wallets();
        all.push(Wallet::new("Pounds", "me", "cash", "GBP", 10.0));
        let rates = rates(None);

        let totals = Totals::compute(&all, &BTreeSet::new(), &Filters::default(), "USD", "USD", &rates);
        assert!((totals.amount - 240.0).abs() < 1e-9);
        assert_eq!(rates.calls.get(), 1);
    }

    #[test]
    fn test_same_currency_needs_no_rates() {
        let rates = rates(None);
        let filters = Filters {
            currency: Some("USD".into()),
            ..Filters::default()
        };
        let totals = Totals::compute(&wallets(), &BTreeSet::new(), &filters, "USD", "USD", &rates);
        assert_eq!(totals.visible, 2);
        assert_eq!(totals.amount, 150.0);
        assert_eq!(rates.calls.get(), 0);
    }

    #[test]
    fn test_total_line_layout() {
        let totals = Totals {
            visible: 1,
            amount: 12.5,
            currency: "EUR".into(),
        };
        let line = totals.line(TOTAL_LINE_WIDTH);
        assert!(line.starts_with("1 wallet "));
        assert!(line.ends_with("12.50 EUR"));
        assert_eq!(line.len(), TOTAL_LINE_WIDTH);

        let empty = Totals {
            visible: 0,
            amount: 0.0,
            currency: String::new(),
        };
        assert!(empty.line(20).starts_with("0 wallets"));
        assert!(empty.line(20).ends_with(" 0.00"));
    }
}
