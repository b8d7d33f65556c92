//! Wallet creation wizard
//!
//! Five steps: name, type, currency, owner, balance. The middle three offer the
//! values already used in the budget plus a trailing "custom" entry that switches
//! to free text.

use tracing::{debug, warn};

use crate::models::{BudgetFile, NewWallet, Wallet};
use crate::storage::BudgetStore;

use super::input::{Key, LineEditor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Name,
    Type,
    Currency,
    Owner,
    Balance,
}

impl WizardStep {
    /// 1-based position for display
    pub fn number(self) -> usize {
        match self {
            Self::Name => 1,
            Self::Type => 2,
            Self::Currency => 3,
            Self::Owner => 4,
            Self::Balance => 5,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::Name => Some(Self::Type),
            Self::Type => Some(Self::Currency),
            Self::Currency => Some(Self::Owner),
            Self::Owner => Some(Self::Balance),
            Self::Balance => None,
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::Name => "Name your new wallet",
            Self::Type => "What's your wallet type?",
            Self::Currency => "What currency?",
            Self::Owner => "Who owns this wallet?",
            Self::Balance => "Initial balance (or press Enter for 0.00)",
        }
    }

    /// Label of the trailing free-text entry, for steps that offer suggestions
    pub fn custom_label(self) -> Option<&'static str> {
        match self {
            Self::Type => Some("custom: enter new type..."),
            Self::Currency => Some("custom: enter currency code..."),
            Self::Owner => Some("custom: enter owner name..."),
            Self::Name | Self::Balance => None,
        }
    }

    /// Suggestions offered when the budget has no wallets yet
    fn defaults(self) -> &'static [&'static str] {
        match self {
            Self::Type => &["bank", "cash", "invest"],
            Self::Currency => &["USD", "EUR", "GBP"],
            Self::Owner => &["User"],
            Self::Name | Self::Balance => &[],
        }
    }

    fn field_of(self, wallet: &Wallet) -> &str {
        match self {
            Self::Name => &wallet.name,
            Self::Type => &wallet.wallet_type,
            Self::Currency => &wallet.currency,
            Self::Owner => &wallet.owner,
            Self::Balance => "",
        }
    }
}

/// Result of submitting the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Still in the wizard (rejected input, mode switch, or next step)
    Pending,
    /// The wallet with this name was written to storage
    Created(String),
}

/// Suggestion list for `step`, ending with the custom entry
///
/// Uses the distinct existing values of the budget in first-seen order, or the
/// step defaults when the budget has no wallets (or could not be read).
pub fn suggestions_for(step: WizardStep, file: Option<&BudgetFile>) -> Vec<String> {
    let Some(custom) = step.custom_label() else {
        return Vec::new();
    };

    let mut options = match file {
        Some(file) if !file.wallets.is_empty() => file.distinct(|w| step.field_of(w)),
        _ => step.defaults().iter().map(|s| s.to_string()).collect(),
    };
    options.push(custom.to_string());
    options
}

/// In-progress wallet plus the wizard's input state
#[derive(Debug, Clone, PartialEq)]
pub struct WizardDraft {
    pub wallet: NewWallet,
    step: WizardStep,
    input: LineEditor,
    suggestions: Vec<String>,
    selected: usize,
    free_text: bool,
    error: Option<String>,
}

impl Default for WizardDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardDraft {
    pub fn new() -> Self {
        Self {
            wallet: NewWallet::default(),
            step: WizardStep::Name,
            input: LineEditor::new(),
            suggestions: Vec::new(),
            selected: 0,
            free_text: false,
            error: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn input(&self) -> &LineEditor {
        &self.input
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_free_text(&self) -> bool {
        self.free_text
    }

    /// Last rejection, shown under the input
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether typed characters go into the buffer
    pub fn accepts_text(&self) -> bool {
        self.suggestions.is_empty() || self.free_text
    }

    fn on_custom_entry(&self) -> bool {
        !self.suggestions.is_empty() && self.selected == self.suggestions.len() - 1
    }

    /// Apply a non-submit key; returns false if the key means nothing here
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Up | Key::Down if !self.suggestions.is_empty() => {
                if key == Key::Up {
                    self.selected = self.selected.saturating_sub(1);
                } else if self.selected + 1 < self.suggestions.len() {
                    self.selected += 1;
                }
                self.free_text = self.on_custom_entry();
                if !self.free_text {
                    self.input.clear();
                }
                true
            }
            _ if self.accepts_text() => self.input.apply(key),
            _ => false,
        }
    }

    /// Submit the current step
    pub fn submit(&mut self, store: &dyn BudgetStore, budget: &str) -> WizardOutcome {
        let text = self.input.value().trim().to_string();

        match self.step {
            WizardStep::Name => {
                if text.is_empty() {
                    return WizardOutcome::Pending;
                }
                self.wallet.name = text;
            }
            WizardStep::Type | WizardStep::Currency | WizardStep::Owner => {
                let value = if self.free_text {
                    if text.is_empty() {
                        return WizardOutcome::Pending;
                    }
                    text
                } else if self.on_custom_entry() {
                    self.free_text = true;
                    return WizardOutcome::Pending;
                } else {
                    match self.suggestions.get(self.selected) {
                        Some(value) => value.clone(),
                        None => return WizardOutcome::Pending,
                    }
                };
                match self.step {
                    WizardStep::Type => self.wallet.wallet_type = value,
                    WizardStep::Currency => self.wallet.currency = value.to_uppercase(),
                    _ => self.wallet.owner = value,
                }
            }
            WizardStep::Balance => return self.finish(store, budget, &text),
        }

        self.advance(store, budget);
        WizardOutcome::Pending
    }

    fn finish(&mut self, store: &dyn BudgetStore, budget: &str, text: &str) -> WizardOutcome {
        let balance = if text.is_empty() {
            0.0
        } else {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => value,
                _ => {
                    self.error = Some(format!("Invalid amount: {}", text));
                    return WizardOutcome::Pending;
                }
            }
        };
        self.wallet.balance = balance;

        match store.create_wallet(budget, self.wallet.clone()) {
            Ok(()) => WizardOutcome::Created(self.wallet.name.clone()),
            Err(e) => {
                warn!(budget, wallet = %self.wallet.name, error = %e, "wallet creation rejected");
                self.error = Some(e.to_string());
                WizardOutcome::Pending
            }
        }
    }

    fn advance(&mut self, store: &dyn BudgetStore, budget: &str) {
        let Some(next) = self.step.next() else {
            return;
        };
        debug!(step = next.number(), "wizard step");

        self.step = next;
        self.input.clear();
        self.selected = 0;
        self.free_text = false;
        self.error = None;

        let file = store.load_budget(budget).ok();
        self.suggestions = suggestions_for(next, file.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::MemoryStore;

    fn type_text(draft: &mut WizardDraft, text: &str) {
        for c in text.chars() {
            draft.handle_key(Key::Char(c));
        }
    }

    fn empty_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.create_budget("home").unwrap();
        store
    }

    #[test]
    fn test_default_suggestion_sets() {
        let store = empty_store();
        let mut draft = WizardDraft::new();
        assert!(draft.suggestions().is_empty());

        type_text(&mut draft, "Wallet");
        draft.submit(&store, "home");
        assert_eq!(draft.step(), WizardStep::Type);
        assert_eq!(
            draft.suggestions(),
            ["bank", "cash", "invest", "custom: enter new type..."]
        );

        draft.submit(&store, "home");
        assert_eq!(draft.wallet.wallet_type, "bank");
        assert_eq!(
            draft.suggestions(),
            ["USD", "EUR", "GBP", "custom: enter currency code..."]
        );

        draft.submit(&store, "home");
        assert_eq!(draft.suggestions(), ["User", "custom: enter owner name..."]);
    }

    #[test]
    fn test_existing_values_in_first_seen_order() {
        let store = MemoryStore::with_wallets(
            "home",
            vec![
                Wallet::new("A", "Family", "invest", "EUR", 1.0),
                Wallet::new("B", "me", "cash", "USD", 1.0),
                Wallet::new("C", "Family", "invest", "EUR", 1.0),
            ],
        );
        let file = store.load_budget("home").unwrap();
        assert_eq!(
            suggestions_for(WizardStep::Type, Some(&file)),
            ["invest", "cash", "custom: enter new type..."]
        );
        assert_eq!(
            suggestions_for(WizardStep::Owner, Some(&file)),
            ["Family", "me", "custom: enter owner name..."]
        );
        assert!(suggestions_for(WizardStep::Balance, Some(&file)).is_empty());
    }

    #[test]
    fn test_empty_name_stays_on_step() {
        let store = empty_store();
        let mut draft = WizardDraft::new();
        type_text(&mut draft, "   ");
        assert_eq!(draft.submit(&store, "home"), WizardOutcome::Pending);
        assert_eq!(draft.step(), WizardStep::Name);
    }

    #[test]
    fn test_custom_entry_switches_to_free_text() {
        let store = empty_store();
        let mut draft = WizardDraft::new();
        type_text(&mut draft, "Travel");
        draft.submit(&store, "home");
        draft.submit(&store, "home");
        assert_eq!(draft.step(), WizardStep::Currency);

        // typing is ignored while a suggestion is selected
        type_text(&mut draft, "x");
        assert!(draft.input().is_empty());

        for _ in 0..3 {
            draft.handle_key(Key::Down);
        }
        assert!(draft.is_free_text());
        type_text(&mut draft, "jpy");

        // moving off the custom entry clears the buffer
        draft.handle_key(Key::Up);
        assert!(!draft.is_free_text());
        assert!(draft.input().is_empty());

        draft.handle_key(Key::Down);
        type_text(&mut draft, "jpy");
        draft.submit(&store, "home");
        assert_eq!(draft.wallet.currency, "JPY");
        assert_eq!(draft.step(), WizardStep::Owner);
        assert!(!draft.is_free_text());
    }

    #[test]
    fn test_submit_on_custom_entry_enters_free_text() {
        let store = empty_store();
        let mut draft = WizardDraft::new();
        type_text(&mut draft, "Travel");
        draft.submit(&store, "home");
        draft.submit(&store, "home");
        draft.submit(&store, "home");
        assert_eq!(draft.step(), WizardStep::Owner);

        draft.handle_key(Key::Down);
        assert!(draft.is_free_text());
        // empty free text is rejected
        draft.submit(&store, "home");
        assert_eq!(draft.step(), WizardStep::Owner);

        type_text(&mut draft, "Partner");
        draft.submit(&store, "home");
        assert_eq!(draft.wallet.owner, "Partner");
        assert_eq!(draft.step(), WizardStep::Balance);
    }

    #[test]
    fn test_balance_step_creates_wallet() {
        let store = empty_store();
        let mut draft = WizardDraft::new();
        type_text(&mut draft, "Savings");
        draft.submit(&store, "home");
        draft.submit(&store, "home");
        draft.submit(&store, "home");
        draft.submit(&store, "home");

        type_text(&mut draft, "abc");
        assert_eq!(draft.submit(&store, "home"), WizardOutcome::Pending);
        assert_eq!(draft.error(), Some("Invalid amount: abc"));

        draft.handle_key(Key::Home);
        for _ in 0..3 {
            draft.handle_key(Key::Delete);
        }
        assert_eq!(
            draft.submit(&store, "home"),
            WizardOutcome::Created("Savings".into())
        );

        let file = store.load_budget("home").unwrap();
        let wallet = &file.wallets[0];
        assert_eq!(wallet.name, "Savings");
        assert_eq!(wallet.wallet_type, "bank");
        assert_eq!(wallet.currency, "USD");
        assert_eq!(wallet.owner, "User");
        assert_eq!(wallet.balance, 0.0);
    }

    #[test]
    fn test_duplicate_name_keeps_wizard_open() {
        let store = MemoryStore::with_wallets(
            "home",
            vec![Wallet::new("Cash", "me", "cash", "USD", 1.0)],
        );
        let mut draft = WizardDraft::new();
        type_text(&mut draft, "Cash");
        for _ in 0..4 {
            draft.submit(&store, "home");
        }
        assert_eq!(draft.step(), WizardStep::Balance);

        type_text(&mut draft, "5");
        assert_eq!(draft.submit(&store, "home"), WizardOutcome::Pending);
        assert_eq!(draft.step(), WizardStep::Balance);
        assert!(draft.error().unwrap().contains("already exists"));
        assert_eq!(store.load_budget("home").unwrap().wallets.len(), 1);
    }
}
