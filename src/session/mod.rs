//! Interactive session engine
//!
//! [`Session`] is the state machine behind the terminal UI. It owns the active
//! [`Screen`] (with that screen's payload), the loaded budget's wallet snapshot,
//! filters, hidden rows and display currency. Input arrives as [`Key`]s through
//! [`Session::handle`]; output is a [`view::ScreenView`] describing what to draw.
//!
//! Storage and exchange rates are reached only through the [`BudgetStore`] and
//! [`RateLookup`] traits, so the whole engine runs against in-memory stubs in tests.

pub mod commands;
pub mod confirm;
pub mod input;
mod machine;
pub mod totals;
pub mod view;
pub mod wizard;

#[cfg(test)]
pub(crate) mod testing;

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::currency::RateLookup;
use crate::error::BudgetResult;
use crate::models::{BudgetFile, Wallet};
use crate::storage::BudgetStore;

pub use commands::Command;
pub use confirm::{Origin, PendingAction, PendingConfirmation};
pub use input::{Key, LineEditor};
pub use machine::Outcome;
pub use totals::{Filters, Totals};
pub use wizard::{WizardDraft, WizardStep};

/// Opening lines for the greeting screen
pub const GREETINGS: &[&str] = &[
    "hey, how are you?",
    "hi there!",
    "ah, that's you",
    "long time no see, human",
    "here you are",
    "welcome back, friend",
    "good to see you, friend",
    "greetings, traveller",
    "oh, it's you again",
    "look who showed up",
    "hey stranger",
    "nice to have you here",
    "salutations",
    "ahoy!",
    "welcome, human",
    "system online: user detected",
    "hey, commander",
    "ready for action?",
    "glad you made it",
    "hi, friend",
    "hi, wanderer",
    "welcome, adventurer",
    "hail, wayfarer",
    "well met, explorer",
    "ah, a seeker arrives",
    "welcome back, wanderer",
    "hello, kindred spirit",
    "salutations, voyager",
    "the path brings you here again",
    "ah, a fellow traveler of the terminal",
    "welcome, lost soul",
    "good to see you, pilgrim",
    "the journey continues, friend",
    "back from your quest?",
    "hello, drifter",
    "well met, companion",
    "the road greets you once more",
];

/// Budget file picker; the row after the last file is "Create new budget..."
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GreetingState {
    pub files: Vec<BudgetFile>,
    pub selected: usize,
}

impl GreetingState {
    pub fn on_create_row(&self) -> bool {
        self.selected >= self.files.len()
    }
}

/// Name entry for a new budget file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetCreationState {
    pub input: LineEditor,
    pub error: Option<String>,
}

/// The active screen and its payload
#[derive(Debug, PartialEq)]
pub enum Screen {
    Greeting(GreetingState),
    BudgetCreation(BudgetCreationState),
    /// Wallet table; its state lives on the session because it survives the
    /// wizard and confirmation round trips
    Wallet,
    WalletCreation(WizardDraft),
    Confirmation(PendingConfirmation),
}

impl Default for Screen {
    fn default() -> Self {
        Self::Greeting(GreetingState::default())
    }
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Greeting(_) => "greeting",
            Self::BudgetCreation(_) => "budget_creation",
            Self::Wallet => "wallet",
            Self::WalletCreation(_) => "wallet_creation",
            Self::Confirmation(_) => "confirmation",
        }
    }
}

/// One interactive session over a store and a rate source
pub struct Session<'a> {
    store: &'a dyn BudgetStore,
    rates: &'a dyn RateLookup,
    greeting: &'static str,
    screen: Screen,

    budget: Option<String>,
    wallets: Vec<Wallet>,
    /// Effective currency of the loaded budget
    base_currency: String,
    filters: Filters,
    hidden: BTreeSet<usize>,
    display_currency: Option<String>,
    totals: Totals,

    command: LineEditor,
    result: Option<String>,
    error: Option<String>,
}

impl<'a> Session<'a> {
    /// Start on the greeting screen with the current budget file list
    pub fn new(store: &'a dyn BudgetStore, rates: &'a dyn RateLookup, mut rng: StdRng) -> Self {
        let greeting = GREETINGS.choose(&mut rng).copied().unwrap_or("hello");

        let mut session = Self {
            store,
            rates,
            greeting,
            screen: Screen::default(),
            budget: None,
            wallets: Vec::new(),
            base_currency: String::new(),
            filters: Filters::default(),
            hidden: BTreeSet::new(),
            display_currency: None,
            totals: Totals {
                visible: 0,
                amount: 0.0,
                currency: String::new(),
            },
            command: LineEditor::new(),
            result: None,
            error: None,
        };
        session.refresh_files();
        session
    }

    pub fn greeting(&self) -> &str {
        self.greeting
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Name of the loaded budget, if any
    pub fn budget(&self) -> Option<&str> {
        self.budget.as_deref()
    }

    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn hidden(&self) -> &BTreeSet<usize> {
        &self.hidden
    }

    pub fn display_currency(&self) -> Option<&str> {
        self.display_currency.as_deref()
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn command_input(&self) -> &LineEditor {
        &self.command
    }

    /// Message from the last command
    pub fn last_result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Last session-level error
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn transition(&mut self, next: Screen) {
        debug!(from = self.screen.name(), to = next.name(), "screen transition");
        self.screen = next;
    }

    /// Re-list budget files and show the greeting with the first row selected
    fn refresh_files(&mut self) {
        let files = match self.store.list_budgets() {
            Ok(files) => files,
            Err(e) => {
                warn!(error = %e, "failed to list budget files");
                self.error = Some(format!("Failed to list budget files: {}", e));
                Vec::new()
            }
        };
        self.transition(Screen::Greeting(GreetingState { files, selected: 0 }));
    }

    /// Load a budget and switch to its wallet table
    fn open_budget(&mut self, name: &str) {
        self.clear_budget_state();
        self.budget = Some(name.to_string());
        match self.reload_wallets() {
            Ok(()) => {
                debug!(budget = name, wallets = self.wallets.len(), "opened budget");
                self.transition(Screen::Wallet);
            }
            Err(e) => {
                self.budget = None;
                self.error = Some(format!("Error loading wallets: {}", e));
            }
        }
    }

    /// Forget everything tied to the loaded budget
    fn clear_budget_state(&mut self) {
        self.budget = None;
        self.wallets.clear();
        self.base_currency.clear();
        self.filters.clear();
        self.hidden.clear();
        self.display_currency = None;
        self.command.clear();
        self.result = None;
        self.error = None;
        self.recompute_totals();
    }

    /// Leave the wallet table for the greeting screen
    fn close_budget(&mut self) {
        self.clear_budget_state();
        self.refresh_files();
    }

    /// Replace the wallet snapshot with what storage holds now
    fn reload_wallets(&mut self) -> BudgetResult<()> {
        let Some(name) = self.budget.as_deref() else {
            self.wallets.clear();
            return Ok(());
        };
        let file = self.store.load_budget(name)?;
        self.base_currency = file.effective_currency().unwrap_or_default();
        self.wallets = file.wallets;
        self.recompute_totals();
        Ok(())
    }

    /// Currency the total is shown in
    pub fn target_currency(&self) -> &str {
        self.display_currency
            .as_deref()
            .unwrap_or(self.base_currency.as_str())
    }

    fn recompute_totals(&mut self) {
        self.totals = Totals::compute(
            &self.wallets,
            &self.hidden,
            &self.filters,
            self.target_currency(),
            &self.base_currency,
            self.rates,
        );
    }
}
