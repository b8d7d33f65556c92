//! Key routing for each screen

use tracing::{info, warn};

use super::confirm::PendingAction;
use super::input::Key;
use super::wizard::WizardOutcome;
use super::{BudgetCreationState, Screen, Session};

/// Whether the session keeps running after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

impl Session<'_> {
    /// Process one key press to completion
    pub fn handle(&mut self, key: Key) -> Outcome {
        if key == Key::ForceQuit {
            info!(screen = self.screen.name(), "force quit");
            return Outcome::Quit;
        }

        match self.screen {
            Screen::Greeting(_) => return self.on_greeting(key),
            Screen::BudgetCreation(_) => self.on_budget_creation(key),
            Screen::Wallet => self.on_wallet(key),
            Screen::WalletCreation(_) => self.on_wallet_creation(key),
            Screen::Confirmation(_) => self.on_confirmation(key),
        }
        Outcome::Continue
    }

    fn on_greeting(&mut self, key: Key) -> Outcome {
        let Screen::Greeting(state) = &mut self.screen else {
            return Outcome::Continue;
        };

        match key {
            Key::Esc => {
                info!("leaving from greeting");
                return Outcome::Quit;
            }
            Key::Up => state.selected = state.selected.saturating_sub(1),
            Key::Down => {
                if state.selected < state.files.len() {
                    state.selected += 1;
                }
            }
            Key::Enter => {
                let chosen = state.files.get(state.selected).map(|f| f.name.clone());
                match chosen {
                    Some(name) => self.open_budget(&name),
                    None => self.transition(Screen::BudgetCreation(BudgetCreationState::default())),
                }
            }
            Key::Char('d') | Key::Delete => {
                let chosen = state.files.get(state.selected).map(|f| f.name.clone());
                if let Some(name) = chosen {
                    let prompt = format!(
                        "Are you sure you want to delete the budget file '{}'?",
                        name
                    );
                    self.stage_confirmation(prompt, PendingAction::DeleteBudget { name });
                }
            }
            _ => {}
        }
        Outcome::Continue
    }

    fn on_budget_creation(&mut self, key: Key) {
        let Screen::BudgetCreation(state) = &mut self.screen else {
            return;
        };

        match key {
            Key::Esc => self.close_budget(),
            Key::Enter => {
                let name = state.input.value().trim().to_string();
                if name.is_empty() {
                    return;
                }
                match self.store.create_budget(&name) {
                    Ok(()) => {
                        info!(budget = %name, "created budget file");
                        self.open_budget(&name);
                    }
                    Err(e) => {
                        warn!(budget = %name, error = %e, "budget file creation failed");
                        state.error = Some(e.to_string());
                    }
                }
            }
            other => {
                if state.input.apply(other) {
                    state.error = None;
                }
            }
        }
    }

    fn on_wallet(&mut self, key: Key) {
        match key {
            Key::Esc => self.close_budget(),
            Key::Enter => {
                let line = self.command.take();
                self.error = None;
                let message = self.run_command(&line);
                self.result = (!message.is_empty()).then_some(message);
            }
            other => {
                self.command.apply(other);
            }
        }
    }

    fn on_wallet_creation(&mut self, key: Key) {
        let Screen::WalletCreation(draft) = &mut self.screen else {
            return;
        };

        match key {
            Key::Esc => {
                info!("wallet creation cancelled");
                self.return_to_wallets();
            }
            Key::Enter => {
                let Some(budget) = self.budget.as_deref() else {
                    return;
                };
                if let WizardOutcome::Created(name) = draft.submit(self.store, budget) {
                    info!(budget, wallet = %name, "wallet created");
                    self.return_to_wallets();
                    self.result = Some(format!("Created wallet '{}'", name));
                }
            }
            other => {
                draft.handle_key(other);
            }
        }
    }

    fn return_to_wallets(&mut self) {
        self.transition(Screen::Wallet);
        if let Err(e) = self.reload_wallets() {
            self.error = Some(format!("Failed to reload wallets: {}", e));
        }
    }

    fn on_confirmation(&mut self, key: Key) {
        let accepted = match key {
            Key::Char('y' | 'Y') => true,
            Key::Char('n' | 'N') | Key::Esc => false,
            _ => return,
        };

        match std::mem::take(&mut self.screen) {
            Screen::Confirmation(pending) => self.resolve_confirmation(pending, accepted),
            other => self.screen = other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Wallet;
    use crate::session::testing::{session, session_on_wallets, MemoryStore, NoRates};
    use crate::session::WizardStep;
    use crate::storage::BudgetStore;

    fn type_text(session: &mut Session<'_>, text: &str) {
        for c in text.chars() {
            session.handle(Key::Char(c));
        }
    }

    #[test]
    fn test_greeting_navigation_and_quit() {
        let store = MemoryStore::new();
        store.create_budget("a").unwrap();
        let rates = NoRates;
        let mut session = session(&store, &rates);

        session.handle(Key::Up);
        session.handle(Key::Down);
        session.handle(Key::Down);
        let Screen::Greeting(state) = session.screen() else {
            panic!("expected greeting");
        };
        // one file plus the create row
        assert_eq!(state.selected, 1);
        assert!(state.on_create_row());

        assert_eq!(session.handle(Key::Esc), Outcome::Quit);
    }

    #[test]
    fn test_force_quit_from_any_screen() {
        let store = MemoryStore::with_wallets("home", vec![]);
        let rates = NoRates;
        let mut session = session_on_wallets(&store, &rates, "home");
        session.handle_line("new");
        assert!(matches!(session.screen(), Screen::WalletCreation(_)));
        assert_eq!(session.handle(Key::ForceQuit), Outcome::Quit);
    }

    #[test]
    fn test_create_budget_flow() {
        let store = MemoryStore::new();
        let rates = NoRates;
        let mut session = session(&store, &rates);

        // no files: the only row is "Create new budget..."
        session.handle(Key::Enter);
        assert!(matches!(session.screen(), Screen::BudgetCreation(_)));

        // empty name is ignored
        session.handle(Key::Enter);
        assert!(matches!(session.screen(), Screen::BudgetCreation(_)));

        type_text(&mut session, "travel");
        session.handle(Key::Enter);
        assert!(matches!(session.screen(), Screen::Wallet));
        assert_eq!(session.budget(), Some("travel"));
        assert!(session.wallets().is_empty());
    }

    #[test]
    fn test_budget_creation_failure_is_shown() {
        let store = MemoryStore::new();
        store.create_budget("taken").unwrap();
        let rates = NoRates;
        let mut session = session(&store, &rates);

        session.handle(Key::Down);
        session.handle(Key::Enter);
        type_text(&mut session, "taken");
        session.handle(Key::Enter);

        let Screen::BudgetCreation(state) = session.screen() else {
            panic!("expected budget creation");
        };
        assert!(state.error.as_deref().unwrap().contains("already exists"));

        session.handle(Key::Esc);
        let Screen::Greeting(state) = session.screen() else {
            panic!("expected greeting");
        };
        assert_eq!(state.files.len(), 1);
    }

    #[test]
    fn test_escape_from_wallets_clears_budget_state() {
        let store = MemoryStore::with_wallets(
            "home",
            vec![Wallet::new("Cash", "me", "cash", "USD", 1.0)],
        );
        let rates = NoRates;
        let mut session = session_on_wallets(&store, &rates, "home");
        session.handle_line("hide 0");
        session.handle_line("filter owner me");
        session.handle_line("currency EUR");

        session.handle(Key::Esc);
        assert!(matches!(session.screen(), Screen::Greeting(_)));
        assert_eq!(session.budget(), None);
        assert!(session.hidden().is_empty());
        assert!(!session.filters().is_active());
        assert_eq!(session.display_currency(), None);
        assert_eq!(session.last_result(), None);
    }

    #[test]
    fn test_wizard_round_trip_through_keys() {
        let store = MemoryStore::with_wallets("home", vec![]);
        let rates = NoRates;
        let mut session = session_on_wallets(&store, &rates, "home");

        session.handle_line("new");
        type_text(&mut session, "Travel fund");
        session.handle(Key::Enter);
        session.handle(Key::Down);
        session.handle(Key::Enter); // cash
        session.handle(Key::Down);
        session.handle(Key::Down);
        session.handle(Key::Enter); // GBP
        session.handle(Key::Enter); // User
        let Screen::WalletCreation(draft) = session.screen() else {
            panic!("expected wizard");
        };
        assert_eq!(draft.step(), WizardStep::Balance);

        type_text(&mut session, "42.5");
        session.handle(Key::Enter);

        assert!(matches!(session.screen(), Screen::Wallet));
        assert_eq!(session.last_result(), Some("Created wallet 'Travel fund'"));
        let wallet = &session.wallets()[0];
        assert_eq!(wallet.wallet_type, "cash");
        assert_eq!(wallet.currency, "GBP");
        assert_eq!(wallet.owner, "User");
        assert_eq!(wallet.balance, 42.5);
    }

    #[test]
    fn test_wizard_cancel_discards_draft() {
        let store = MemoryStore::with_wallets("home", vec![]);
        let rates = NoRates;
        let mut session = session_on_wallets(&store, &rates, "home");

        session.handle_line("new");
        type_text(&mut session, "Half done");
        session.handle(Key::Enter);
        session.handle(Key::Esc);

        assert!(matches!(session.screen(), Screen::Wallet));
        assert!(store.load_budget("home").unwrap().wallets.is_empty());

        session.handle_line("new");
        let Screen::WalletCreation(draft) = session.screen() else {
            panic!("expected wizard");
        };
        assert_eq!(draft.step(), WizardStep::Name);
        assert!(draft.wallet.name.is_empty());
    }

    #[test]
    fn test_unrelated_keys_on_confirmation_are_ignored() {
        let store = MemoryStore::with_wallets(
            "home",
            vec![Wallet::new("Cash", "me", "cash", "USD", 1.0)],
        );
        let rates = NoRates;
        let mut session = session_on_wallets(&store, &rates, "home");

        session.handle_line("delete 0");
        session.handle(Key::Char('x'));
        session.handle(Key::Enter);
        assert!(matches!(session.screen(), Screen::Confirmation(_)));

        session.handle(Key::Char('n'));
        assert!(matches!(session.screen(), Screen::Wallet));
        assert_eq!(session.wallets().len(), 1);
    }
}
