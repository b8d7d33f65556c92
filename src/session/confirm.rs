//! Yes/no gate in front of destructive actions
//!
//! A [`PendingConfirmation`] is the payload of the confirmation screen. Resolving
//! it moves it out of the screen, so an action can run at most once.

use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::storage::BudgetStore;

use super::{GreetingState, Screen, Session};

/// A destructive action waiting for a yes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteWallet { budget: String, index: usize },
    DeleteBudget { name: String },
}

impl PendingAction {
    fn kind(&self) -> ActionKind {
        match self {
            Self::DeleteWallet { .. } => ActionKind::DeleteWallet,
            Self::DeleteBudget { .. } => ActionKind::DeleteBudget,
        }
    }
}

/// Screen to return to once the question is answered
#[derive(Debug, PartialEq)]
pub enum Origin {
    Greeting(GreetingState),
    Wallet,
}

impl Origin {
    fn into_screen(self) -> Screen {
        match self {
            Self::Greeting(state) => Screen::Greeting(state),
            Self::Wallet => Screen::Wallet,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct PendingConfirmation {
    pub prompt: String,
    pub action: PendingAction,
    pub origin: Origin,
}

/// Position of the action's entry in [`HANDLERS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionKind {
    DeleteWallet = 0,
    DeleteBudget = 1,
}

/// How one kind of action is carried out, and what follows a success
struct ActionHandler {
    kind: ActionKind,
    label: &'static str,
    run: fn(&dyn BudgetStore, &PendingAction) -> BudgetResult<()>,
    after: fn(&mut Session<'_>),
}

static HANDLERS: [ActionHandler; 2] = [
    ActionHandler {
        kind: ActionKind::DeleteWallet,
        label: "delete_wallet",
        run: run_delete_wallet,
        after: after_delete_wallet,
    },
    ActionHandler {
        kind: ActionKind::DeleteBudget,
        label: "delete_budget",
        run: run_delete_budget,
        after: after_delete_budget,
    },
];

fn handler_for(action: &PendingAction) -> &'static ActionHandler {
    let handler = &HANDLERS[action.kind() as usize];
    debug_assert_eq!(handler.kind, action.kind());
    handler
}

fn mismatched(action: &PendingAction) -> BudgetError {
    BudgetError::Validation(format!("no handler accepts {:?}", action))
}

fn run_delete_wallet(store: &dyn BudgetStore, action: &PendingAction) -> BudgetResult<()> {
    let PendingAction::DeleteWallet { budget, index } = action else {
        return Err(mismatched(action));
    };
    store.delete_wallet(budget, *index).map(|_| ())
}

fn run_delete_budget(store: &dyn BudgetStore, action: &PendingAction) -> BudgetResult<()> {
    let PendingAction::DeleteBudget { name } = action else {
        return Err(mismatched(action));
    };
    store.delete_budget(name)
}

/// Positions shifted, so hidden indices no longer point at the same wallets
fn after_delete_wallet(session: &mut Session<'_>) {
    if let Err(e) = session.reload_wallets() {
        session.error = Some(format!("Wallet deleted, but failed to reload: {}", e));
    }
    session.hidden.clear();
    session.recompute_totals();
}

fn after_delete_budget(session: &mut Session<'_>) {
    session.refresh_files();
}

impl Session<'_> {
    /// Put `action` behind a yes/no question, remembering where we came from
    pub(super) fn stage_confirmation(&mut self, prompt: String, action: PendingAction) {
        let from = self.screen.name();
        let origin = match std::mem::take(&mut self.screen) {
            Screen::Greeting(state) => Origin::Greeting(state),
            _ => Origin::Wallet,
        };
        info!(from, action = ?action, "confirmation requested");
        self.screen = Screen::Confirmation(PendingConfirmation {
            prompt,
            action,
            origin,
        });
    }

    /// Answer the pending question
    ///
    /// Always returns to the origin screen. On yes the action runs; if it
    /// fails the error is recorded and the continuation is skipped.
    pub(super) fn resolve_confirmation(&mut self, pending: PendingConfirmation, accepted: bool) {
        let PendingConfirmation { action, origin, .. } = pending;
        self.transition(origin.into_screen());

        let handler = handler_for(&action);
        if !accepted {
            info!(action = handler.label, "confirmation declined");
            return;
        }

        match (handler.run)(self.store, &action) {
            Ok(()) => {
                info!(action = handler.label, "confirmed action completed");
                (handler.after)(self);
            }
            Err(e) => {
                warn!(action = handler.label, error = %e, "confirmed action failed");
                self.error = Some(format!("Action failed: {}", e));
            }
        }
    }
}
