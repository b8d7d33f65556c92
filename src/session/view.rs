//! Declarative description of the current screen
//!
//! Built from the session on every frame and handed to the renderer, which only
//! decides layout and styling.

use chrono::{DateTime, Utc};

use crate::models::Wallet;

use super::input::LineEditor;
use super::totals::{is_excluded, TOTAL_LINE_WIDTH};
use super::wizard::{WizardDraft, WizardStep};
use super::{Screen, Session};

pub const GREETING_QUESTION: &str = "What budget are we dealing with today?";
pub const CREATE_BUDGET_ROW: &str = "Create new budget...";

#[derive(Debug)]
pub enum ScreenView<'a> {
    Greeting(GreetingView<'a>),
    BudgetCreation(BudgetCreationView<'a>),
    Wallets(WalletsView<'a>),
    Wizard(WizardView<'a>),
    Confirmation(ConfirmationView<'a>),
}

#[derive(Debug)]
pub struct FileRow<'a> {
    pub name: &'a str,
    pub updated_at: DateTime<Utc>,
    pub wallets: usize,
}

#[derive(Debug)]
pub struct GreetingView<'a> {
    pub greeting: &'a str,
    pub files: Vec<FileRow<'a>>,
    /// Index into `files`; equal to `files.len()` for the create row
    pub selected: usize,
    pub error: Option<&'a str>,
}

#[derive(Debug)]
pub struct BudgetCreationView<'a> {
    pub input: &'a LineEditor,
    pub error: Option<&'a str>,
}

#[derive(Debug)]
pub struct WalletRow<'a> {
    pub index: usize,
    pub wallet: &'a Wallet,
    /// Hidden or filtered out; drawn struck through and left out of the total
    pub excluded: bool,
}

#[derive(Debug)]
pub struct WalletsView<'a> {
    pub budget: &'a str,
    pub rows: Vec<WalletRow<'a>>,
    pub total_line: String,
    pub input: &'a LineEditor,
    pub result: Option<&'a str>,
    pub error: Option<&'a str>,
    pub hints: [&'static str; 3],
}

#[derive(Debug)]
pub struct WizardView<'a> {
    pub step: WizardStep,
    pub prompt: String,
    pub suggestions: &'a [String],
    pub selected: usize,
    /// Typed characters reach the input on this step
    pub accepts_text: bool,
    pub input: &'a LineEditor,
    /// "Current: Name: ... | Type: ..." once anything is filled in
    pub current: Option<String>,
    pub instructions: String,
    pub error: Option<&'a str>,
}

#[derive(Debug)]
pub struct ConfirmationView<'a> {
    pub prompt: &'a str,
}

impl Session<'_> {
    /// Describe the active screen
    pub fn view(&self) -> ScreenView<'_> {
        match &self.screen {
            Screen::Greeting(state) => ScreenView::Greeting(GreetingView {
                greeting: self.greeting,
                files: state
                    .files
                    .iter()
                    .map(|f| FileRow {
                        name: &f.name,
                        updated_at: f.updated_at,
                        wallets: f.wallets.len(),
                    })
                    .collect(),
                selected: state.selected,
                error: self.error.as_deref(),
            }),
            Screen::BudgetCreation(state) => ScreenView::BudgetCreation(BudgetCreationView {
                input: &state.input,
                error: state.error.as_deref(),
            }),
            Screen::Wallet => ScreenView::Wallets(self.wallets_view()),
            Screen::WalletCreation(draft) => ScreenView::Wizard(wizard_view(draft)),
            Screen::Confirmation(pending) => ScreenView::Confirmation(ConfirmationView {
                prompt: &pending.prompt,
            }),
        }
    }

    fn wallets_view(&self) -> WalletsView<'_> {
        let rows = self
            .wallets
            .iter()
            .enumerate()
            .map(|(index, wallet)| WalletRow {
                index,
                wallet,
                excluded: is_excluded(index, wallet, &self.hidden, &self.filters),
            })
            .collect();

        WalletsView {
            budget: self.budget.as_deref().unwrap_or_default(),
            rows,
            total_line: self.totals.line(TOTAL_LINE_WIDTH),
            input: &self.command,
            result: self.result.as_deref(),
            error: self.error.as_deref(),
            hints: command_hints(self.command.value()),
        }
    }
}

fn wizard_view(draft: &WizardDraft) -> WizardView<'_> {
    let step = draft.step();

    let filled = [
        ("Name", &draft.wallet.name),
        ("Type", &draft.wallet.wallet_type),
        ("Currency", &draft.wallet.currency),
        ("Owner", &draft.wallet.owner),
    ];
    let values: Vec<String> = filled
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect();
    let current = (!values.is_empty()).then(|| format!("Current: {}", values.join(" | ")));

    let first = if step == WizardStep::Name || (!draft.suggestions().is_empty() && draft.is_free_text()) {
        "Type and press Enter"
    } else if !draft.suggestions().is_empty() {
        "Use ↑↓ to select, Enter to continue"
    } else {
        "Press Enter to continue"
    };

    WizardView {
        step,
        prompt: format!("Step {} of 5. {}", step.number(), step.prompt()),
        suggestions: draft.suggestions(),
        selected: draft.selected(),
        accepts_text: draft.accepts_text(),
        input: draft.input(),
        current,
        instructions: format!("{}  |  Esc to cancel", first),
        error: draft.error(),
    }
}

/// Help lines for the command being typed, keyed on its first two letters
pub fn command_hints(input: &str) -> [&'static str; 3] {
    let prefix: String = input.chars().take(2).collect();
    match prefix.as_str() {
        "fi" => [
            "Filter calculated wallets by owner, type, or currency:",
            "'filter owner <name>' | 'filter type <type>' | 'filter currency <code>' | 'filter reset'",
            "'filter reset' clears all the filters applied.",
        ],
        "hi" => [
            "Exclude wallets from calculations by index:",
            "'hide 0,2,3' (comma-separated indexes)",
            "",
        ],
        "cu" => [
            "Set display currency for total calculation:",
            "'currency <CURRENCY_CODE>' (e.g., USD, EUR, GBP)",
            "",
        ],
        "ne" => [
            "Create new wallet:",
            "command 'new' launches wallet creation wizard",
            "",
        ],
        "ad" => [
            "Adjust wallet balance by index:",
            "'adjust <index> <amount>'",
            "(e.g., 'adjust 0 +100', 'adjust 1 -50', 'adjust 2 500')",
        ],
        "de" => ["Delete wallet by index:", "'delete <index>'", ""],
        _ => [
            "Available commands:",
            "new |  adjust  |  hide  |  filter  |  currency  |  delete",
            "",
        ],
    }
}

/// "just now", "5 minutes ago", "yesterday", ...
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);

    if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    }
    if elapsed.num_hours() < 1 {
        return match elapsed.num_minutes() {
            1 => "1 minute ago".to_string(),
            n => format!("{} minutes ago", n),
        };
    }
    if elapsed.num_days() < 1 {
        return match elapsed.num_hours() {
            1 => "1 hour ago".to_string(),
            n => format!("{} hours ago", n),
        };
    }
    match elapsed.num_days() {
        1 => "yesterday".to_string(),
        n => format!("{} days ago", n),
    }
}
