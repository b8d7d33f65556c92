//! Command language of the wallet screen
//!
//! Whitespace-separated tokens; the first picks the command. Every line yields a
//! message for the result line, including bad input.

use tracing::debug;

use crate::error::{BudgetError, BudgetResult};

use super::confirm::PendingAction;
use super::wizard::WizardDraft;
use super::{Screen, Session};

pub const HELP_TEXT: &str = "Available commands:\n\
    adjust 0 +100 | delete 1 | hide 0,2\n\
    new | filter owner alice | currency USD";

const FILTER_USAGE: &str =
    "Usage: filter owner <name> | filter type <type> | filter currency <code> | filter reset";
const FILTER_FIELD_USAGE: &str =
    "Usage: filter owner <name> | filter type <type> | filter currency <code>";
const HIDE_USAGE: &str = "Usage: hide 0,2,3 (comma-separated indexes)";
const CURRENCY_USAGE: &str = "Usage: currency <CURRENCY_CODE>";
const ADJUST_USAGE: &str =
    "Usage: adjust <index> <amount> (e.g., adjust 0 +100, adjust 1 -50, adjust 2 500)";
const DELETE_USAGE: &str = "Usage: delete <index>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Owner,
    Type,
    Currency,
}

impl FilterField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Type => "type",
            Self::Currency => "currency",
        }
    }
}

/// Signed amounts move the balance, unsigned ones replace it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BalanceChange {
    Delta(f64),
    Set(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Empty line
    Refresh,
    Help,
    Filter { field: FilterField, value: String },
    ResetFilters,
    Hide(Vec<i64>),
    Currency(String),
    New,
    Adjust { index: i64, change: BalanceChange },
    Delete(i64),
}

impl Command {
    /// Parse one line; `Err` carries the message to show instead
    pub fn parse(line: &str) -> Result<Self, String> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = tokens.split_first() else {
            return Ok(Self::Refresh);
        };

        match head {
            "help" => Ok(Self::Help),
            "filter" => parse_filter(args),
            "hide" => {
                if args.is_empty() {
                    return Err(HIDE_USAGE.to_string());
                }
                let joined = args.join(",");
                let indices = joined
                    .split(',')
                    .filter(|token| !token.trim().is_empty())
                    .map(parse_index)
                    .collect::<Result<Vec<_>, _>>()?;
                if indices.is_empty() {
                    return Err(HIDE_USAGE.to_string());
                }
                Ok(Self::Hide(indices))
            }
            "currency" => match args.first() {
                Some(code) => Ok(Self::Currency(code.to_uppercase())),
                None => Err(CURRENCY_USAGE.to_string()),
            },
            "new" => Ok(Self::New),
            "adjust" => match args {
                [index, amount, ..] => Ok(Self::Adjust {
                    index: parse_index(index)?,
                    change: parse_change(amount)?,
                }),
                _ => Err(ADJUST_USAGE.to_string()),
            },
            "delete" => match args.first() {
                Some(index) => Ok(Self::Delete(parse_index(index)?)),
                None => Err(DELETE_USAGE.to_string()),
            },
            other => Err(format!(
                "Unknown command: {}. Type 'help' for available commands.",
                other
            )),
        }
    }
}

fn parse_filter(args: &[&str]) -> Result<Command, String> {
    let Some((&field, rest)) = args.split_first() else {
        return Err(FILTER_USAGE.to_string());
    };
    if field == "reset" {
        return Ok(Command::ResetFilters);
    }
    if rest.is_empty() {
        return Err(FILTER_FIELD_USAGE.to_string());
    }

    let value = rest.join(" ");
    let (field, value) = match field {
        "owner" => (FilterField::Owner, value),
        "type" => (FilterField::Type, value),
        "currency" => (FilterField::Currency, value.to_uppercase()),
        _ => return Err(FILTER_FIELD_USAGE.to_string()),
    };
    Ok(Command::Filter { field, value })
}

fn parse_index(token: &str) -> Result<i64, String> {
    let token = token.trim();
    token
        .parse::<i64>()
        .map_err(|_| format!("Invalid index: {}", token))
}

fn parse_change(token: &str) -> Result<BalanceChange, String> {
    let value = token
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| BudgetError::InvalidAmount(token.to_string()).to_string())?;

    if token.starts_with(|c: char| c == '+' || c == '-') {
        Ok(BalanceChange::Delta(value))
    } else {
        Ok(BalanceChange::Set(value))
    }
}

impl Session<'_> {
    /// Run one command line and return the message for the result line
    pub(super) fn run_command(&mut self, line: &str) -> String {
        match Command::parse(line) {
            Ok(command) => {
                debug!(?command, "running command");
                self.execute(command)
            }
            Err(message) => message,
        }
    }

    fn execute(&mut self, command: Command) -> String {
        match command {
            Command::Refresh => match self.reload_wallets() {
                Ok(()) => "Display refreshed".to_string(),
                Err(e) => format!("Failed to reload wallets: {}", e),
            },
            Command::Help => HELP_TEXT.to_string(),
            Command::ResetFilters => {
                self.filters.clear();
                self.hidden.clear();
                self.recompute_totals();
                "Filters cleared".to_string()
            }
            Command::Filter { field, value } => {
                let message = format!("Filtering by {}: {}", field.label(), value);
                match field {
                    FilterField::Owner => self.filters.owner = Some(value),
                    FilterField::Type => self.filters.wallet_type = Some(value),
                    FilterField::Currency => self.filters.currency = Some(value),
                }
                self.recompute_totals();
                message
            }
            Command::Hide(indices) => self.hide(&indices),
            Command::Currency(code) => {
                let message = format!("Display currency changed to {}", code);
                self.display_currency = Some(code);
                self.recompute_totals();
                message
            }
            Command::New => {
                self.transition(Screen::WalletCreation(WizardDraft::new()));
                String::new()
            }
            Command::Adjust { index, change } => self.adjust(index, change),
            Command::Delete(index) => self.request_delete(index),
        }
    }

    /// Map a user index onto the current snapshot
    fn wallet_index(&self, index: i64) -> BudgetResult<usize> {
        let len = self.wallets.len();
        usize::try_from(index)
            .ok()
            .filter(|&i| i < len)
            .ok_or(BudgetError::IndexOutOfRange { index, len })
    }

    /// Hide every listed row, or none if any index is bad
    fn hide(&mut self, indices: &[i64]) -> String {
        let checked = indices
            .iter()
            .map(|&index| self.wallet_index(index))
            .collect::<BudgetResult<Vec<usize>>>();

        match checked {
            Ok(rows) => {
                self.hidden.extend(rows.iter().copied());
                self.recompute_totals();
                format!("Hidden {} wallet(s)", rows.len())
            }
            Err(e) => e.to_string(),
        }
    }

    fn adjust(&mut self, index: i64, change: BalanceChange) -> String {
        let Some(budget) = self.budget.clone() else {
            return "No budget loaded".to_string();
        };
        let index = match self.wallet_index(index) {
            Ok(index) => index,
            Err(e) => return e.to_string(),
        };

        let written = match change {
            BalanceChange::Delta(delta) => self.store.adjust_wallet_balance(&budget, index, delta),
            BalanceChange::Set(value) => self.store.set_wallet_balance(&budget, index, value),
        };
        if let Err(e) = written {
            return format!("Failed to adjust wallet: {}", e);
        }
        if let Err(e) = self.reload_wallets() {
            return format!("Wallet adjusted, but failed to reload: {}", e);
        }

        let name = self
            .wallets
            .get(index)
            .map(|w| w.name.as_str())
            .unwrap_or("wallet");
        match change {
            BalanceChange::Delta(delta) => format!("Adjusted {} by {:.2}", name, delta),
            BalanceChange::Set(value) => format!("Set {} balance to {:.2}", name, value),
        }
    }

    fn request_delete(&mut self, index: i64) -> String {
        let Some(budget) = self.budget.clone() else {
            return "No budget loaded".to_string();
        };
        let index = match self.wallet_index(index) {
            Ok(index) => index,
            Err(e) => return e.to_string(),
        };

        let wallet = &self.wallets[index];
        let prompt = format!(
            "Are you sure you want to delete wallet '{}' (owned by {})?",
            wallet.name, wallet.owner
        );
        self.stage_confirmation(prompt, PendingAction::DeleteWallet { budget, index });
        String::new()
    }
}
