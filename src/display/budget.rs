//! Budget file display formatting
//!
//! Formats budget files and their wallets for terminal output.

use chrono::{DateTime, Utc};
use tabled::{settings::Style, Table, Tabled};

use crate::models::BudgetFile;
use crate::session::view::format_time_ago;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Wallets")]
    wallets: usize,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

/// Format budget files as a table, newest first as given
pub fn format_budget_list(files: &[BudgetFile], now: DateTime<Utc>) -> String {
    if files.is_empty() {
        return "No budget files found.\n\nRun 'budget' to create one.".to_string();
    }

    let rows = files.iter().map(|file| BudgetRow {
        name: file.name.clone(),
        wallets: file.wallets.len(),
        currency: file.default_currency.clone(),
        updated: format_time_ago(file.updated_at, now),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the wallets of one budget file with a per-currency subtotal
pub fn format_wallet_list(file: &BudgetFile) -> String {
    if file.wallets.is_empty() {
        return format!("No wallets in '{}'.", file.name);
    }

    let name_width = file
        .wallets
        .iter()
        .map(|w| w.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let owner_width = file
        .wallets
        .iter()
        .map(|w| w.owner.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:<owner_width$}  {:<10}  {:>12}  {}\n",
        "#",
        "Name",
        "Owner",
        "Type",
        "Balance",
        "Currency",
        name_width = name_width,
        owner_width = owner_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:-<name_width$}  {:-<owner_width$}  {:-<10}  {:->12}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        owner_width = owner_width,
    ));

    for (index, wallet) in file.wallets.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<name_width$}  {:<owner_width$}  {:<10}  {:>12.2}  {}\n",
            index,
            wallet.name,
            wallet.owner,
            wallet.wallet_type,
            wallet.balance,
            wallet.currency,
            name_width = name_width,
            owner_width = owner_width,
        ));
    }

    let mut subtotals: Vec<(String, f64)> = Vec::new();
    for wallet in &file.wallets {
        match subtotals.iter_mut().find(|(code, _)| *code == wallet.currency) {
            Some((_, sum)) => *sum += wallet.balance,
            None => subtotals.push((wallet.currency.clone(), wallet.balance)),
        }
    }

    output.push('\n');
    for (code, sum) in subtotals {
        output.push_str(&format!("Total {}: {:.2}\n", code, sum));
    }

    output
}
