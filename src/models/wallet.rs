//! Wallet model
//!
//! A named balance (cash, bank account, investment...) with an owner and a currency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A wallet inside a budget file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Wallet name, unique within its budget file
    pub name: String,

    /// Free-text owner ("me", "Family", ...)
    pub owner: String,

    /// Free-text category ("bank", "cash", "invest", ...)
    #[serde(rename = "type")]
    pub wallet_type: String,

    /// Three-letter currency code
    pub currency: String,

    pub balance: f64,
}

impl Wallet {
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        wallet_type: impl Into<String>,
        currency: impl Into<String>,
        balance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            wallet_type: wallet_type.into(),
            currency: currency.into(),
            balance,
        }
    }
}

impl fmt::Display for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.owner, self.currency)
    }
}

/// Fields collected before a wallet is created
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewWallet {
    pub name: String,
    pub owner: String,
    pub wallet_type: String,
    pub currency: String,
    pub balance: f64,
}

impl NewWallet {
    pub fn into_wallet(self) -> Wallet {
        Wallet::new(
            self.name,
            self.owner,
            self.wallet_type,
            self.currency,
            self.balance,
        )
    }
}
