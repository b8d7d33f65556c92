//! Single-slot, file-backed exchange rate cache
//!
//! Only one rate table is kept at a time. A snapshot for one base currency is
//! useless for another, so a request for a different base always misses.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::BudgetResult;
use crate::storage::file_io::{read_json_optional, write_json_atomic};

use super::RateTable;

/// A persisted rate table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    pub rates: RateTable,
    pub base: String,
    /// Fetch time, unix seconds
    pub timestamp: i64,
    /// Lifetime, seconds
    pub ttl: i64,
}

impl RateSnapshot {
    pub fn is_fresh(&self, now: i64) -> bool {
        now - self.timestamp < self.ttl
    }

    /// Usable for `base` at time `now`
    pub fn serves(&self, base: &str, now: i64) -> bool {
        self.base == base && self.is_fresh(now)
    }
}

/// JSON file holding at most one [`RateSnapshot`]
pub struct RateCache {
    path: PathBuf,
}

impl RateCache {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> BudgetResult<Option<RateSnapshot>> {
        read_json_optional(&self.path)
    }

    /// Replace whatever is in the slot
    pub fn store(&self, snapshot: &RateSnapshot) -> BudgetResult<()> {
        write_json_atomic(&self.path, snapshot)
    }
}
