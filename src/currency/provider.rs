//! Exchange rate provider
//!
//! Answers `rates(base)` from the cache slot when it is fresh and for the same
//! base, otherwise walks the configured sources in order and keeps the first
//! table that comes back.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::paths::BudgetPaths;
use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::normalize_code;

use super::cache::{RateCache, RateSnapshot};
use super::sources::{HttpRateSource, RateSource};
use super::RateTable;

/// Default lifetime of a fetched rate table
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// Anything that can hand out a rate table for a base currency
pub trait RateLookup {
    fn rates(&self, base: &str) -> BudgetResult<RateTable>;
}

/// Cached, multi-source rate lookup
pub struct RateProvider {
    sources: Vec<Box<dyn RateSource>>,
    cache: RateCache,
    ttl: i64,
    clock: Box<dyn Fn() -> i64>,
}

impl RateProvider {
    pub fn new(sources: Vec<Box<dyn RateSource>>, cache: RateCache, ttl: i64) -> Self {
        Self {
            sources,
            cache,
            ttl,
            clock: Box::new(|| Utc::now().timestamp()),
        }
    }

    /// Provider wired to the HTTP sources and cache file from configuration
    pub fn from_settings(settings: &Settings, paths: &BudgetPaths) -> BudgetResult<Self> {
        Ok(Self::new(
            HttpRateSource::from_settings(settings)?,
            RateCache::new(paths.cache_file()),
            settings.cache_ttl,
        ))
    }

    /// Replace the unix-seconds clock
    pub fn with_clock(mut self, clock: impl Fn() -> i64 + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    fn cached(&self, base: &str, now: i64) -> Option<RateTable> {
        match self.cache.load() {
            Ok(Some(snapshot)) if snapshot.serves(base, now) => Some(snapshot.rates),
            Ok(Some(snapshot)) => {
                debug!(cached_base = %snapshot.base, requested = base, "rate cache miss");
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "ignoring unreadable rate cache");
                None
            }
        }
    }

    fn fetch(&self, base: &str) -> BudgetResult<RateTable> {
        let mut last_error: Option<BudgetError> = None;

        for source in &self.sources {
            match source.fetch(base) {
                Ok(rates) => {
                    info!(source = source.id(), base, "fetched exchange rates");
                    return Ok(rates);
                }
                Err(e) => {
                    warn!(source = source.id(), base, error = %e, "rate source failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        let reason = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no rate sources configured".to_string());
        Err(BudgetError::RatesUnavailable(reason))
    }
}

impl RateLookup for RateProvider {
    fn rates(&self, base: &str) -> BudgetResult<RateTable> {
        let base = normalize_code(base)?;
        let now = (self.clock)();

        if let Some(rates) = self.cached(&base, now) {
            debug!(base = %base, "rate cache hit");
            return Ok(rates);
        }

        let rates = self.fetch(&base)?;

        let snapshot = RateSnapshot {
            rates: rates.clone(),
            base,
            timestamp: now,
            ttl: self.ttl,
        };
        if let Err(e) = self.cache.store(&snapshot) {
            warn!(error = %e, "failed to persist rate cache");
        }

        Ok(rates)
    }
}
