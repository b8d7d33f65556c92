//! Currency conversion subsystem
//!
//! - [`sources`]: remote rate endpoints behind the [`RateSource`] trait
//! - [`cache`]: the single-slot rate cache with a TTL
//! - [`provider`]: cache-then-fallback lookup ([`RateProvider`])
//! - [`conversion`]: arithmetic on top of a rate table ([`ConversionService`])

pub mod cache;
pub mod conversion;
pub mod provider;
pub mod sources;

use std::collections::BTreeMap;

/// Currency code -> units of that currency per one unit of the base
pub type RateTable = BTreeMap<String, f64>;

pub use cache::{RateCache, RateSnapshot};
pub use conversion::ConversionService;
pub use provider::{RateLookup, RateProvider, DEFAULT_TTL_SECS};
pub use sources::{HttpRateSource, RateSource};
