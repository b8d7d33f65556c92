//! Currency conversion through a common base
//!
//! `amount` in `from` is first expressed in `base` (divide by `rates[from]`) and
//! then in `to` (multiply by `rates[to]`). Plain f64 arithmetic, no rounding.

use crate::error::{BudgetError, BudgetResult};
use crate::models::normalize_code;

use super::provider::RateLookup;

/// Converts amounts using rates from a [`RateLookup`]
pub struct ConversionService<'a> {
    rates: &'a dyn RateLookup,
}

impl<'a> ConversionService<'a> {
    pub fn new(rates: &'a dyn RateLookup) -> Self {
        Self { rates }
    }

    pub fn convert(&self, amount: f64, from: &str, to: &str, base: &str) -> BudgetResult<f64> {
        let from = normalize_code(from)?;
        let to = normalize_code(to)?;
        let base = normalize_code(base)?;

        // Same currency never touches the cache or the network
        if from == to {
            return Ok(amount);
        }

        let rates = self.rates.rates(&base)?;

        let base_amount = if from == base {
            amount
        } else {
            let rate = rates
                .get(&from)
                .ok_or_else(|| BudgetError::RateNotFound(from.clone()))?;
            amount / rate
        };

        if to == base {
            return Ok(base_amount);
        }

        let rate = rates
            .get(&to)
            .ok_or_else(|| BudgetError::RateNotFound(to.clone()))?;
        Ok(base_amount * rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::RateTable;

    /// Fails the test if any rate access happens
    struct NoRates;

    impl RateLookup for NoRates {
        fn rates(&self, base: &str) -> BudgetResult<RateTable> {
            panic!("rates({base}) must not be requested");
        }
    }

    struct FixedRates(RateTable);

    impl RateLookup for FixedRates {
        fn rates(&self, _base: &str) -> BudgetResult<RateTable> {
            Ok(self.0.clone())
        }
    }

    fn usd_table() -> FixedRates {
        FixedRates(
            [("EUR", 0.8), ("GBP", 0.5), ("USD", 1.0)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_identity_does_not_touch_rates() {
        let service = ConversionService::new(&NoRates);
        for amount in [0.0, -12.5, 1e9, 0.1 + 0.2] {
            assert_eq!(service.convert(amount, "usd", " USD", "EUR").unwrap(), amount);
            assert_eq!(service.convert(amount, "JPY", "jpy", "USD").unwrap(), amount);
        }
    }

    #[test]
    fn test_convert_via_base() {
        let rates = usd_table();
        let service = ConversionService::new(&rates);

        assert_eq!(service.convert(100.0, "USD", "EUR", "USD").unwrap(), 80.0);
        assert_eq!(service.convert(80.0, "EUR", "USD", "USD").unwrap(), 100.0);
        // EUR -> USD -> GBP
        assert_eq!(service.convert(80.0, "EUR", "GBP", "USD").unwrap(), 50.0);
    }

    #[test]
    fn test_round_trip_with_reciprocal_rates() {
        // A is the base; B's rate is the reciprocal of what converting back uses
        let rates = FixedRates(
            [("AAA", 1.0), ("BBB", 1.0 / 3.0)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        );
        let service = ConversionService::new(&rates);

        for x in [1.0, 123.456, -7.25, 1e6] {
            let there = service.convert(x, "AAA", "BBB", "AAA").unwrap();
            let back = service.convert(there, "BBB", "AAA", "AAA").unwrap();
            assert!((back - x).abs() < 1e-9 * x.abs().max(1.0), "{x} -> {back}");
        }
    }

    #[test]
    fn test_missing_rate() {
        let rates = usd_table();
        let service = ConversionService::new(&rates);

        let err = service.convert(1.0, "CHF", "USD", "USD").unwrap_err();
        assert!(matches!(err, BudgetError::RateNotFound(code) if code == "CHF"));

        let err = service.convert(1.0, "USD", "CHF", "USD").unwrap_err();
        assert!(matches!(err, BudgetError::RateNotFound(code) if code == "CHF"));
    }

    #[test]
    fn test_invalid_codes() {
        let service = ConversionService::new(&NoRates);
        for (from, to, base) in [("US", "EUR", "USD"), ("USD", "EURO", "USD"), ("USD", "EUR", "")] {
            let err = service.convert(1.0, from, to, base).unwrap_err();
            assert!(matches!(err, BudgetError::InvalidCurrencyCode(_)));
        }
    }
}
