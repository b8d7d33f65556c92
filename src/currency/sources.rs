//! Remote exchange rate sources
//!
//! Each source answers "rates relative to BASE" with a JSON body that carries a
//! `rates` object. Frankfurter wraps it as `{amount, base, date, rates}` and
//! open.er-api as `{rates, base, timestamp, ...}`; only `rates` is required.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};

use super::RateTable;

/// A single remote source of exchange rates
pub trait RateSource {
    /// Short identifier used in logs and error messages
    fn id(&self) -> &str;

    /// Fetch the rate table for an already-normalized base code
    fn fetch(&self, base: &str) -> BudgetResult<RateTable>;
}

#[derive(Debug, Deserialize)]
struct RatesBody {
    rates: RateTable,
    #[serde(default)]
    base: Option<String>,
}

/// Parse a provider response body into a rate table
pub fn parse_rates(source: &str, body: &str) -> BudgetResult<RateTable> {
    let parsed: RatesBody = serde_json::from_str(body).map_err(|e| {
        BudgetError::Network(format!("failed to decode {} response: {}", source, e))
    })?;
    if let Some(base) = &parsed.base {
        debug!(source, base = %base, count = parsed.rates.len(), "parsed rate table");
    }
    Ok(parsed.rates)
}

/// Rate source reached over HTTP with a URL template
pub struct HttpRateSource {
    id: String,
    url_template: String,
    client: Client,
}

impl HttpRateSource {
    /// `url_template` must contain a `{base}` placeholder
    pub fn new(
        id: impl Into<String>,
        url_template: impl Into<String>,
        timeout: Duration,
    ) -> BudgetResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            id: id.into(),
            url_template: url_template.into(),
            client,
        })
    }

    /// The primary and backup sources from settings, in fallback order
    pub fn from_settings(settings: &Settings) -> BudgetResult<Vec<Box<dyn RateSource>>> {
        let timeout = Duration::from_secs(settings.request_timeout_secs);
        let primary: Box<dyn RateSource> =
            Box::new(Self::new("frankfurter", &settings.primary_api, timeout)?);
        let backup: Box<dyn RateSource> =
            Box::new(Self::new("open-er-api", &settings.backup_api, timeout)?);
        Ok(vec![primary, backup])
    }

    pub fn url(&self, base: &str) -> String {
        self.url_template.replace("{base}", base)
    }
}

impl RateSource for HttpRateSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn fetch(&self, base: &str) -> BudgetResult<RateTable> {
        let url = self.url(base);
        debug!(source = %self.id, %url, "requesting exchange rates");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| BudgetError::Network(format!("failed to fetch from {}: {}", self.id, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BudgetError::Network(format!(
                "{} returned status {}",
                self.id,
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .map_err(|e| BudgetError::Network(format!("failed to read {} response: {}", self.id, e)))?;
        parse_rates(&self.id, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frankfurter_shape() {
        let body = r#"{"amount":1.0,"base":"USD","date":"2024-05-01","rates":{"EUR":0.93,"GBP":0.8}}"#;
        let rates = parse_rates("frankfurter", body).unwrap();
        assert_eq!(rates.get("EUR"), Some(&0.93));
        assert_eq!(rates.len(), 2);
    }

    #[test]
    fn test_parse_open_er_shape() {
        let body = r#"{"result":"success","rates":{"USD":1,"EUR":0.92},"base":"USD","timestamp":1714521600}"#;
        let rates = parse_rates("open-er-api", body).unwrap();
        assert_eq!(rates.get("USD"), Some(&1.0));
        assert_eq!(rates.get("EUR"), Some(&0.92));
    }

    #[test]
    fn test_parse_without_rates_fails() {
        let body = r#"{"result":"error","error-type":"unsupported-code"}"#;
        let err = parse_rates("open-er-api", body).unwrap_err();
        assert!(matches!(err, BudgetError::Network(_)));
    }

    #[test]
    fn test_url_template() {
        let source = HttpRateSource::new(
            "frankfurter",
            "https://api.frankfurter.dev/v1/latest?base={base}",
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(
            source.url("EUR"),
            "https://api.frankfurter.dev/v1/latest?base=EUR"
        );
    }
}
