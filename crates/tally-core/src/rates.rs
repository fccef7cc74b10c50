//! Exchange-rate client
//!
//! Fetches today's rates for a base currency from an exchangerate-api.com
//! compatible endpoint (`GET {base_url}/v4/latest/{base}`) and narrows the
//! result to the currencies the caller asked for.

use std::collections::HashMap;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::RatesSettings;
use crate::error::{Error, Result};
use crate::models::ExchangeRates;

/// Response from /v4/latest/{base}
///
/// Other fields (`date`, `time_last_updated`, ...) are ignored. Rate values
/// stay untyped until a caller asks for them, so one bad entry only fails
/// requests that target it.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, Value>,
}

/// HTTP client for the exchange-rate API
#[derive(Clone)]
pub struct RatesClient {
    http_client: Client,
    base_url: String,
}

impl RatesClient {
    /// Create a client with the configured endpoint and request timeout
    pub fn new(settings: &RatesSettings) -> Result<Self> {
        let http_client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self {
            http_client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client against a different endpoint with default settings
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::new(&RatesSettings {
            base_url: base_url.to_string(),
            ..RatesSettings::default()
        })
    }

    /// Get the endpoint this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch rates of `targets` relative to `base`
    ///
    /// Fails if the request fails, the body is not the expected JSON shape,
    /// or any requested currency is absent from the response.
    pub async fn get_exchange_rates(&self, base: &str, targets: &[String]) -> Result<ExchangeRates> {
        let base = base.trim();
        if base.is_empty() {
            return Err(Error::InvalidData("base currency is empty".to_string()));
        }
        if !base.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::InvalidData(format!("invalid base currency: {}", base)));
        }

        let url = format!("{}/v4/latest/{}", self.base_url, base);
        debug!(%url, targets = targets.len(), "Fetching exchange rates");

        let response = self.http_client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let parsed: LatestRatesResponse = serde_json::from_str(&body)?;

        narrow_rates(&parsed.rates, targets)
    }
}

/// Keep only the requested currencies, failing on the first one missing
///
/// A `null` rate counts as missing; any other non-numeric rate is invalid.
fn narrow_rates(rates: &HashMap<String, Value>, targets: &[String]) -> Result<ExchangeRates> {
    targets
        .iter()
        .map(|currency| match rates.get(currency) {
            None | Some(Value::Null) => Err(Error::MissingRate(currency.clone())),
            Some(value) => value
                .as_f64()
                .map(|rate| (currency.clone(), rate))
                .ok_or_else(|| {
                    Error::InvalidData(format!("rate for {} is not a number: {}", currency, value))
                }),
        })
        .collect()
}
