//! Exchange rate sources.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, instrument};

use super::error::CurrencyError;

/// USD-based rate table: currency code -> units per USD.
pub type Rates = HashMap<String, f64>;

/// Anything that can produce a fresh USD-based rate table.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rates(&self) -> Result<Rates, CurrencyError>;
}

/// Response shape of the open.er-api.com `latest` endpoint.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: String,
    #[serde(default)]
    rates: Rates,
    #[serde(rename = "error-type", default)]
    error_type: Option<String>,
}

/// Rates from open.er-api.com (free, no key).
pub struct OpenErApiSource {
    client: reqwest::Client,
    url: String,
}

impl OpenErApiSource {
    pub fn new(url: impl Into<String>) -> Result<Self, CurrencyError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("econified/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait::async_trait]
impl RateSource for OpenErApiSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_rates(&self) -> Result<Rates, CurrencyError> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body: LatestRatesResponse = response.json().await?;
        parse_latest(body)
    }
}

fn parse_latest(body: LatestRatesResponse) -> Result<Rates, CurrencyError> {
    if body.result != "success" {
        return Err(CurrencyError::source_failure(format!(
            "result was '{}'{}",
            body.result,
            body.error_type
                .map(|t| format!(" ({t})"))
                .unwrap_or_default()
        )));
    }
    if body.rates.is_empty() {
        return Err(CurrencyError::source_failure("response contained no rates"));
    }
    debug!("Fetched {} rates", body.rates.len());
    Ok(body.rates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_success() {
        let body: LatestRatesResponse = serde_json::from_value(json!({
            "result": "success",
            "base_code": "USD",
            "rates": { "USD": 1, "EUR": 0.91, "NOK": 10.7 }
        }))
        .unwrap();
        let rates = parse_latest(body).unwrap();
        assert_eq!(rates["EUR"], 0.91);
        assert_eq!(rates.len(), 3);
    }

    #[test]
    fn test_parse_api_error() {
        let body: LatestRatesResponse = serde_json::from_value(json!({
            "result": "error",
            "error-type": "unsupported-code"
        }))
        .unwrap();
        let err = parse_latest(body).unwrap_err();
        assert!(err.to_string().contains("unsupported-code"));
    }

    #[test]
    fn test_source_builds() {
        assert!(OpenErApiSource::new("https://open.er-api.com/v6/latest/USD").is_ok());
    }
}
