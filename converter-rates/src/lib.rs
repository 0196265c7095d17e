//! # Converter Rates
//!
//! Outbound HTTP adapter for the [`RateProvider`] port, backed by the
//! exchangerate-api.com v6 `latest` endpoint.
//!
//! One request per operation: `latest/{base}` returns the full rate set
//! for a base currency, and the caller reads either its key set (for
//! the supported-currency listing) or a single entry (for a pair rate).
//! No rate set outlives the call that fetched it.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use converter_types::{CurrencyCode, RateError, RateProvider, RateSet};

/// Production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com";

/// Fixed anchor base used when listing supported currencies.
const ANCHOR_BASE: &str = "USD";

/// Per-request timeout; a hung upstream classifies as a transport error
/// instead of blocking the caller indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Wire shape of the v6 `latest` endpoint.
#[derive(Debug, Deserialize)]
struct LatestResponse {
    result: String,
    #[serde(rename = "error-type", default)]
    error_type: Option<String>,
    #[serde(default)]
    conversion_rates: BTreeMap<String, f64>,
}

impl LatestResponse {
    /// Converts a decoded payload into a domain rate set, rejecting
    /// payloads whose status field does not indicate success.
    fn into_rate_set(self, base: CurrencyCode) -> Result<RateSet, RateError> {
        if self.result != "success" {
            return Err(RateError::Upstream(
                self.error_type
                    .unwrap_or_else(|| "upstream reported failure".into()),
            ));
        }

        let mut rates = BTreeMap::new();
        for (code, rate) in self.conversion_rates {
            let code = CurrencyCode::new(&code)
                .map_err(|_| RateError::Upstream(format!("malformed currency code {code:?}")))?;
            rates.insert(code, rate);
        }
        Ok(RateSet::new(base, rates))
    }
}

/// HTTP rate provider for exchangerate-api.com.
///
/// The API key is injected configuration; it travels in the request
/// path, so transport errors are stripped of their URL before their
/// text is surfaced.
pub struct ExchangeRateApi {
    base_url: String,
    api_key: String,
    anchor: CurrencyCode,
    http: Client,
}

impl ExchangeRateApi {
    /// Creates a provider against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a provider against a custom endpoint (proxies, tests).
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            anchor: CurrencyCode::new(ANCHOR_BASE).expect("anchor code is well-formed"),
            http: Client::new(),
        }
    }

    async fn fetch_latest(&self, base: &CurrencyCode) -> Result<RateSet, RateError> {
        let url = format!("{}/v6/{}/latest/{}", self.base_url, self.api_key, base);
        tracing::debug!(base = %base, "fetching rate set");

        let resp = self
            .http
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| RateError::Transport(e.without_url().to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RateError::Transport(format!("upstream returned {status}")));
        }

        let body: LatestResponse = resp
            .json()
            .await
            .map_err(|e| RateError::Upstream(e.without_url().to_string()))?;

        body.into_rate_set(base.clone())
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApi {
    async fn list_supported(&self) -> Result<Vec<CurrencyCode>, RateError> {
        let set = self.fetch_latest(&self.anchor).await?;
        Ok(set.codes())
    }

    async fn get_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, RateError> {
        let set = self.fetch_latest(from).await?;
        set.rate_for(to)
            .ok_or_else(|| RateError::UnsupportedCurrency(to.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    fn decode(json: &str) -> LatestResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_provider_trims_trailing_slash() {
        let api = ExchangeRateApi::with_base_url("https://example.com/", "k");
        assert_eq!(api.base_url, "https://example.com");
    }

    #[test]
    fn test_success_payload_becomes_rate_set() {
        let body = decode(
            r#"{"result":"success","conversion_rates":{"USD":1.0,"EUR":0.92,"GBP":0.79}}"#,
        );
        let set = body.into_rate_set(code("USD")).unwrap();
        assert_eq!(set.base(), &code("USD"));
        assert_eq!(set.rate_for(&code("EUR")), Some(0.92));
        assert_eq!(set.codes(), vec![code("EUR"), code("GBP"), code("USD")]);
    }

    #[test]
    fn test_error_payload_carries_error_type() {
        let body = decode(r#"{"result":"error","error-type":"invalid-key"}"#);
        let err = body.into_rate_set(code("USD")).unwrap_err();
        assert_eq!(err, RateError::Upstream("invalid-key".into()));
    }

    #[test]
    fn test_error_payload_without_error_type() {
        let body = decode(r#"{"result":"error"}"#);
        let err = body.into_rate_set(code("USD")).unwrap_err();
        assert!(matches!(err, RateError::Upstream(_)));
    }

    #[test]
    fn test_malformed_rate_key_is_upstream_error() {
        let body = decode(r#"{"result":"success","conversion_rates":{"U$D":1.0}}"#);
        let err = body.into_rate_set(code("USD")).unwrap_err();
        assert!(matches!(err, RateError::Upstream(_)));
    }
}
