//! Exchange rate provider port.
//!
//! This trait defines the interface for rate sources.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::domain::CurrencyCode;
use crate::error::RateError;

/// Port trait for exchange rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    /// All currency codes the provider can quote, sorted ascending for
    /// deterministic display ordering.
    async fn list_supported(&self) -> Result<Vec<CurrencyCode>, RateError>;

    /// Get the exchange rate from one currency to another.
    /// Returns how many units of `to` you get for 1 unit of `from`,
    /// valid only at the moment of the call.
    async fn get_rate(
        &self,
        from: &CurrencyCode,
        to: &CurrencyCode,
    ) -> Result<f64, RateError>;
}
