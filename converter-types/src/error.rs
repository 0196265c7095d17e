//! Error types for the conversion service.

use crate::domain::CurrencyCode;

/// Input problems detectable before any network call. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter an amount")]
    EmptyAmount,

    #[error("Invalid amount: {0:?} is not a number")]
    InvalidAmount(String),

    #[error("Please select a currency")]
    CurrencyNotSelected,

    #[error("Invalid currency code: {0:?}")]
    BadCurrencyCode(String),
}

/// Rate provider failures, surfaced verbatim to the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RateError {
    /// Network-level failure: DNS, connection refused, timeout, non-2xx
    /// status. The cause text is preserved in the message.
    #[error("HTTP error: {0}")]
    Transport(String),

    /// The rate service answered but reported a failure.
    #[error("API error: {0}")]
    Upstream(String),

    /// The requested target code is absent from the returned rate set.
    #[error("Currency {0} is not supported")]
    UnsupportedCurrency(CurrencyCode),
}

/// Everything the conversion service can report.
///
/// Every variant renders to a user-facing display string; nothing here
/// panics or terminates the process.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Rate(#[from] RateError),
}
