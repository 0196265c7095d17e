//! Conversion application service.
//!
//! Orchestrates input validation and the rate provider port. Contains
//! NO transport logic - pure business orchestration.

use converter_types::{
    ConversionInput, ConversionRequest, ConversionResult, ConvertError, CurrencyCode,
    PLACEHOLDER, RateProvider, ValidationError,
};

/// Application service for currency conversion.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// This enables:
/// - Swapping the rate source without code changes
/// - Testing with a scripted mock provider
/// - Compile-time checks for port implementation
///
/// Holds no state between requests besides the injected provider, so a
/// caller may keep one instance for the whole session.
pub struct ConversionService<P: RateProvider> {
    provider: P,
}

impl<P: RateProvider> ConversionService<P> {
    /// Creates a new conversion service with the given rate provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Fetches the supported currency set for the presentation layer to
    /// render into its selectors. Sorted for stable display ordering.
    pub async fn initialize_currencies(&self) -> Result<Vec<CurrencyCode>, ConvertError> {
        let currencies = self.provider.list_supported().await?;
        tracing::debug!(count = currencies.len(), "loaded supported currencies");
        Ok(currencies)
    }

    /// Converts the amount described by `input`.
    ///
    /// Validation happens before any network call: a request that fails
    /// it never reaches the provider. Provider errors propagate
    /// unchanged; there are no retries and no partial results.
    pub async fn convert(
        &self,
        input: ConversionInput,
    ) -> Result<ConversionResult, ConvertError> {
        let request = validate(&input)?;
        let rate = self
            .provider
            .get_rate(&request.from, &request.to)
            .await?;
        let result = ConversionResult::new(request.amount * rate, request.to);
        tracing::info!(from = %request.from, to = %result.to, rate, "conversion complete");
        Ok(result)
    }
}

/// Turns raw presentation input into a validated request.
fn validate(input: &ConversionInput) -> Result<ConversionRequest, ValidationError> {
    let amount_text = input.amount.trim();
    if amount_text.is_empty() {
        return Err(ValidationError::EmptyAmount);
    }

    let amount: f64 = amount_text
        .parse()
        .map_err(|_| ValidationError::InvalidAmount(input.amount.clone()))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::InvalidAmount(input.amount.clone()));
    }

    if is_unselected(&input.from) || is_unselected(&input.to) {
        return Err(ValidationError::CurrencyNotSelected);
    }

    Ok(ConversionRequest {
        amount,
        from: CurrencyCode::new(&input.from)?,
        to: CurrencyCode::new(&input.to)?,
    })
}

fn is_unselected(selection: &str) -> bool {
    let selection = selection.trim();
    selection.is_empty() || selection == PLACEHOLDER
}
