//! Domain models for the conversion service.

pub mod conversion;
pub mod currency;

pub use conversion::{ConversionRequest, ConversionResult, RateSet, round2};
pub use currency::CurrencyCode;
