//! Conversion request, rate set and result values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::CurrencyCode;

/// A validated conversion request: a finite non-negative amount plus a
/// concrete currency pair. Built by the service from a raw
/// `ConversionInput`, never directly from presentation strings.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

/// Point-in-time exchange rates relative to a single base currency.
///
/// Valid only for the moment it was fetched: created per request and
/// discarded once the needed rate has been read. The mapping is ordered
/// so the derived code listing is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSet {
    base: CurrencyCode,
    rates: BTreeMap<CurrencyCode, f64>,
}

impl RateSet {
    pub fn new(base: CurrencyCode, rates: BTreeMap<CurrencyCode, f64>) -> Self {
        Self { base, rates }
    }

    /// The currency all rates are expressed against.
    pub fn base(&self) -> &CurrencyCode {
        &self.base
    }

    /// Units of `to` received for 1 unit of the base currency.
    pub fn rate_for(&self, to: &CurrencyCode) -> Option<f64> {
        self.rates.get(to).copied()
    }

    /// All quoted codes, sorted ascending.
    pub fn codes(&self) -> Vec<CurrencyCode> {
        self.rates.keys().cloned().collect()
    }
}

/// Outcome of a successful conversion. Transient: rendered once by the
/// presentation layer, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Converted amount, already rounded to 2 decimal places.
    pub converted_amount: f64,
    pub to: CurrencyCode,
}

impl ConversionResult {
    pub fn new(raw_amount: f64, to: CurrencyCode) -> Self {
        Self {
            converted_amount: round2(raw_amount),
            to,
        }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.converted_amount, self.to)
    }
}

/// Rounds to 2 decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
