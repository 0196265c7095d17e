//! Data Transfer Objects for the presentation boundary.

use serde::{Deserialize, Serialize};

/// Sentinel a currency selector shows before the user picks anything.
pub const PLACEHOLDER: &str = "Choose";

/// Raw, unvalidated conversion input exactly as the presentation layer
/// holds it: the amount field text plus both selector values. Either
/// selector may still be the [`PLACEHOLDER`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionInput {
    pub amount: String,
    pub from: String,
    pub to: String,
}

impl ConversionInput {
    pub fn new(
        amount: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}
