//! # Converter Types
//!
//! Domain types and port traits for the currency conversion service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the innermost core of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, RateSet, ConversionResult)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for the presentation boundary
//! - `error/` - Validation, provider and service error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{ConversionRequest, ConversionResult, CurrencyCode, RateSet};
pub use dto::{ConversionInput, PLACEHOLDER};
pub use error::{ConvertError, RateError, ValidationError};
pub use ports::RateProvider;
