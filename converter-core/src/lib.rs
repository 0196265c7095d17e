//! # Converter Core
//!
//! Application service layer for the currency converter.
//!
//! The service is generic over `P: RateProvider`, allowing the HTTP
//! adapter or an in-memory mock to be injected at compile time.

pub mod service;


pub use service::ConversionService;
