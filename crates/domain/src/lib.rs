//! Domain types for metal market analysis.
//!
//! This crate holds the pure model shared by the acquisition and pipeline
//! layers:
//! - Metals and their provider ticker symbols
//! - Spot quotes and daily OHLCV price bars
//! - Value objects for exchange rates and date ranges
//! - The ordered price series and its enrichment transform

/// Entities: metals, spot quotes, daily bars.
pub mod entities;
/// Error types.
pub mod error;
/// Ordered daily series and enrichment.
pub mod series;
/// Value objects: exchange rate, date range.
pub mod value_objects;

pub use error::DomainError;
