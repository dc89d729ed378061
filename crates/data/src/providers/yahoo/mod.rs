//! Yahoo Finance v8 chart API provider.

mod client;
mod types;

pub use client::YahooFinanceProvider;
