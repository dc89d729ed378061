//! Run-scoped configuration.
//!
//! The exchange rate is a fixed constant per run, never fetched live; it
//! must be updated by hand to stay accurate. Threading it through a config
//! value keeps conversions testable with injected rates.

use std::path::PathBuf;

use metal_markets_domain::value_objects::exchange_rate::ExchangeRate;

/// Compiled-in USD→MXN rate, used when no override is set.
pub const DEFAULT_EXCHANGE_RATE: f64 = 18.5;

/// Environment variable overriding the exchange rate.
pub const EXCHANGE_RATE_ENV: &str = "METAL_MARKETS_EXCHANGE_RATE";
/// Environment variable overriding the artifact output directory.
pub const OUTPUT_DIR_ENV: &str = "METAL_MARKETS_OUTPUT_DIR";

/// Configuration for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// USD→MXN conversion applied to every derived column.
    pub exchange_rate: ExchangeRate,
    /// Directory receiving the CSV and chart files.
    pub output_dir: PathBuf,
}

impl AnalysisConfig {
    /// Configuration from the process environment, with compiled defaults.
    ///
    /// Unparseable overrides fall back to the defaults rather than failing
    /// startup.
    #[must_use]
    pub fn from_env() -> Self {
        let exchange_rate = std::env::var(EXCHANGE_RATE_ENV)
            .ok()
            .and_then(|v| v.parse::<f64>().ok())
            .map(ExchangeRate::new)
            .unwrap_or_else(|| ExchangeRate::new(DEFAULT_EXCHANGE_RATE));

        let output_dir = std::env::var(OUTPUT_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Self {
            exchange_rate,
            output_dir,
        }
    }

    /// Same configuration writing artifacts under `dir`.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            exchange_rate: ExchangeRate::new(DEFAULT_EXCHANGE_RATE),
            output_dir: PathBuf::from("."),
        }
    }
}
