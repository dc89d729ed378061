//! Chart API response shapes and normalization into the domain series.

use chrono::DateTime;
use serde::Deserialize;

use metal_markets_domain::entities::price_bar::PriceBar;
use metal_markets_domain::series::PriceSeries;

use crate::error::MarketDataError;

/// Top-level chart API response.
#[derive(Debug, Deserialize)]
pub(crate) struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartEnvelope {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Indicators {
    pub quote: Vec<QuoteBlock>,
}

/// Column-oriented OHLCV block. Entries are null on non-trading days.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

impl ChartResponse {
    /// Normalizes the payload into a daily series.
    ///
    /// A provider-reported error becomes `Provider`; a missing or empty
    /// result block is an empty series, not an error. Rows without a close
    /// (holidays inside the range) are skipped.
    pub(crate) fn into_series(self) -> Result<PriceSeries, MarketDataError> {
        if let Some(err) = self.chart.error {
            return Err(MarketDataError::Provider {
                code: err.code,
                description: err.description,
            });
        }

        let Some(result) = self.chart.result.and_then(|mut r| {
            if r.is_empty() { None } else { Some(r.remove(0)) }
        }) else {
            return Ok(PriceSeries::empty());
        };

        let quote = result.indicators.quote.into_iter().next().unwrap_or_default();

        let mut bars = Vec::with_capacity(result.timestamp.len());
        for (i, ts) in result.timestamp.iter().enumerate() {
            let Some(close) = value_at(&quote.close, i) else {
                continue;
            };
            let Some(date) = DateTime::from_timestamp(*ts, 0).map(|dt| dt.date_naive()) else {
                continue;
            };
            bars.push(PriceBar::new(
                date,
                value_at(&quote.open, i).unwrap_or(close),
                value_at(&quote.high, i).unwrap_or(close),
                value_at(&quote.low, i).unwrap_or(close),
                close,
                quote.volume.get(i).copied().flatten().unwrap_or(0),
            ));
        }
        Ok(PriceSeries::new(bars))
    }
}

fn value_at(column: &[Option<f64>], index: usize) -> Option<f64> {
    column.get(index).copied().flatten()
}
