//! Ordered daily price series and the enrichment transform.

use serde::{Deserialize, Serialize};

use crate::entities::price_bar::PriceBar;
use crate::value_objects::exchange_rate::ExchangeRate;

/// Ordered sequence of daily bars, ascending by date, keyed uniquely by
/// date. Produced fresh per request; the export file is the only durable
/// artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    #[must_use]
    pub fn new(bars: Vec<PriceBar>) -> Self {
        Self { bars }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    #[must_use]
    pub fn into_bars(self) -> Vec<PriceBar> {
        self.bars
    }

    /// Fills `pct_change` and `close_converted` on every bar.
    ///
    /// The first bar keeps `pct_change = None` (no prior close); later bars
    /// get the day-over-day close change in percent. Every bar gets
    /// `close * rate`. An empty series passes through unchanged.
    #[must_use]
    pub fn enrich(mut self, rate: ExchangeRate) -> Self {
        let mut prev_close: Option<f64> = None;
        for bar in &mut self.bars {
            bar.pct_change = prev_close.map(|prev| (bar.close - prev) / prev * 100.0);
            bar.close_converted = Some(rate.convert(bar.close));
            prev_close = Some(bar.close);
        }
        self
    }
}
