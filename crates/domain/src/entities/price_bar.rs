use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of provider data plus the derived columns.
///
/// Field order matches the export column contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    /// Day-over-day close change in percent. `None` on the first row.
    pub pct_change: Option<f64>,
    /// Close converted to the target currency. Set by enrichment.
    pub close_converted: Option<f64>,
}

impl PriceBar {
    /// Raw provider bar with the derived columns unset.
    #[must_use]
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
            pct_change: None,
            close_converted: None,
        }
    }
}
