use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::exchange_rate::ExchangeRate;

/// A single spot price observation, in the source page's unit (USD/MT).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpotQuote {
    pub price: f64,
    pub fetched_at: DateTime<Utc>,
}

impl SpotQuote {
    #[must_use]
    pub fn new(price: f64, fetched_at: DateTime<Utc>) -> Self {
        Self { price, fetched_at }
    }

    /// Price converted with the given rate.
    #[must_use]
    pub fn converted(&self, rate: ExchangeRate) -> f64 {
        rate.convert(self.price)
    }
}
