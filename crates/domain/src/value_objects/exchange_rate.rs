use serde::{Deserialize, Serialize};

/// Source→target currency multiplier (USD→MXN here).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate(pub f64);

impl ExchangeRate {
    #[must_use]
    pub fn new(rate: f64) -> Self {
        Self(rate)
    }

    /// Plain multiplication, no rounding.
    #[must_use]
    pub fn convert(&self, amount: f64) -> f64 {
        amount * self.0
    }
}
