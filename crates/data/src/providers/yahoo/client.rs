use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use tracing::{debug, info};

use metal_markets_domain::series::PriceSeries;
use metal_markets_domain::value_objects::date_range::DateRange;

use super::types::ChartResponse;
use crate::BROWSER_USER_AGENT;
use crate::error::MarketDataError;
use crate::providers::HistoryProvider;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Daily OHLCV provider backed by the Yahoo Finance v8 chart endpoint.
pub struct YahooFinanceProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooFinanceProvider {
    /// Provider against the public chart host.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Provider against an alternative host (tests, proxies).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for YahooFinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryProvider for YahooFinanceProvider {
    /// One GET per request, daily interval, no retries.
    ///
    /// # Errors
    /// `Network` on transport failure, `Http` on a non-2xx status,
    /// `Parse` on a malformed payload and `Provider` when the endpoint
    /// reports an error of its own.
    async fn fetch_daily(
        &self,
        symbol: &str,
        range: &DateRange,
    ) -> Result<PriceSeries, MarketDataError> {
        let (period1, period2) = range.unix_bounds();
        let url = format!("{}/v8/finance/chart/{symbol}", self.base_url);

        debug!(symbol, period1, period2, "requesting daily history");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", "1d".to_string()),
            ])
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let payload: ChartResponse = serde_json::from_str(&body)
            .map_err(|e| MarketDataError::Parse(format!("malformed chart payload: {e}")))?;

        let series = payload.into_series()?;
        info!(symbol, rows = series.len(), "daily history fetched");
        Ok(series)
    }
}
