//! Spot price scraping from a public commodity page.
//!
//! The source renders the current value inside a
//! `span.price-section__current-value` element. The extracted number is
//! only as stable as that markup; a page redesign surfaces as a `Parse`
//! error, not a panic.

use chrono::Utc;
use reqwest::header::USER_AGENT;
use scraper::{Html, Selector};
use tracing::debug;

use metal_markets_domain::entities::quote::SpotQuote;

use crate::BROWSER_USER_AGENT;
use crate::error::MarketDataError;

/// Default spot source: nickel on Markets Insider.
pub const DEFAULT_SPOT_URL: &str = "https://markets.businessinsider.com/commodities/nickel-price";

const PRICE_SELECTOR: &str = "span.price-section__current-value";

/// Scrapes the current spot price from a commodity page.
pub struct SpotPriceFetcher {
    client: reqwest::Client,
    url: String,
}

impl SpotPriceFetcher {
    /// Fetcher for the default nickel page.
    #[must_use]
    pub fn new() -> Self {
        Self::with_url(DEFAULT_SPOT_URL)
    }

    /// Fetcher for an arbitrary page carrying the same price markup.
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Fetches the page and extracts the displayed spot price.
    ///
    /// One GET, no retries, client default timeout. The page blocks
    /// non-browser clients, so the request carries a browser `User-Agent`.
    ///
    /// # Errors
    /// `Network` on transport failure, `Http` on a non-2xx status,
    /// `Parse` when the price element is missing or its text is not
    /// numeric after cleanup.
    pub async fn fetch(&self) -> Result<SpotQuote, MarketDataError> {
        debug!(url = %self.url, "fetching spot price page");
        let response = self
            .client
            .get(&self.url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Http {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        let price = extract_price(&body)?;
        debug!(price, "spot price extracted");
        Ok(SpotQuote::new(price, Utc::now()))
    }
}

impl Default for SpotPriceFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Pulls the displayed price out of the page body.
///
/// Strips surrounding whitespace and thousands separators; anything else
/// in the element text is a parse failure.
pub fn extract_price(html: &str) -> Result<f64, MarketDataError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(PRICE_SELECTOR)
        .map_err(|e| MarketDataError::Parse(format!("invalid selector: {e}")))?;

    let element = document.select(&selector).next().ok_or_else(|| {
        MarketDataError::Parse(format!("price element `{PRICE_SELECTOR}` not found"))
    })?;

    let text: String = element.text().collect();
    let cleaned = text.trim().replace(',', "");
    cleaned.parse::<f64>().map_err(|_| {
        MarketDataError::Parse(format!("price text `{}` is not numeric", text.trim()))
    })
}
