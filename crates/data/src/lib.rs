//! Market data acquisition.
//!
//! Two independent sources compose only through the calling workflow:
//! - a spot-price scraper over a public commodity page
//! - a historical daily OHLCV provider (Yahoo Finance chart API)

/// Error types.
pub mod error;
/// Historical series providers.
pub mod providers;
/// Spot price scraping.
pub mod spot;

pub use error::MarketDataError;
pub use providers::HistoryProvider;
pub use providers::yahoo::YahooFinanceProvider;
pub use spot::SpotPriceFetcher;

/// Desktop browser `User-Agent`; both sources reject non-browser clients.
pub(crate) const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
