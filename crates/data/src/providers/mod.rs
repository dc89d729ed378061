//! Historical series provider definitions.
//!
//! The trait is the seam between the pipeline and any concrete market-data
//! backend; `yahoo` is the production implementation.

pub mod yahoo;

use async_trait::async_trait;

use metal_markets_domain::series::PriceSeries;
use metal_markets_domain::value_objects::date_range::DateRange;

use crate::error::MarketDataError;

/// Historical daily OHLCV source.
///
/// An empty series is a valid `Ok` outcome meaning the provider holds no
/// trading data for the range; transport and payload failures are `Err`.
/// The two must stay independently observable.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Daily bars for `symbol` over the closed `range`, ascending by date.
    async fn fetch_daily(
        &self,
        symbol: &str,
        range: &DateRange,
    ) -> Result<PriceSeries, MarketDataError>;
}
