//! Orchestration of one analysis run: fetch → enrich → export → render.

use std::path::PathBuf;

use tracing::{info, warn};

use metal_markets_data::HistoryProvider;
use metal_markets_domain::entities::metal::Metal;
use metal_markets_domain::series::PriceSeries;
use metal_markets_domain::value_objects::date_range::DateRange;

use crate::chart::{self, Currency};
use crate::config::AnalysisConfig;
use crate::error::PipelineError;
use crate::export;

/// MIME type of the CSV export.
pub const CSV_MIME: &str = "text/csv";
/// MIME type of the chart images.
pub const PNG_MIME: &str = "image/png";

/// One user-triggered analysis.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest {
    pub metal: Metal,
    pub range: DateRange,
}

/// File produced by a run, with the metadata a download needs.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub path: PathBuf,
    pub mime: &'static str,
}

/// Outcome of a completed pipeline run.
#[derive(Debug)]
pub enum AnalysisOutcome {
    /// Well-formed request, zero trading rows. Terminal: no artifacts.
    NoData,
    /// Enriched data with its export and chart artifacts.
    Completed(AnalysisReport),
}

/// Everything a successful run produced.
#[derive(Debug)]
pub struct AnalysisReport {
    pub series: PriceSeries,
    pub export: Artifact,
    pub usd_chart: Artifact,
    pub mxn_chart: Artifact,
}

/// Runs the full pipeline for one request.
///
/// Resolves the ticker, fetches daily history, enriches the series,
/// exports the CSV and renders one chart per currency. An empty provider
/// result terminates early with `NoData` and writes nothing; when data
/// exists the export always lands before the charts.
///
/// # Errors
/// Provider failures surface as `Fetch` with symbol and range context;
/// export and render failures as `Export`/`Io`/`Chart`.
pub async fn run_analysis(
    provider: &dyn HistoryProvider,
    config: &AnalysisConfig,
    request: &AnalysisRequest,
) -> Result<AnalysisOutcome, PipelineError> {
    let symbol = request.metal.symbol();
    info!(
        metal = %request.metal,
        symbol,
        start = %request.range.start(),
        end = %request.range.end(),
        "starting analysis"
    );

    let series = provider
        .fetch_daily(symbol, &request.range)
        .await
        .map_err(|source| PipelineError::Fetch {
            symbol: symbol.to_string(),
            start: request.range.start().to_string(),
            end: request.range.end().to_string(),
            source,
        })?;

    if series.is_empty() {
        warn!(symbol, "no trading data in range");
        return Ok(AnalysisOutcome::NoData);
    }

    let series = series.enrich(config.exchange_rate);

    let slug = request.metal.slug();
    let export_path = config.output_dir.join(format!("datos_{slug}.csv"));
    export::export_table(&series, &export_path)?;

    let usd_path = config
        .output_dir
        .join(format!("tendencia_precios_{slug}_usd.png"));
    chart::render_chart(&series, request.metal, Currency::Usd, &usd_path)?;

    let mxn_path = config
        .output_dir
        .join(format!("tendencia_precios_{slug}_mxn.png"));
    chart::render_chart(&series, request.metal, Currency::Mxn, &mxn_path)?;

    Ok(AnalysisOutcome::Completed(AnalysisReport {
        series,
        export: Artifact {
            path: export_path,
            mime: CSV_MIME,
        },
        usd_chart: Artifact {
            path: usd_path,
            mime: PNG_MIME,
        },
        mxn_chart: Artifact {
            path: mxn_path,
            mime: PNG_MIME,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveTime};

    use metal_markets_data::MarketDataError;
    use metal_markets_domain::entities::price_bar::PriceBar;
    use metal_markets_domain::value_objects::exchange_rate::ExchangeRate;

    struct StaticProvider {
        bars: Vec<PriceBar>,
        seen_symbol: Mutex<Option<String>>,
    }

    impl StaticProvider {
        fn new(bars: Vec<PriceBar>) -> Self {
            Self {
                bars,
                seen_symbol: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl HistoryProvider for StaticProvider {
        async fn fetch_daily(
            &self,
            symbol: &str,
            _range: &DateRange,
        ) -> Result<PriceSeries, MarketDataError> {
            *self.seen_symbol.lock().unwrap() = Some(symbol.to_string());
            Ok(PriceSeries::new(self.bars.clone()))
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl HistoryProvider for FailingProvider {
        async fn fetch_daily(
            &self,
            _symbol: &str,
            _range: &DateRange,
        ) -> Result<PriceSeries, MarketDataError> {
            Err(MarketDataError::Provider {
                code: "Internal".to_string(),
                description: "backend unavailable".to_string(),
            })
        }
    }

    fn bar(day: u32, close: f64) -> PriceBar {
        let date = NaiveDate::from_ymd_opt(2021, 1, day).unwrap();
        PriceBar::new(date, close - 0.5, close + 1.0, close - 1.0, close, 1_000)
    }

    fn copper_request() -> AnalysisRequest {
        let range = DateRange::from_parts(
            NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            NaiveTime::MIN,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap(),
        )
        .unwrap();
        AnalysisRequest {
            metal: Metal::Cobre,
            range,
        }
    }

    fn config_in(dir: &std::path::Path) -> AnalysisConfig {
        AnalysisConfig {
            exchange_rate: ExchangeRate::new(18.5),
            output_dir: dir.to_path_buf(),
        }
    }

    #[tokio::test]
    async fn copper_run_produces_export_and_both_charts() {
        let dir = tempfile::tempdir().unwrap();
        let provider = StaticProvider::new(vec![bar(4, 3.60), bar(5, 3.64), bar(6, 3.58)]);

        let outcome = run_analysis(&provider, &config_in(dir.path()), &copper_request())
            .await
            .unwrap();

        assert_eq!(provider.seen_symbol.lock().unwrap().as_deref(), Some("HG=F"));

        let AnalysisOutcome::Completed(report) = outcome else {
            panic!("expected completed outcome");
        };
        assert_eq!(report.export.path, dir.path().join("datos_cobre.csv"));
        assert_eq!(report.export.mime, "text/csv");
        assert!(report.export.path.exists());

        for artifact in [&report.usd_chart, &report.mxn_chart] {
            assert_eq!(artifact.mime, "image/png");
            assert!(artifact.path.exists());
        }
        assert_eq!(
            report.usd_chart.path,
            dir.path().join("tendencia_precios_cobre_usd.png")
        );
        assert_eq!(
            report.mxn_chart.path,
            dir.path().join("tendencia_precios_cobre_mxn.png")
        );
    }

    #[tokio::test]
    async fn converted_column_tracks_usd_close_pointwise() {
        let dir = tempfile::tempdir().unwrap();
        let provider = StaticProvider::new(vec![bar(4, 3.60), bar(5, 3.64)]);

        let outcome = run_analysis(&provider, &config_in(dir.path()), &copper_request())
            .await
            .unwrap();

        let AnalysisOutcome::Completed(report) = outcome else {
            panic!("expected completed outcome");
        };
        for bar in report.series.bars() {
            assert_eq!(bar.close_converted.unwrap(), bar.close * 18.5);
        }
    }

    #[tokio::test]
    async fn empty_series_short_circuits_without_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let provider = StaticProvider::new(Vec::new());

        let outcome = run_analysis(&provider, &config_in(dir.path()), &copper_request())
            .await
            .unwrap();

        assert!(matches!(outcome, AnalysisOutcome::NoData));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn provider_failure_carries_request_context() {
        let dir = tempfile::tempdir().unwrap();

        let err = run_analysis(&FailingProvider, &config_in(dir.path()), &copper_request())
            .await
            .unwrap_err();

        let PipelineError::Fetch { symbol, start, .. } = err else {
            panic!("expected fetch error");
        };
        assert_eq!(symbol, "HG=F");
        assert!(start.starts_with("2021-01-01"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
