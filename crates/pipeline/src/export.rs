//! CSV export of enriched series.

use std::path::Path;

use tracing::info;

use metal_markets_domain::series::PriceSeries;

use crate::error::PipelineError;

/// Writes the series as UTF-8 CSV with the date as an explicit column.
///
/// Header: `date,open,high,low,close,volume,pct_change,close_converted`.
/// Overwrites any existing file at `path` without warning.
///
/// # Errors
/// Fails on filesystem or serialization errors.
pub fn export_table(series: &PriceSeries, path: &Path) -> Result<(), PipelineError> {
    let export_err = |source: csv::Error| PipelineError::Export {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(export_err)?;
    for bar in series.bars() {
        writer.serialize(bar).map_err(export_err)?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = series.len(), "series exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use metal_markets_domain::entities::price_bar::PriceBar;
    use metal_markets_domain::value_objects::exchange_rate::ExchangeRate;

    fn bar(day: u32, close: f64) -> PriceBar {
        let date = NaiveDate::from_ymd_opt(2021, 1, day).unwrap();
        PriceBar::new(date, close - 0.5, close + 1.0, close - 1.0, close, 1_000)
    }

    fn sample_series() -> PriceSeries {
        PriceSeries::new(vec![bar(4, 100.0), bar(5, 110.0), bar(6, 99.0)])
            .enrich(ExchangeRate::new(18.5))
    }

    #[test]
    fn export_round_trips_rows_and_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datos_cobre.csv");
        let series = sample_series();

        export_table(&series, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            vec![
                "date",
                "open",
                "high",
                "low",
                "close",
                "volume",
                "pct_change",
                "close_converted"
            ]
        );

        let rows: Vec<PriceBar> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), series.len());
        assert_eq!(rows[0].date, series.bars()[0].date);
        assert!(rows[0].pct_change.is_none());
        assert_eq!(rows[1].pct_change, series.bars()[1].pct_change);
        assert_eq!(rows[2].close_converted, series.bars()[2].close_converted);
    }

    #[test]
    fn export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("datos_cobre.csv");

        export_table(&sample_series(), &path).unwrap();
        let shorter = PriceSeries::new(vec![bar(4, 100.0)]).enrich(ExchangeRate::new(18.5));
        export_table(&shorter, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.deserialize::<PriceBar>().count(), 1);
    }
}
