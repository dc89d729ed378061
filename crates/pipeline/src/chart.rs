//! Trend chart rendering.

use std::path::Path;

use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use tracing::info;

use metal_markets_domain::entities::metal::Metal;
use metal_markets_domain::series::PriceSeries;

use crate::error::PipelineError;

/// Currency view of the close column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Mxn,
}

impl Currency {
    /// Lowercase code used in filenames.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Mxn => "mxn",
        }
    }

    /// Uppercase code used in titles.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Mxn => "MXN",
        }
    }

    fn axis_label(&self) -> &'static str {
        match self {
            Currency::Usd => "Precio de Cierre (USD)",
            Currency::Mxn => "Precio de Cierre (MXN)",
        }
    }
}

/// 10x5 inch figure at 100 dpi.
const CHART_SIZE: (u32, u32) = (1000, 500);

/// Renders a close-price line chart for one currency view as a PNG.
///
/// X axis is the trading date, Y axis the close in the requested currency
/// (`close` for USD, `close_converted` for MXN), with a title, axis labels
/// and grid lines.
///
/// # Errors
/// `Chart` when the series holds no plottable values for the currency or
/// the backend fails to draw or write the image.
pub fn render_chart(
    series: &PriceSeries,
    metal: Metal,
    currency: Currency,
    path: &Path,
) -> Result<(), PipelineError> {
    let chart_err = |message: String| PipelineError::Chart {
        path: path.display().to_string(),
        message,
    };

    let points: Vec<(NaiveDate, f64)> = series
        .bars()
        .iter()
        .filter_map(|bar| {
            let value = match currency {
                Currency::Usd => Some(bar.close),
                Currency::Mxn => bar.close_converted,
            }?;
            Some((bar.date, value))
        })
        .collect();

    let (Some(&(first, _)), Some(&(last, _))) = (points.first(), points.last()) else {
        return Err(chart_err("no plottable values".to_string()));
    };

    let mut min_value = f64::INFINITY;
    let mut max_value = f64::NEG_INFINITY;
    for &(_, value) in &points {
        min_value = min_value.min(value);
        max_value = max_value.max(value);
    }
    // Degenerate ranges (single day, flat series) still need a drawable area.
    let x_end = if last > first { last } else { first + Duration::days(1) };
    if max_value <= min_value {
        min_value -= 1.0;
        max_value += 1.0;
    }

    let title = format!(
        "Tendencia de los Precios de {} en {}",
        metal.display_name(),
        currency.label()
    );

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_err(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(first..x_end, min_value..max_value)
        .map_err(|e| chart_err(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Fecha")
        .y_desc(currency.axis_label())
        .draw()
        .map_err(|e| chart_err(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(|e| chart_err(e.to_string()))?;

    root.present().map_err(|e| chart_err(e.to_string()))?;
    info!(path = %path.display(), currency = currency.code(), "chart rendered");
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

    fn enriched_series() -> PriceSeries {
        PriceSeries::new(vec![bar(4, 100.0), bar(5, 110.0), bar(6, 99.0)])
            .enrich(ExchangeRate::new(18.5))
    }

    #[test]
    fn renders_png_for_both_currencies() {
        let dir = tempfile::tempdir().unwrap();
        let series = enriched_series();

        for currency in [Currency::Usd, Currency::Mxn] {
            let path = dir
                .path()
                .join(format!("tendencia_precios_cobre_{}.png", currency.code()));
            render_chart(&series, Metal::Cobre, currency, &path).unwrap();

            let metadata = std::fs::metadata(&path).unwrap();
            assert!(metadata.len() > 0);
        }
    }

    #[test]
    fn renders_flat_single_day_series() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.png");
        let series = PriceSeries::new(vec![bar(4, 100.0)]).enrich(ExchangeRate::new(18.5));

        render_chart(&series, Metal::Niquel, Currency::Usd, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn mxn_chart_requires_enrichment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mxn.png");
        let raw = PriceSeries::new(vec![bar(4, 100.0), bar(5, 110.0)]);

        let err = render_chart(&raw, Metal::Cobre, Currency::Mxn, &path).unwrap_err();
        assert!(matches!(err, PipelineError::Chart { .. }));
        assert!(!path.exists());
    }
}
