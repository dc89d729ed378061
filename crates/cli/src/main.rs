//! Command line interface for the metal markets analysis toolkit.
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use prettytable::{Table, row};

use metal_markets_data::{SpotPriceFetcher, YahooFinanceProvider};
use metal_markets_domain::entities::metal::Metal;
use metal_markets_domain::value_objects::date_range::DateRange;
use metal_markets_pipeline::{
    AnalysisConfig, AnalysisOutcome, AnalysisReport, AnalysisRequest, run_analysis,
};

#[derive(Parser)]
#[command(name = "metal-markets")]
#[command(about = "Análisis de Mercados de Metales", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Monitor the live nickel spot price
    Spot {
        /// Override the spot page URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Fetch, enrich, export and chart a historical price series
    Analyze {
        /// Metal name (Petróleo, Aluminio, Cobre, Níquel)
        #[arg(short, long, default_value = "Níquel")]
        metal: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long, default_value = "2021-01-01")]
        start_date: NaiveDate,

        /// Start time (HH:MM)
        #[arg(long, default_value = "00:00")]
        start_time: String,

        /// End date (YYYY-MM-DD)
        #[arg(long, default_value = "2023-01-01")]
        end_date: NaiveDate,

        /// End time (HH:MM)
        #[arg(long, default_value = "23:59")]
        end_time: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = AnalysisConfig::from_env();

    match &cli.command {
        Commands::Spot { url } => {
            println!("Monitoreando el precio del níquel en tiempo real...");
            let fetcher = match url {
                Some(url) => SpotPriceFetcher::with_url(url),
                None => SpotPriceFetcher::new(),
            };

            match fetcher.fetch().await {
                Ok(quote) => {
                    println!("{:.2} USD/MT", quote.price);
                    println!("{:.2} MXN/MT", quote.converted(config.exchange_rate));
                }
                Err(e) => {
                    // Degraded display: an error line instead of a price,
                    // and no converted value.
                    println!("Error: {e}");
                }
            }
        }
        Commands::Analyze {
            metal,
            start_date,
            start_time,
            end_date,
            end_time,
        } => {
            let metal = Metal::from_name(metal)?;
            let range = DateRange::from_parts(
                *start_date,
                parse_time(start_time)?,
                *end_date,
                parse_time(end_time)?,
            )?;

            println!(
                "Descargando datos para {} desde {} hasta {}...",
                metal,
                range.start(),
                range.end()
            );

            let provider = YahooFinanceProvider::new();
            let request = AnalysisRequest { metal, range };

            match run_analysis(&provider, &config, &request).await? {
                AnalysisOutcome::NoData => {
                    println!("No se encontraron datos para las fechas seleccionadas.");
                }
                AnalysisOutcome::Completed(report) => {
                    println!("Datos guardados en '{}'.", report.export.path.display());
                    print_series(&report);
                    println!(
                        "Gráfico USD: {} ({})",
                        report.usd_chart.path.display(),
                        report.usd_chart.mime
                    );
                    println!(
                        "Gráfico MXN: {} ({})",
                        report.mxn_chart.path.display(),
                        report.mxn_chart.mime
                    );
                }
            }
        }
    }

    Ok(())
}

/// Accepts the selector's HH:MM form, or HH:MM:SS.
fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|e| anyhow::anyhow!("invalid time `{value}`: {e}"))
}

fn print_series(report: &AnalysisReport) {
    let mut table = Table::new();
    table.add_row(row![
        "Fecha", "Open", "High", "Low", "Close", "Volume", "% Change", "Close MXN"
    ]);

    for bar in report.series.bars() {
        let pct = bar
            .pct_change
            .map(|p| format!("{p:.2}"))
            .unwrap_or_default();
        let converted = bar
            .close_converted
            .map(|c| format!("{c:.2}"))
            .unwrap_or_default();
        table.add_row(row![
            bar.date,
            format!("{:.2}", bar.open),
            format!("{:.2}", bar.high),
            format!("{:.2}", bar.low),
            format!("{:.2}", bar.close),
            bar.volume,
            pct,
            converted
        ]);
    }

    table.printstd();
}
