use thiserror::Error;

use metal_markets_data::MarketDataError;

/// Errors crossing the pipeline boundary.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Series fetch failed; carries the request context so the report is
    /// actionable without digging through logs.
    #[error("history fetch for {symbol} ({start}..{end}) failed: {source}")]
    Fetch {
        symbol: String,
        start: String,
        end: String,
        #[source]
        source: MarketDataError,
    },

    /// CSV serialization or file creation failed.
    #[error("CSV export to {path} failed: {source}")]
    Export {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// Filesystem failure while flushing an export.
    #[error("export I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Chart backend failed to draw or write the image.
    #[error("chart render to {path} failed: {message}")]
    Chart { path: String, message: String },
}
