use thiserror::Error;

/// Errors from the acquisition layer.
///
/// Tagged so callers can decide per kind, e.g. skip the currency
/// conversion on a failed spot fetch instead of propagating a bogus value.
#[derive(Debug, Error)]
pub enum MarketDataError {
    /// Transport-level failure (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the source.
    #[error("unexpected HTTP status {status} from {url}")]
    Http { status: u16, url: String },

    /// Expected content missing or malformed (selector miss, non-numeric
    /// text, unexpected payload shape).
    #[error("parse error: {0}")]
    Parse(String),

    /// Error payload reported by the provider itself.
    #[error("provider error {code}: {description}")]
    Provider { code: String, description: String },
}
