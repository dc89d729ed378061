use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised by domain constructors and lookups.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// Selector value with no entry in the symbol table.
    #[error("unknown metal: {0}")]
    UnknownMetal(String),

    /// Request interval whose start lies after its end.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}
