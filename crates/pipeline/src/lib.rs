//! Series analysis pipeline.
//!
//! Turns a metal + date range request into an enriched daily table, a CSV
//! export and two trend charts (USD and MXN):
//! fetch → enrich → export → render.

/// Orchestration of one analysis run.
pub mod analysis;
/// Trend chart rendering.
pub mod chart;
/// Run-scoped configuration.
pub mod config;
/// Error types.
pub mod error;
/// CSV export.
pub mod export;

pub use analysis::{AnalysisOutcome, AnalysisReport, AnalysisRequest, Artifact, run_analysis};
pub use chart::Currency;
pub use config::AnalysisConfig;
pub use error::PipelineError;
