//! scorecard: significance scorecards for forecast verification.
//!
//! This library wires the scorecard engine to the outside world: it
//! fetches a scorecard document from a document store, evaluates every
//! cell (control vs. experimental, one statistic each) across a bounded
//! worker pool, renders the resulting grid, and notifies a downstream
//! dashboard once the batch is written.

pub mod cli;
pub mod config;
pub mod document;
pub mod notify;
pub mod orchestrator;
pub mod polarity;
pub mod source;

// Re-export core types for convenience
pub use scorecard_core::protocol;
pub use scorecard_core::report::{CellOutcome, ReportError, Reporter, TerminalReporter};
pub use scorecard_core::{
    GoodnessPolarity, PairedTTest, ScoreCell, SignificanceResult, Statistic, Thresholds,
};

// Re-export main types from this crate
pub use cli::Cli;
pub use config::Config;
pub use document::{CellSpec, ScorecardDocument};
pub use notify::{BatchNotification, DashboardNotifier, NotifyError};
pub use orchestrator::{evaluate_cell, Orchestrator, OrchestratorError};
pub use polarity::polarity_for;
pub use source::{JsonDocumentStore, RecordSource, SourceError};
