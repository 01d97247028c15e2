use crate::types::SignificanceResult;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One evaluated scorecard cell, ready for rendering.
#[derive(Debug, Clone)]
pub struct CellOutcome {
    /// Row label, e.g. region and lead time.
    pub label: String,
    /// Display name of the statistic under test.
    pub statistic: String,
    pub result: SignificanceResult,
    /// Why the cell carries the error score, when it does.
    pub error: Option<String>,
}

impl CellOutcome {
    /// A cell that produced a score.
    pub fn scored(
        label: impl Into<String>,
        statistic: impl Into<String>,
        result: SignificanceResult,
    ) -> Self {
        Self {
            label: label.into(),
            statistic: statistic.into(),
            result,
            error: None,
        }
    }

    /// A cell whose evaluation failed; recorded with the sentinel score.
    pub fn failed(
        label: impl Into<String>,
        statistic: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            statistic: statistic.into(),
            result: SignificanceResult::error(),
            error: Some(error.into()),
        }
    }
}

pub trait Reporter: Send + Sync {
    fn report(&self, title: &str, outcomes: &[CellOutcome]) -> Result<(), ReportError>;
}

mod terminal;
pub use terminal::TerminalReporter;
