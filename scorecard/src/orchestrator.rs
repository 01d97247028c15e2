//! Evaluation orchestrator: runs every cell of a document across a
//! bounded worker pool.
//!
//! The engine itself is pure and synchronous; the pool bound exists for
//! the callers around it (document fetches and result writes share a
//! connection-limited store), so the width is configuration, not a
//! property of the engine.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use scorecard_core::{CellOutcome, ScoreCell, Thresholds};

use crate::document::{CellSpec, ScorecardDocument};
use crate::polarity::polarity_for;

/// Errors that can occur during orchestration.
///
/// A cell whose evaluation fails is not an orchestration error: it is
/// recorded as an error-scored outcome and the batch continues.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The worker pool semaphore closed while cells were pending.
    #[error("Worker pool closed unexpectedly: {0}")]
    Pool(String),

    /// An evaluation task panicked or was cancelled.
    #[error("Evaluation task failed: {0}")]
    Task(String),
}

/// Evaluate one cell spec into an outcome.
///
/// Polarity comes from the fixed statistic table; thresholds come from
/// the cell override when present, the document-wide pair otherwise.
/// A failed evaluation becomes an error-scored outcome carrying the
/// error text, so one bad cell never sinks the batch.
pub fn evaluate_cell(spec: CellSpec, default_thresholds: Thresholds) -> CellOutcome {
    let label = spec.label;
    let statistic_name = spec.statistic.name();

    let cell = ScoreCell {
        statistic: spec.statistic,
        polarity: polarity_for(&spec.statistic),
        thresholds: spec.thresholds.unwrap_or(default_thresholds),
        control: spec.control,
        experimental: spec.experimental,
    };

    match cell.evaluate() {
        Ok(result) => CellOutcome::scored(label, statistic_name, result),
        Err(error) => CellOutcome::failed(label, statistic_name, error.to_string()),
    }
}

/// Orchestrator for evaluating scorecard documents.
pub struct Orchestrator {
    /// Maximum number of cells evaluated concurrently.
    workers: usize,
    /// Document-wide significance levels.
    thresholds: Thresholds,
}

impl Orchestrator {
    pub fn new(workers: usize, thresholds: Thresholds) -> Self {
        Self {
            workers: workers.max(1),
            thresholds,
        }
    }

    /// Evaluate every cell of the document.
    ///
    /// Cells run concurrently, at most `workers` at a time, and the
    /// outcomes come back in document order regardless of completion
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error only for pool/task failures; per-cell evaluation
    /// failures are folded into the outcomes.
    pub async fn run(
        &self,
        document: ScorecardDocument,
    ) -> Result<Vec<CellOutcome>, OrchestratorError> {
        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut tasks: JoinSet<(usize, CellOutcome)> = JoinSet::new();

        for (index, spec) in document.cells.into_iter().enumerate() {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .map_err(|e| OrchestratorError::Pool(e.to_string()))?;
            let thresholds = self.thresholds;

            tasks.spawn(async move {
                let outcome = evaluate_cell(spec, thresholds);
                drop(permit);
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<CellOutcome>> = Vec::new();
        slots.resize_with(tasks.len(), || None);

        while let Some(joined) = tasks.join_next().await {
            let (index, outcome) = joined.map_err(|e| OrchestratorError::Task(e.to_string()))?;
            slots[index] = Some(outcome);
        }

        Ok(slots.into_iter().flatten().collect())
    }
}
