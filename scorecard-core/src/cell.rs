//! Per-cell evaluation: dispatch over raw-record kinds and the full
//! derive -> match -> test pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::{match_series, MatchError};
use crate::significance::{PairedTTest, SignificanceError};
use crate::stats::{
    compute_contingency_statistic, compute_scalar_statistic, validate_contingency,
    validate_partial_sums, StatError, Statistic,
};
use crate::types::{
    ContingencyRow, GoodnessPolarity, PairedSeries, PartialSumRow, SignificanceResult, Thresholds,
    TimedValue,
};

/// One side's raw input for a cell, tagged by record kind.
///
/// The kind is determined once by the producer from the shape of the raw
/// query result and stated explicitly here; it is never inferred from
/// field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rows", rename_all = "kebab-case")]
pub enum RecordBatch {
    Contingency(Vec<ContingencyRow>),
    PartialSums(Vec<PartialSumRow>),
    Precomputed(Vec<TimedValue>),
}

impl RecordBatch {
    /// Number of raw rows on this side.
    pub fn len(&self) -> usize {
        match self {
            RecordBatch::Contingency(rows) => rows.len(),
            RecordBatch::PartialSums(rows) => rows.len(),
            RecordBatch::Precomputed(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derive the per-time-step statistic series for one side.
///
/// Rows failing validation ([`StatError::InvalidInput`]) are skipped, so
/// a bad time step drops out of the series instead of aborting it. A
/// formula that comes out non-finite contributes the error sentinel,
/// which the matcher later drops.
///
/// # Errors
/// Returns [`StatError::RecordKindMismatch`] when the batch kind does
/// not belong to the statistic's family. Pre-computed values pair with
/// any statistic.
pub fn derive_series(batch: &RecordBatch, statistic: Statistic) -> Result<Vec<TimedValue>, StatError> {
    match (batch, statistic) {
        (RecordBatch::Contingency(rows), Statistic::Contingency(kind)) => Ok(rows
            .iter()
            .filter_map(|row| validate_contingency(row).ok())
            .map(|record| {
                TimedValue::new(
                    record.timestamp,
                    compute_contingency_statistic(&record, kind),
                )
            })
            .collect()),
        (RecordBatch::PartialSums(rows), Statistic::Scalar(kind)) => Ok(rows
            .iter()
            .filter_map(|row| validate_partial_sums(row).ok())
            .map(|record| TimedValue::new(record.timestamp, compute_scalar_statistic(&record, kind)))
            .collect()),
        (RecordBatch::Precomputed(values), _) => Ok(values.clone()),
        (RecordBatch::Contingency(_), Statistic::Scalar(_))
        | (RecordBatch::PartialSums(_), Statistic::Contingency(_)) => {
            Err(StatError::RecordKindMismatch {
                statistic: statistic.name().to_string(),
            })
        }
    }
}

/// Errors from evaluating one scorecard cell.
#[derive(Debug, Error)]
pub enum CellError {
    #[error(transparent)]
    Stat(#[from] StatError),
    #[error(transparent)]
    Match(#[from] MatchError),
    #[error(transparent)]
    Significance(#[from] SignificanceError),
}

/// The unit of work: one statistic, one polarity, one threshold pair,
/// and the raw records for both sides of the comparison.
///
/// Created per scorecard cell by the orchestrator and consumed exactly
/// once by [`ScoreCell::evaluate`].
#[derive(Debug, Clone)]
pub struct ScoreCell {
    pub statistic: Statistic,
    pub polarity: GoodnessPolarity,
    pub thresholds: Thresholds,
    pub control: RecordBatch,
    pub experimental: RecordBatch,
}

impl ScoreCell {
    /// Run the full pipeline: derive a value series per side, align the
    /// two series by timestamp, and significance-test the aligned values.
    ///
    /// # Errors
    /// Any [`CellError`] fails the cell; the caller records the error
    /// sentinel score for it.
    pub fn evaluate(self) -> Result<SignificanceResult, CellError> {
        let series = PairedSeries {
            control: derive_series(&self.control, self.statistic)?,
            experimental: derive_series(&self.experimental, self.statistic)?,
        };

        let matched = match_series(&series.control, &series.experimental)?;

        let test = PairedTTest::new(self.thresholds);
        let result = test.evaluate(&matched, self.polarity)?;
        Ok(result)
    }
}
