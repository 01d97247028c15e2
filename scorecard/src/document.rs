//! The scorecard document: the batch of cells one job evaluates.

use scorecard_core::{RecordBatch, Statistic, Thresholds};
use serde::{Deserialize, Serialize};

/// One cell of a scorecard document: a statistic name plus the raw
/// records for both sides of the comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellSpec {
    /// Row label shown in the rendered grid, e.g. region and lead time.
    pub label: String,
    /// Statistic under test, by canonical name.
    pub statistic: Statistic,
    /// Per-cell override of the document-wide significance levels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Thresholds>,
    pub control: RecordBatch,
    pub experimental: RecordBatch,
}

/// A full scorecard document as stored in the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorecardDocument {
    pub id: String,
    /// Human-readable comparison title, e.g. "ops vs. retro-v2".
    pub title: String,
    pub cells: Vec<CellSpec>,
}
