//! Core types and computations for scorecard.
//!
//! This crate holds the statistic-derivation and significance-
//! classification engine shared by the scorecard CLI and the scorecard
//! server: raw per-time-step rows become scalar statistic values, a
//! control series is aligned against an experimental series by
//! timestamp, and a paired t-test classifies each comparison into a
//! bounded integer score. Everything here is a pure computation over
//! its inputs; nothing performs I/O, suspends, or keeps state across
//! calls, so the engine can run from many concurrent workers untouched.

pub mod cell;
pub mod matching;
pub mod protocol;
pub mod report;
pub mod significance;
pub mod stats;
pub mod types;

// Re-export main types for convenience
pub use cell::{derive_series, CellError, RecordBatch, ScoreCell};
pub use matching::{match_series, MatchError};
pub use protocol::{
    HealthResponse, JobState, JobStatusResponse, JobSummary, ShutdownResponse, SubmitJobRequest,
    SubmitJobResponse,
};
pub use report::{CellOutcome, ReportError, Reporter, TerminalReporter};
pub use significance::{PairedTTest, SignificanceError};
pub use stats::{
    compute_contingency_statistic, compute_scalar_statistic, validate_contingency,
    validate_partial_sums, ContingencyStatistic, ScalarStatistic, StatError, Statistic,
    ThresholdDirection,
};
pub use types::{
    is_error_value, ContingencyRecord, ContingencyRow, GoodnessPolarity, MatchedSample,
    PairedSeries, PartialSumRecord, PartialSumRow, SignificanceResult, Thresholds, TimedValue,
    ERROR_SCORE, ERROR_VALUE,
};
