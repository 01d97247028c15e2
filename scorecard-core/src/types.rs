//! Shared value types for the scorecard engine.

use serde::{Deserialize, Serialize};

/// Reserved numeric value standing in for "could not be computed".
///
/// A statistic formula that divides by zero produces NaN or an infinity;
/// the calculator replaces those with this sentinel so the point flows
/// through the pipeline as flagged data rather than as a numeric error.
pub const ERROR_VALUE: f64 = -9999.0;

/// Score recorded for a cell whose evaluation failed outright.
/// Distinct from a legitimate neutral score of 0.
pub const ERROR_SCORE: i32 = -9999;

/// Whether a value is the error sentinel.
///
/// The comparison is against the rounded value, so sentinel values that
/// picked up floating-point noise on the way through still match.
pub fn is_error_value(value: f64) -> bool {
    value.round() == ERROR_VALUE
}

/// One scalar statistic value at one time step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedValue {
    /// Epoch seconds.
    pub timestamp: i64,
    pub value: f64,
}

impl TimedValue {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// A contingency-table row as fetched from a store, before validation.
///
/// Store rows can carry NULLs, so every count is optional here; see
/// [`crate::stats::validate_contingency`] for the conversion into a
/// [`ContingencyRecord`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContingencyRow {
    pub hit: Option<f64>,
    pub false_alarm: Option<f64>,
    pub miss: Option<f64>,
    pub correct_negative: Option<f64>,
    pub timestamp: i64,
}

/// Validated contingency-table counts for one time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContingencyRecord {
    pub hit: f64,
    pub false_alarm: f64,
    pub miss: f64,
    pub correct_negative: f64,
    pub timestamp: i64,
}

/// A partial-sums row as fetched from a store, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialSumRow {
    pub square_diff_sum: Option<f64>,
    pub count_sum: Option<f64>,
    pub obs_model_diff_sum: Option<f64>,
    pub model_sum: Option<f64>,
    pub obs_sum: Option<f64>,
    pub abs_sum: Option<f64>,
    pub timestamp: i64,
}

/// Validated running sums for one time step of an error-magnitude statistic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialSumRecord {
    pub square_diff_sum: f64,
    pub count_sum: f64,
    pub obs_model_diff_sum: f64,
    pub model_sum: f64,
    pub obs_sum: f64,
    pub abs_sum: f64,
    pub timestamp: i64,
}

/// A control series and an experimental series, each sorted ascending by
/// timestamp. Ordering is the producer's responsibility and is not
/// re-verified here.
#[derive(Debug, Clone, Default)]
pub struct PairedSeries {
    pub control: Vec<TimedValue>,
    pub experimental: Vec<TimedValue>,
}

/// Two equal-length value sequences where index `i` on both sides refers
/// to the same timestamp. The only input the significance engine accepts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchedSample {
    pub control: Vec<f64>,
    pub experimental: Vec<f64>,
}

impl MatchedSample {
    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.control.len()
    }

    pub fn is_empty(&self) -> bool {
        self.control.is_empty()
    }
}

/// Whether an increase of the experimental value relative to control is
/// desirable for the statistic under test.
///
/// Supplied by the caller per statistic kind; it is not derivable from
/// the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoodnessPolarity {
    /// An increase is desirable (+1).
    Positive,
    /// An increase is undesirable (-1).
    Negative,
}

impl GoodnessPolarity {
    pub fn sign(self) -> i32 {
        match self {
            GoodnessPolarity::Positive => 1,
            GoodnessPolarity::Negative => -1,
        }
    }
}

/// Significance levels for the major and minor score bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// p-values at or below this level score magnitude 2.
    pub major: f64,
    /// p-values at or below this level (but above `major`) score magnitude 1.
    pub minor: f64,
}

impl Thresholds {
    /// Create a threshold pair.
    ///
    /// # Panics
    /// Panics if either level is outside (0, 0.5) or if `major > minor`
    /// (major is the stricter significance level).
    pub fn new(major: f64, minor: f64) -> Self {
        assert!(
            major > 0.0 && major < 0.5,
            "major threshold must be between 0 and 0.5 (exclusive)"
        );
        assert!(
            minor > 0.0 && minor < 0.5,
            "minor threshold must be between 0 and 0.5 (exclusive)"
        );
        assert!(major <= minor, "major threshold must not exceed minor");
        Self { major, minor }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            major: 0.01,
            minor: 0.05,
        }
    }
}

/// Outcome of one significance test: the p-value and the discrete score
/// used to color a scorecard cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificanceResult {
    pub p_value: f64,
    /// One of {-2, -1, 0, 1, 2}, or [`ERROR_SCORE`].
    pub score: i32,
}

impl SignificanceResult {
    pub fn new(p_value: f64, score: i32) -> Self {
        Self { p_value, score }
    }

    /// The defined no-significant-difference result (p = 1, score 0).
    pub fn neutral() -> Self {
        Self {
            p_value: 1.0,
            score: 0,
        }
    }

    /// The could-not-be-computed result.
    pub fn error() -> Self {
        Self {
            p_value: ERROR_VALUE,
            score: ERROR_SCORE,
        }
    }

    pub fn is_error(&self) -> bool {
        self.score == ERROR_SCORE
    }
}
