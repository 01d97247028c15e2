//! Statistic derivation: turning raw per-time-step rows into scalar values.
//!
//! Each supported statistic reads either validated contingency-table
//! counts or validated partial sums and produces one value per time step,
//! scaled to read as a percentage where the formula is a ratio. A formula
//! that divides by zero yields NaN or an infinity; those are replaced
//! with [`ERROR_VALUE`](crate::types::ERROR_VALUE) so the point survives
//! as flagged data and is dropped later during matching.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ContingencyRecord, ContingencyRow, PartialSumRecord, PartialSumRow};

mod contingency;
mod scalar;

/// Errors from statistic parsing, validation, and dispatch.
#[derive(Debug, Error)]
pub enum StatError {
    /// A required raw field was absent, or a contingency count was
    /// negative. The producing time step is skipped, not the whole series.
    #[error("invalid input at timestamp {timestamp}: {reason}")]
    InvalidInput { timestamp: i64, reason: String },

    /// The statistic name is not recognized. Fails the whole cell.
    #[error("unsupported statistic: '{0}'")]
    UnsupportedStatistic(String),

    /// The raw record kind does not belong to the statistic's family
    /// (e.g. contingency counts fed to an error-magnitude statistic).
    /// Fails the whole cell.
    #[error("record kind does not match statistic '{statistic}'")]
    RecordKindMismatch { statistic: String },
}

/// Threshold direction of a probability-of-detection statistic.
///
/// Both directions reuse the same formula; the direction only records
/// which side of the threshold the underlying event was counted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdDirection {
    Below,
    Above,
}

/// Skill statistics computed from contingency-table counts. All scaled
/// by 100 to read as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContingencyStatistic {
    /// True skill score: `(hit*cn - fa*miss) / ((hit+miss)(fa+cn))`.
    Tss,
    /// Probability of detection (yes): `hit / (hit + miss)`.
    PodYes(ThresholdDirection),
    /// Probability of detection (no): `cn / (cn + fa)`.
    PodNo(ThresholdDirection),
    /// False alarm ratio: `fa / (fa + hit)`.
    Far,
    /// Critical success index: `hit / (hit + miss + fa)`.
    Csi,
    /// Heidke skill score.
    Hss,
    /// Equitable threat score, with the hits-expected-by-chance correction.
    Ets,
}

/// Error-magnitude statistics computed from running partial sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarStatistic {
    /// `sqrt(square_diff_sum / count_sum)`.
    Rmse,
    /// `(model_sum - obs_sum) / count_sum`.
    Bias,
    /// `abs_sum / count_sum`, restricted to temperature/dewpoint data sets.
    MaeTempDew,
    /// `abs_sum / count_sum`.
    Mae,
}

/// A statistic kind: which family it belongs to determines which raw
/// record kind it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Statistic {
    Contingency(ContingencyStatistic),
    Scalar(ScalarStatistic),
}

impl Statistic {
    /// Parse a statistic from its canonical display name.
    ///
    /// # Errors
    /// Returns [`StatError::UnsupportedStatistic`] for an unknown name.
    pub fn from_name(name: &str) -> Result<Self, StatError> {
        use ContingencyStatistic::*;
        use ScalarStatistic::*;
        use ThresholdDirection::*;

        let statistic = match name {
            "TSS (True Skill Score)" => Statistic::Contingency(Tss),
            "PODy (POD of value < threshold)" => Statistic::Contingency(PodYes(Below)),
            "PODy (POD of value > threshold)" => Statistic::Contingency(PodYes(Above)),
            "PODn (POD of value > threshold)" => Statistic::Contingency(PodNo(Above)),
            "PODn (POD of value < threshold)" => Statistic::Contingency(PodNo(Below)),
            "FAR (False Alarm Ratio)" => Statistic::Contingency(Far),
            "CSI (Critical Success Index)" => Statistic::Contingency(Csi),
            "HSS (Heidke Skill Score)" => Statistic::Contingency(Hss),
            "ETS (Equitable Threat Score)" => Statistic::Contingency(Ets),
            "RMSE" => Statistic::Scalar(Rmse),
            "Bias (Model - Obs)" => Statistic::Scalar(Bias),
            "MAE (temp and dewpoint only)" => Statistic::Scalar(MaeTempDew),
            "MAE" => Statistic::Scalar(Mae),
            other => return Err(StatError::UnsupportedStatistic(other.to_string())),
        };
        Ok(statistic)
    }

    /// The canonical display name, the inverse of [`Statistic::from_name`].
    pub fn name(&self) -> &'static str {
        use ContingencyStatistic::*;
        use ScalarStatistic::*;
        use ThresholdDirection::*;

        match self {
            Statistic::Contingency(Tss) => "TSS (True Skill Score)",
            Statistic::Contingency(PodYes(Below)) => "PODy (POD of value < threshold)",
            Statistic::Contingency(PodYes(Above)) => "PODy (POD of value > threshold)",
            Statistic::Contingency(PodNo(Above)) => "PODn (POD of value > threshold)",
            Statistic::Contingency(PodNo(Below)) => "PODn (POD of value < threshold)",
            Statistic::Contingency(Far) => "FAR (False Alarm Ratio)",
            Statistic::Contingency(Csi) => "CSI (Critical Success Index)",
            Statistic::Contingency(Hss) => "HSS (Heidke Skill Score)",
            Statistic::Contingency(Ets) => "ETS (Equitable Threat Score)",
            Statistic::Scalar(Rmse) => "RMSE",
            Statistic::Scalar(Bias) => "Bias (Model - Obs)",
            Statistic::Scalar(MaeTempDew) => "MAE (temp and dewpoint only)",
            Statistic::Scalar(Mae) => "MAE",
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Statistic {
    type Error = StatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Statistic::from_name(&value)
    }
}

impl From<Statistic> for String {
    fn from(statistic: Statistic) -> Self {
        statistic.name().to_string()
    }
}

/// Validate a raw contingency row: every count must be present and
/// non-negative.
///
/// # Errors
/// Returns [`StatError::InvalidInput`] naming the offending field; the
/// caller skips that time step rather than aborting the series.
pub fn validate_contingency(row: &ContingencyRow) -> Result<ContingencyRecord, StatError> {
    let field = |value: Option<f64>, name: &str| -> Result<f64, StatError> {
        let value = value.ok_or_else(|| StatError::InvalidInput {
            timestamp: row.timestamp,
            reason: format!("missing field '{}'", name),
        })?;
        if value < 0.0 {
            return Err(StatError::InvalidInput {
                timestamp: row.timestamp,
                reason: format!("negative count in field '{}'", name),
            });
        }
        Ok(value)
    };

    Ok(ContingencyRecord {
        hit: field(row.hit, "hit")?,
        false_alarm: field(row.false_alarm, "false_alarm")?,
        miss: field(row.miss, "miss")?,
        correct_negative: field(row.correct_negative, "correct_negative")?,
        timestamp: row.timestamp,
    })
}

/// Validate a raw partial-sums row: every sum must be present. Sums of
/// signed differences are allowed to be negative.
///
/// # Errors
/// Returns [`StatError::InvalidInput`] naming the missing field.
pub fn validate_partial_sums(row: &PartialSumRow) -> Result<PartialSumRecord, StatError> {
    let field = |value: Option<f64>, name: &str| -> Result<f64, StatError> {
        value.ok_or_else(|| StatError::InvalidInput {
            timestamp: row.timestamp,
            reason: format!("missing field '{}'", name),
        })
    };

    Ok(PartialSumRecord {
        square_diff_sum: field(row.square_diff_sum, "square_diff_sum")?,
        count_sum: field(row.count_sum, "count_sum")?,
        obs_model_diff_sum: field(row.obs_model_diff_sum, "obs_model_diff_sum")?,
        model_sum: field(row.model_sum, "model_sum")?,
        obs_sum: field(row.obs_sum, "obs_sum")?,
        abs_sum: field(row.abs_sum, "abs_sum")?,
        timestamp: row.timestamp,
    })
}

/// Compute a contingency-derived statistic for one time step.
///
/// Never fails: an undefined formula (zero denominator) comes back as
/// the error sentinel, a valid-but-flagged data point.
pub fn compute_contingency_statistic(
    record: &ContingencyRecord,
    kind: ContingencyStatistic,
) -> f64 {
    contingency::compute(record, kind)
}

/// Compute a partial-sums statistic for one time step.
///
/// Never fails: an undefined formula comes back as the error sentinel.
pub fn compute_scalar_statistic(record: &PartialSumRecord, kind: ScalarStatistic) -> f64 {
    scalar::compute(record, kind)
}

/// Replace a non-finite formula result with the error sentinel.
fn finite_or_error(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        crate::types::ERROR_VALUE
    }
}
