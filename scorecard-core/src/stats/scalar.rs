//! Partial-sums statistic formulas.

use super::{finite_or_error, ScalarStatistic};
use crate::types::PartialSumRecord;

/// Compute one error-magnitude statistic from running sums.
pub(super) fn compute(record: &PartialSumRecord, kind: ScalarStatistic) -> f64 {
    let value = match kind {
        ScalarStatistic::Rmse => (record.square_diff_sum / record.count_sum).sqrt(),
        ScalarStatistic::Bias => (record.model_sum - record.obs_sum) / record.count_sum,
        // Two statistic names, one formula.
        ScalarStatistic::MaeTempDew | ScalarStatistic::Mae => record.abs_sum / record.count_sum,
    };

    finite_or_error(value)
}
