//! The statistic-to-polarity table.
//!
//! Polarity is a property of the statistic's meaning, not of the data,
//! so it lives in a fixed lookup here rather than in the engine.

use scorecard_core::{ContingencyStatistic, GoodnessPolarity, ScalarStatistic, Statistic};

/// Goodness polarity for a statistic: error-magnitude statistics and the
/// false alarm ratio carry Positive, skill scores and the detection
/// probabilities carry Negative.
pub fn polarity_for(statistic: &Statistic) -> GoodnessPolarity {
    match statistic {
        Statistic::Scalar(ScalarStatistic::Rmse)
        | Statistic::Scalar(ScalarStatistic::Bias)
        | Statistic::Scalar(ScalarStatistic::MaeTempDew)
        | Statistic::Scalar(ScalarStatistic::Mae)
        | Statistic::Contingency(ContingencyStatistic::Far) => GoodnessPolarity::Positive,
        Statistic::Contingency(ContingencyStatistic::Tss)
        | Statistic::Contingency(ContingencyStatistic::PodYes(_))
        | Statistic::Contingency(ContingencyStatistic::PodNo(_))
        | Statistic::Contingency(ContingencyStatistic::Csi)
        | Statistic::Contingency(ContingencyStatistic::Hss)
        | Statistic::Contingency(ContingencyStatistic::Ets) => GoodnessPolarity::Negative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statistics_and_far_are_positive() {
        for name in [
            "RMSE",
            "Bias (Model - Obs)",
            "MAE (temp and dewpoint only)",
            "MAE",
            "FAR (False Alarm Ratio)",
        ] {
            let statistic = Statistic::from_name(name).unwrap();
            assert_eq!(
                polarity_for(&statistic),
                GoodnessPolarity::Positive,
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_skill_statistics_are_negative() {
        for name in [
            "TSS (True Skill Score)",
            "PODy (POD of value < threshold)",
            "PODy (POD of value > threshold)",
            "PODn (POD of value > threshold)",
            "PODn (POD of value < threshold)",
            "CSI (Critical Success Index)",
            "HSS (Heidke Skill Score)",
            "ETS (Equitable Threat Score)",
        ] {
            let statistic = Statistic::from_name(name).unwrap();
            assert_eq!(
                polarity_for(&statistic),
                GoodnessPolarity::Negative,
                "{}",
                name
            );
        }
    }
}
