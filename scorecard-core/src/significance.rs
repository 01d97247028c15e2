//! Paired significance testing and score classification.

use statrs::distribution::{ContinuousCDF, StudentsT};
use thiserror::Error;

use crate::types::{GoodnessPolarity, MatchedSample, SignificanceResult, Thresholds};

/// Errors from significance evaluation.
#[derive(Debug, Error)]
pub enum SignificanceError {
    /// The matched sample is empty or its sides differ in length. The
    /// caller records the cell's score as the error sentinel.
    #[error("insufficient data: control has {control} value(s), experimental has {experimental}")]
    InsufficientData { control: usize, experimental: usize },
}

/// Paired two-sample t-test with scorecard classification.
///
/// Null hypothesis: the mean of the element-wise differences between the
/// control and experimental values is zero. The two-tailed p-value is
/// classified against the major/minor thresholds into a magnitude of
/// 2, 1, or 0, then signed by the direction of the experimental change
/// and the statistic's goodness polarity.
#[derive(Debug, Clone)]
pub struct PairedTTest {
    thresholds: Thresholds,
}

impl Default for PairedTTest {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
        }
    }
}

impl PairedTTest {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Sample standard deviation with Bessel's correction.
    /// Returns 0.0 for fewer than two values.
    fn std_dev(values: &[f64], mean: f64) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }
        let sum_sq_diff: f64 = values
            .iter()
            .map(|value| {
                let diff = value - mean;
                diff * diff
            })
            .sum();
        (sum_sq_diff / (values.len() - 1) as f64).sqrt()
    }

    /// Classify a p-value into a score magnitude.
    fn magnitude(&self, p_value: f64) -> i32 {
        if p_value <= self.thresholds.major {
            2
        } else if p_value <= self.thresholds.minor {
            1
        } else {
            0
        }
    }

    /// Run the paired test over an aligned sample and classify the result.
    ///
    /// Zero variance of the differences (including a single pair) and a
    /// mean difference of exactly zero are defined outcomes, not errors:
    /// both report p = 1 with score 0.
    ///
    /// # Errors
    /// Returns [`SignificanceError::InsufficientData`] when the sample is
    /// empty or its sides differ in length.
    pub fn evaluate(
        &self,
        sample: &MatchedSample,
        polarity: GoodnessPolarity,
    ) -> Result<SignificanceResult, SignificanceError> {
        let n = sample.control.len();
        if n == 0 || sample.experimental.len() != n {
            return Err(SignificanceError::InsufficientData {
                control: n,
                experimental: sample.experimental.len(),
            });
        }

        let diffs: Vec<f64> = sample
            .control
            .iter()
            .zip(&sample.experimental)
            .map(|(ctl, exp)| ctl - exp)
            .collect();

        let mean = diffs.iter().sum::<f64>() / n as f64;
        let std_dev = Self::std_dev(&diffs, mean);

        // With all differences identical the test is undefined; with a
        // zero mean there is nothing to classify. Both are the defined
        // no-difference outcome.
        if std_dev == 0.0 || mean == 0.0 {
            return Ok(SignificanceResult::neutral());
        }

        let standard_error = std_dev / (n as f64).sqrt();
        let t_statistic = mean / standard_error;
        let degrees_of_freedom = (n - 1) as f64;

        let p_value = match StudentsT::new(0.0, 1.0, degrees_of_freedom) {
            // Two-tailed test: p = 2 * P(T > |t|)
            Ok(t_dist) => 2.0 * (1.0 - t_dist.cdf(t_statistic.abs())),
            Err(_) => 1.0, // Conservative fallback if distribution creation fails
        };

        // `mean` is control - experimental, so a positive mean is an
        // experimental decrease. Whether that decrease is an improvement
        // is the polarity's call.
        let direction = if mean > 0.0 { -1 } else { 1 };
        let score = self.magnitude(p_value) * polarity.sign() * direction;

        Ok(SignificanceResult::new(p_value, score))
    }
}
