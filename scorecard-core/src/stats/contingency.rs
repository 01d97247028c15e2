//! Contingency-table statistic formulas.

use super::{finite_or_error, ContingencyStatistic};
use crate::types::ContingencyRecord;

/// Compute one contingency statistic, scaled by 100.
///
/// Zero denominators produce NaN or an infinity under IEEE 754 division;
/// `finite_or_error` maps those to the sentinel.
pub(super) fn compute(record: &ContingencyRecord, kind: ContingencyStatistic) -> f64 {
    let ContingencyRecord {
        hit,
        false_alarm: fa,
        miss,
        correct_negative: cn,
        ..
    } = *record;

    let value = match kind {
        ContingencyStatistic::Tss => {
            ((hit * cn - fa * miss) / ((hit + miss) * (fa + cn))) * 100.0
        }
        ContingencyStatistic::PodYes(_) => (hit / (hit + miss)) * 100.0,
        ContingencyStatistic::PodNo(_) => (cn / (cn + fa)) * 100.0,
        ContingencyStatistic::Far => (fa / (fa + hit)) * 100.0,
        ContingencyStatistic::Csi => (hit / (hit + miss + fa)) * 100.0,
        ContingencyStatistic::Hss => {
            (2.0 * (cn * hit - miss * fa)
                / ((cn + fa) * (fa + hit) + (cn + miss) * (miss + hit)))
                * 100.0
        }
        ContingencyStatistic::Ets => {
            let total = hit + fa + miss + cn;
            // Hits expected by chance for a forecast with no skill.
            let chance_hits = (hit + fa) * (hit + miss) / total;
            ((hit - chance_hits) / (hit + fa + miss - chance_hits)) * 100.0
        }
    };

    finite_or_error(value)
}

#[cfg(test)]
mod tests {
    use super::super::ThresholdDirection;
    use super::*;
    use crate::types::{is_error_value, ERROR_VALUE};

    fn record(hit: f64, fa: f64, miss: f64, cn: f64) -> ContingencyRecord {
        ContingencyRecord {
            hit,
            false_alarm: fa,
            miss,
            correct_negative: cn,
            timestamp: 0,
        }
    }

    #[test]
    fn test_tss_perfect_forecast() {
        // No misses, no false alarms: TSS = 100.
        let value = compute(&record(50.0, 0.0, 0.0, 50.0), ContingencyStatistic::Tss);
        assert!((value - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_tss_known_value() {
        // (30*50 - 10*10) / ((30+10)*(10+50)) = 1400/2400
        let value = compute(&record(30.0, 10.0, 10.0, 50.0), ContingencyStatistic::Tss);
        assert!((value - 1400.0 / 2400.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_pod_yes() {
        let value = compute(
            &record(30.0, 10.0, 10.0, 50.0),
            ContingencyStatistic::PodYes(ThresholdDirection::Below),
        );
        assert!((value - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_pod_no() {
        let value = compute(
            &record(30.0, 10.0, 10.0, 50.0),
            ContingencyStatistic::PodNo(ThresholdDirection::Above),
        );
        // 50 / (50 + 10)
        assert!((value - 50.0 / 60.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_far() {
        let value = compute(&record(30.0, 10.0, 10.0, 50.0), ContingencyStatistic::Far);
        assert!((value - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_csi() {
        let value = compute(&record(30.0, 10.0, 10.0, 50.0), ContingencyStatistic::Csi);
        assert!((value - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_hss_known_value() {
        // 2*(50*30 - 10*10) / ((50+10)(10+30) + (50+10)(10+30)) = 2800/4800
        let value = compute(&record(30.0, 10.0, 10.0, 50.0), ContingencyStatistic::Hss);
        assert!((value - 2800.0 / 4800.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_ets_known_value() {
        let rec = record(30.0, 10.0, 10.0, 50.0);
        let chance = (30.0 + 10.0) * (30.0 + 10.0) / 100.0;
        let expected = (30.0 - chance) / (30.0 + 10.0 + 10.0 - chance) * 100.0;
        let value = compute(&rec, ContingencyStatistic::Ets);
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_counts_yield_sentinel() {
        let rec = record(0.0, 0.0, 0.0, 0.0);
        for kind in [
            ContingencyStatistic::Tss,
            ContingencyStatistic::PodYes(ThresholdDirection::Below),
            ContingencyStatistic::PodNo(ThresholdDirection::Above),
            ContingencyStatistic::Far,
            ContingencyStatistic::Csi,
            ContingencyStatistic::Hss,
            ContingencyStatistic::Ets,
        ] {
            let value = compute(&rec, kind);
            assert_eq!(value, ERROR_VALUE, "kind {:?} should map 0/0 to sentinel", kind);
            assert!(is_error_value(value));
        }
    }

    #[test]
    fn test_zero_denominator_yields_sentinel_not_nan() {
        // hit + miss == 0 makes PODy undefined even with other counts set.
        let value = compute(
            &record(0.0, 5.0, 0.0, 20.0),
            ContingencyStatistic::PodYes(ThresholdDirection::Above),
        );
        assert!(!value.is_nan());
        assert!(is_error_value(value));
    }
}
