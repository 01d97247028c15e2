//! Temporal alignment of a control series against an experimental series.

use thiserror::Error;

use crate::types::{is_error_value, MatchedSample, TimedValue};

/// Errors from series matching.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A cursor read fell outside its sequence. This indicates a bug in
    /// the merge loop, not bad input; it is surfaced instead of panicking.
    #[error("matcher cursor out of bounds: {side} index {index} of {len}")]
    Internal {
        side: &'static str,
        index: usize,
        len: usize,
    },
}

/// Align two time-ordered series on their shared timestamps.
///
/// Two-cursor merge: equal timestamps emit the pair and advance both
/// cursors; unequal timestamps advance whichever cursor points at the
/// earlier time. A pair is dropped (cursors still advance) when either
/// value rounds to the error sentinel. The walk stops when either side
/// is exhausted, so an empty input or disjoint timestamps produce an
/// empty sample, not an error.
///
/// Both inputs must be sorted ascending by timestamp; that is the
/// caller's responsibility and is not verified. Duplicate timestamps
/// within one side are undefined input shape: only a single cursor is
/// tracked per side, so duplicates collapse to one comparison per
/// occurrence in sequence order.
pub fn match_series(
    control: &[TimedValue],
    experimental: &[TimedValue],
) -> Result<MatchedSample, MatchError> {
    let mut matched = MatchedSample::default();
    let mut ctl_idx = 0;
    let mut exp_idx = 0;

    while ctl_idx < control.len() && exp_idx < experimental.len() {
        let ctl = control
            .get(ctl_idx)
            .copied()
            .ok_or(MatchError::Internal {
                side: "control",
                index: ctl_idx,
                len: control.len(),
            })?;
        let exp = experimental
            .get(exp_idx)
            .copied()
            .ok_or(MatchError::Internal {
                side: "experimental",
                index: exp_idx,
                len: experimental.len(),
            })?;

        if ctl.timestamp == exp.timestamp {
            if !is_error_value(ctl.value) && !is_error_value(exp.value) {
                matched.control.push(ctl.value);
                matched.experimental.push(exp.value);
            }
            ctl_idx += 1;
            exp_idx += 1;
        } else if ctl.timestamp < exp.timestamp {
            ctl_idx += 1;
        } else {
            exp_idx += 1;
        }
    }

    Ok(matched)
}
