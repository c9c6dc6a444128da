//! Reductions over lateness series.
//!
//! Every reduction returns an explicit absence on empty input. No NaN
//! or infinity sentinel ever escapes this module.

use crate::models::path::Stop;

/// Summary statistics over one lateness series, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatenessSummary {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub count: usize,
}

/// Which end of the lateness range to look for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extreme {
    Min,
    Max,
}

/// A line-wide extreme lateness, attributed to the stop it occurred at.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineExtreme {
    pub stop: Stop,
    pub value: f64,
}

/// Reduce a lateness series to extrema, mean, and count.
///
/// Returns `None` for an empty series.
pub fn summarize(latenesses: &[f64]) -> Option<LatenessSummary> {
    let (&first, rest) = latenesses.split_first()?;

    let mut min = first;
    let mut max = first;
    let mut sum = first;
    for &value in rest {
        min = min.min(value);
        max = max.max(value);
        sum += value;
    }

    Some(LatenessSummary {
        min,
        max,
        avg: sum / latenesses.len() as f64,
        count: latenesses.len(),
    })
}
