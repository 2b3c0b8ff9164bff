use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{SampleRange, Series};

/// Number of reference lines on the value axis.
pub const SCALE_STEP_COUNT: usize = 6;

/// Value-axis scale for one sample range and visibility set.
///
/// `steps[i] == step * i` and `steps[5] + step >= max_value`, so the topmost
/// reference line always leaves headroom above the tallest visible point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleResult {
    pub max_value: f64,
    pub step: f64,
    pub steps: [f64; SCALE_STEP_COUNT],
    pub labels: [String; SCALE_STEP_COUNT],
}

impl ScaleResult {
    /// Result used when no series is visible: nothing to draw, empty labels.
    #[must_use]
    pub fn degenerate() -> Self {
        Self {
            max_value: 0.0,
            step: 0.0,
            steps: [0.0; SCALE_STEP_COUNT],
            labels: Default::default(),
        }
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max_value == 0.0 && self.step == 0.0
    }

    /// Value at the top edge of the scale (`steps[5] + step`).
    #[must_use]
    pub fn top(&self) -> f64 {
        self.steps[SCALE_STEP_COUNT - 1] + self.step
    }
}

/// Computes the scale for the visible series over an inclusive sample range.
pub fn compute_scale<'a, I>(range: SampleRange, series: I) -> ScaleResult
where
    I: IntoIterator<Item = &'a Series>,
{
    let Some(max_value) = max_in_range(range, series) else {
        return ScaleResult::degenerate();
    };

    let magnitude = digit_count(max_value.ceil()) - 2;
    let unit = 10f64.powi(magnitude);
    let mut step = round_up_to_magnitude(max_value / SCALE_STEP_COUNT as f64, magnitude);
    // Float error on the division can leave the top line a hair under the max.
    while step * (SCALE_STEP_COUNT - 1) as f64 + step < max_value {
        step += unit;
    }

    let steps: [f64; SCALE_STEP_COUNT] = std::array::from_fn(|i| step * i as f64);
    let labels = steps.map(|value| format_scale_label(value, magnitude + 1));

    ScaleResult {
        max_value,
        step,
        steps,
        labels,
    }
}

/// Formats one scale value with a compact magnitude suffix.
///
/// `magnitude` is the decimal magnitude of the scale (`k + 1`). The quotient is
/// printed as-is, so both `1M` and `1.2M` occur depending on the step.
#[must_use]
pub fn format_scale_label(value: f64, magnitude: i32) -> String {
    // Avoid rendering `-0`.
    let value = if value == 0.0 { 0.0 } else { value };
    if magnitude >= 9 {
        format!("{}B", value / 1e9)
    } else if magnitude >= 6 {
        format!("{}M", value / 1e6)
    } else if magnitude >= 3 {
        format!("{}K", value / 1e3)
    } else {
        format!("{value}")
    }
}

/// Rounds `value` up to the nearest multiple of `10^magnitude`.
#[must_use]
pub fn round_up_to_magnitude(value: f64, magnitude: i32) -> f64 {
    if magnitude >= 0 {
        let unit = 10f64.powi(magnitude);
        (value / unit).ceil() * unit
    } else {
        let multiplier = 10f64.powi(-magnitude);
        (value * multiplier).ceil() / multiplier
    }
}

/// Count of integer digits of `value`, never less than one.
#[must_use]
pub fn digit_count(value: f64) -> i32 {
    let integer = value.abs().trunc();
    let mut digits = 1;
    let mut bound = 10.0;
    while integer >= bound && bound.is_finite() {
        digits += 1;
        bound *= 10.0;
    }
    digits
}

fn max_in_range<'a, I>(range: SampleRange, series: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Series>,
{
    series
        .into_iter()
        .filter_map(|series| {
            let end = range.end_index.min(series.values.len().checked_sub(1)?);
            let window = series.values.get(range.start_index..=end)?;
            slice_max(window)
        })
        .max_by_key(|value| OrderedFloat(*value))
}

#[cfg(not(feature = "parallel-scan"))]
fn slice_max(values: &[f64]) -> Option<f64> {
    values.iter().copied().max_by_key(|value| OrderedFloat(*value))
}

#[cfg(feature = "parallel-scan")]
fn slice_max(values: &[f64]) -> Option<f64> {
    use rayon::prelude::*;

    const PARALLEL_THRESHOLD: usize = 16_384;
    if values.len() < PARALLEL_THRESHOLD {
        return values.iter().copied().max_by_key(|value| OrderedFloat(*value));
    }
    values
        .par_iter()
        .copied()
        .max_by_key(|value| OrderedFloat(*value))
}
