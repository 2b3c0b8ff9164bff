use tracing::trace;

use crate::core::{SampleRange, TimeAxis, Window};

/// Viewed time bounds `(start, end)` in milliseconds for a window.
#[must_use]
pub fn viewed_time_bounds(window: Window, axis: &TimeAxis) -> (f64, f64) {
    let start = axis.start() as f64;
    let range = axis.span() as f64;
    (
        start + range * window.left_fraction(),
        start + range * window.right_fraction(),
    )
}

/// Resolves a window into concrete sample indices.
///
/// Both edges are widened by one sample so polylines continue past the
/// viewport instead of ending at the first visible point. A start time beyond
/// every sample clamps to index `0`; an end time beyond every sample clamps to
/// the last index.
#[must_use]
pub fn resolve_sample_range(window: Window, axis: &TimeAxis) -> SampleRange {
    let last = axis.len() - 1;
    let (viewed_start, viewed_end) = viewed_time_bounds(window, axis);

    let start_index = axis
        .first_index_at_or_after(viewed_start)
        .map_or(0, |index| index.saturating_sub(1));
    let end_index = axis
        .first_index_at_or_after(viewed_end)
        .map_or(last, |index| (index + 1).min(last));

    let range = SampleRange::new(start_index, end_index);
    trace!(
        left = window.left_fraction(),
        width = window.width_fraction(),
        start_index = range.start_index,
        end_index = range.end_index,
        "resolved sample range"
    );
    range
}
