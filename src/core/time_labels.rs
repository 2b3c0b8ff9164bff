use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{TimeAxis, Window};

/// Default horizontal room reserved for one date label, in pixels.
pub const DEFAULT_LABEL_WIDTH_PX: f64 = 100.0;

/// CSS-style placement of the scrolling label strip for one window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStripPosition {
    /// Strip width relative to its container, in percent.
    pub width_percent: f64,
    /// Horizontal translation relative to the strip width, in percent.
    pub translate_x_percent: f64,
}

/// Formats a millisecond timestamp as a short UTC date (`Jan 05`).
#[must_use]
pub fn format_date_label(timestamp_millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_millis)
        .map(|time| time.format("%b %d").to_string())
        .unwrap_or_default()
}

/// X-axis date labels scrolled in sync with the window.
///
/// Every sample has a label; only every `stride`-th one is shown so labels
/// never overlap at the current strip width.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeLabelStrip {
    labels: Vec<String>,
    label_width_px: f64,
    visible_count: usize,
    stride: usize,
}

impl TimeLabelStrip {
    #[must_use]
    pub fn new(axis: &TimeAxis, label_width_px: f64) -> Self {
        Self {
            labels: axis
                .timestamps()
                .iter()
                .map(|&timestamp| format_date_label(timestamp))
                .collect(),
            label_width_px,
            visible_count: 0,
            stride: 1,
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[must_use]
    pub fn is_label_visible(&self, index: usize) -> bool {
        index < self.labels.len() && index % self.stride == 0
    }

    /// Indices of the labels shown at the current density.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.labels.len()).step_by(self.stride)
    }

    /// Recomputes label density for a strip `strip_width_px` wide.
    ///
    /// Returns the new stride only when the number of labels that fit changed.
    pub fn update_width(&mut self, strip_width_px: f64) -> Option<usize> {
        let fits = if strip_width_px.is_finite() && strip_width_px > 0.0 {
            (strip_width_px / self.label_width_px).floor() as usize
        } else {
            0
        };
        if fits == self.visible_count {
            return None;
        }

        self.visible_count = fits;
        self.stride = if fits == 0 {
            self.labels.len().max(1)
        } else {
            (self.labels.len() / fits).max(1)
        };
        trace!(fits, stride = self.stride, "time label density changed");
        Some(self.stride)
    }

    /// Strip placement so the labels under the window fill the container.
    #[must_use]
    pub fn position(window: Window) -> LabelStripPosition {
        LabelStripPosition {
            width_percent: 100.0 / window.width_fraction(),
            translate_x_percent: -(window.left_fraction() * 100.0),
        }
    }
}
