use serde::{Deserialize, Serialize};

/// Smallest width fraction a window may shrink to.
pub const MIN_WIDTH_FRACTION: f64 = 1e-6;

/// Visible slice of the time axis, expressed as fractions of the full span.
///
/// Construction clamps instead of failing: drag arithmetic can overshoot the
/// track for a tick before the selector applies its own bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "WindowFractions")]
pub struct Window {
    left_fraction: f64,
    width_fraction: f64,
}

/// Unchecked wire form of [`Window`]; decoding re-applies the clamp.
#[derive(Deserialize)]
struct WindowFractions {
    left_fraction: f64,
    width_fraction: f64,
}

impl From<WindowFractions> for Window {
    fn from(raw: WindowFractions) -> Self {
        Self::new(raw.left_fraction, raw.width_fraction)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::full()
    }
}

impl Window {
    /// Builds a window, clamping both fractions so that
    /// `0 <= left`, `0 < width <= 1` and `left + width <= 1`.
    #[must_use]
    pub fn new(left_fraction: f64, width_fraction: f64) -> Self {
        let width_fraction = if width_fraction.is_finite() {
            width_fraction.clamp(MIN_WIDTH_FRACTION, 1.0)
        } else {
            1.0
        };
        let left_fraction = if left_fraction.is_finite() {
            left_fraction.clamp(0.0, 1.0 - width_fraction)
        } else {
            0.0
        };

        Self {
            left_fraction,
            width_fraction,
        }
    }

    #[must_use]
    pub fn full() -> Self {
        Self {
            left_fraction: 0.0,
            width_fraction: 1.0,
        }
    }

    #[must_use]
    pub fn left_fraction(self) -> f64 {
        self.left_fraction
    }

    #[must_use]
    pub fn width_fraction(self) -> f64 {
        self.width_fraction
    }

    #[must_use]
    pub fn right_fraction(self) -> f64 {
        self.left_fraction + self.width_fraction
    }
}

/// Inclusive index bounds into the axis and series arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl SampleRange {
    #[must_use]
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index: start_index.min(end_index),
            end_index: start_index.max(end_index),
        }
    }

    /// Range spanning every sample of an axis with `len` samples.
    #[must_use]
    pub fn full(len: usize) -> Self {
        Self::new(0, len.saturating_sub(1))
    }

    #[must_use]
    pub fn sample_count(self) -> usize {
        self.end_index - self.start_index + 1
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        (self.start_index..=self.end_index).contains(&index)
    }
}
