use serde::{Deserialize, Serialize};

use crate::core::time_labels::DEFAULT_LABEL_WIDTH_PX;
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// Layout constants of the chart surface. The type is serializable so host
/// applications can persist and reload chart setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    /// Height of the zoomed main view, which shows the selected window.
    #[serde(default = "default_preview_height_px")]
    pub preview_height_px: f64,
    #[serde(default = "default_gap_px")]
    pub gap_px: f64,
    /// Height of the overview strip under the range selector.
    #[serde(default = "default_chart_height_px")]
    pub chart_height_px: f64,
    #[serde(default = "default_preview_stroke_width")]
    pub preview_stroke_width: f64,
    #[serde(default = "default_chart_stroke_width")]
    pub chart_stroke_width: f64,
    #[serde(default = "default_label_width_px")]
    pub label_width_px: f64,
    #[serde(default = "default_min_selector_width_px")]
    pub min_selector_width_px: f64,
    #[serde(default = "default_container_width_px")]
    pub container_width_px: f64,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            preview_height_px: default_preview_height_px(),
            gap_px: default_gap_px(),
            chart_height_px: default_chart_height_px(),
            preview_stroke_width: default_preview_stroke_width(),
            chart_stroke_width: default_chart_stroke_width(),
            label_width_px: default_label_width_px(),
            min_selector_width_px: default_min_selector_width_px(),
            container_width_px: default_container_width_px(),
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn with_container_width(mut self, container_width_px: f64) -> Self {
        self.container_width_px = container_width_px;
        self
    }

    #[must_use]
    pub fn with_heights(mut self, preview_height_px: f64, chart_height_px: f64) -> Self {
        self.preview_height_px = preview_height_px;
        self.chart_height_px = chart_height_px;
        self
    }

    #[must_use]
    pub fn with_gap(mut self, gap_px: f64) -> Self {
        self.gap_px = gap_px;
        self
    }

    #[must_use]
    pub fn with_label_width(mut self, label_width_px: f64) -> Self {
        self.label_width_px = label_width_px;
        self
    }

    #[must_use]
    pub fn with_min_selector_width(mut self, min_selector_width_px: f64) -> Self {
        self.min_selector_width_px = min_selector_width_px;
        self
    }

    /// Top edge of the overview strip.
    #[must_use]
    pub fn chart_top_px(self) -> f64 {
        self.preview_height_px + self.gap_px
    }

    /// Total height of the drawing surface.
    #[must_use]
    pub fn surface_height_px(self) -> f64 {
        self.preview_height_px + self.gap_px + self.chart_height_px
    }

    pub fn validate(self) -> ChartResult<Self> {
        let positive = [
            ("preview_height_px", self.preview_height_px),
            ("chart_height_px", self.chart_height_px),
            ("label_width_px", self.label_width_px),
            ("container_width_px", self.container_width_px),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{field} must be finite and > 0"
                )));
            }
        }

        let non_negative = [
            ("gap_px", self.gap_px),
            ("preview_stroke_width", self.preview_stroke_width),
            ("chart_stroke_width", self.chart_stroke_width),
            ("min_selector_width_px", self.min_selector_width_px),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{field} must be finite and >= 0"
                )));
            }
        }

        Ok(self)
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Serialization(format!("failed to parse config: {e}")))
    }
}

fn default_preview_height_px() -> f64 {
    300.0
}

fn default_gap_px() -> f64 {
    50.0
}

fn default_chart_height_px() -> f64 {
    50.0
}

fn default_preview_stroke_width() -> f64 {
    2.0
}

fn default_chart_stroke_width() -> f64 {
    1.0
}

fn default_label_width_px() -> f64 {
    DEFAULT_LABEL_WIDTH_PX
}

fn default_min_selector_width_px() -> f64 {
    80.0
}

fn default_container_width_px() -> f64 {
    800.0
}
