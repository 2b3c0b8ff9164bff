use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{LabelCarousel, SampleRange, ScaleResult, ViewBox, ViewTransform, Window};
use crate::error::{ChartError, ChartResult};

use super::{ChartEngine, ChartEngineConfig};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: ChartEngineConfig,
    pub window: Window,
    pub sample_range: SampleRange,
    pub full_scale: ScaleResult,
    pub viewed_scale: ScaleResult,
    pub carousel: LabelCarousel,
    pub view_transform: Option<ViewTransform>,
    pub master_view_box: ViewBox,
    /// Visibility per series key, in declaration order.
    pub series_visibility: IndexMap<String, bool>,
    pub label_stride: usize,
}

impl ChartEngine {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config,
            window: self.window,
            sample_range: self.sample_range,
            full_scale: self.full_scale.clone(),
            viewed_scale: self.viewed_scale.clone(),
            carousel: self.carousel.clone(),
            view_transform: self.transform_memo.last(),
            master_view_box: self.master_view_box(),
            series_visibility: self
                .store
                .series()
                .iter()
                .map(|series| (series.key.clone(), !self.store.is_hidden(&series.key)))
                .collect(),
            label_stride: self.time_labels.stride(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::Serialization(format!("failed to serialize snapshot: {e}")))
    }
}
