use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    ChartInput, LabelCarousel, LabelStripPosition, SampleRange, ScaleResult, ScaleShift,
    SeriesStore, TimeLabelStrip, TransformMemo, TransformUpdate, ViewBox, ViewTransform, Window,
    compute_scale, compute_view_transform, master_view_box, master_width, resolve_sample_range,
};
use crate::error::ChartResult;
use crate::interaction::{DragHandle, InteractionMode, RangeSelector};

use super::ChartEngineConfig;

/// Everything the rendering layer needs after one window change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportUpdate {
    pub window: Window,
    pub sample_range: SampleRange,
    /// Scale currently displayed on the value axis.
    pub scale: ScaleResult,
    /// Carousel transition triggered by this update, if the maximum moved.
    pub scale_shift: Option<ScaleShift>,
    /// Changed transform fields; `None` when the geometry is unchanged.
    pub transform: Option<TransformUpdate>,
    pub label_strip: LabelStripPosition,
    /// New label stride when the label density changed.
    pub label_stride: Option<usize>,
    /// New master view box when a visibility change moved the full-range maximum.
    pub view_box: Option<ViewBox>,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the loaded series for one chart instance and turns
/// selector drags, legend toggles and resizes into plain-data updates.
#[derive(Debug, Clone)]
pub struct ChartEngine {
    pub(super) config: ChartEngineConfig,
    pub(super) store: SeriesStore,
    pub(super) full_scale: ScaleResult,
    pub(super) viewed_scale: ScaleResult,
    pub(super) window: Window,
    pub(super) sample_range: SampleRange,
    pub(super) carousel: LabelCarousel,
    pub(super) transform_memo: TransformMemo,
    pub(super) time_labels: TimeLabelStrip,
    pub(super) selector: RangeSelector,
}

impl ChartEngine {
    pub fn new(input: ChartInput, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let store = SeriesStore::load(input)?;

        let full_range = SampleRange::full(store.axis().len());
        let full_scale = compute_scale(full_range, store.visible_series());
        let carousel = LabelCarousel::new(full_scale.labels.clone());
        let mut time_labels = TimeLabelStrip::new(store.axis(), config.label_width_px);
        time_labels.update_width(config.container_width_px);

        let mut engine = Self {
            selector: RangeSelector::new(config.container_width_px, config.min_selector_width_px),
            config,
            viewed_scale: full_scale.clone(),
            full_scale,
            window: Window::full(),
            sample_range: full_range,
            carousel,
            transform_memo: TransformMemo::default(),
            time_labels,
            store,
        };
        engine.apply_window(Window::full());

        debug!(
            samples = engine.store.axis().len(),
            series_count = engine.store.series().len(),
            max_value = engine.full_scale.max_value,
            "chart engine initialized"
        );
        Ok(engine)
    }

    pub fn from_json_str(input: &str, config: ChartEngineConfig) -> ChartResult<Self> {
        Self::new(ChartInput::from_json_str(input)?, config)
    }

    #[must_use]
    pub fn config(&self) -> ChartEngineConfig {
        self.config
    }

    #[must_use]
    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }

    #[must_use]
    pub fn sample_range(&self) -> SampleRange {
        self.sample_range
    }

    /// Scale over the whole axis for the current visibility set.
    #[must_use]
    pub fn full_scale(&self) -> &ScaleResult {
        &self.full_scale
    }

    /// Scale shown on the value axis for the current window.
    #[must_use]
    pub fn viewed_scale(&self) -> &ScaleResult {
        &self.viewed_scale
    }

    #[must_use]
    pub fn carousel(&self) -> &LabelCarousel {
        &self.carousel
    }

    #[must_use]
    pub fn time_labels(&self) -> &TimeLabelStrip {
        &self.time_labels
    }

    #[must_use]
    pub fn selector(&self) -> &RangeSelector {
        &self.selector
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.selector.mode()
    }

    /// Last transform emitted to the rendering layer.
    #[must_use]
    pub fn view_transform(&self) -> Option<ViewTransform> {
        self.transform_memo.last()
    }

    #[must_use]
    pub fn master_view_box(&self) -> ViewBox {
        master_view_box(self.store.axis(), &self.full_scale)
    }

    /// Shows `window`, moving the range selector to match.
    pub fn set_window(&mut self, window: Window) -> ViewportUpdate {
        self.selector.set_window(window);
        self.apply_window(window)
    }

    /// Shows or hides a series and rescales both views.
    pub fn set_series_visible(&mut self, key: &str, visible: bool) -> ChartResult<ViewportUpdate> {
        let previous_box = self.master_view_box();
        if self.store.set_hidden(key, !visible)? {
            let full_range = SampleRange::full(self.store.axis().len());
            self.full_scale = compute_scale(full_range, self.store.visible_series());
        }
        let mut update = self.apply_window(self.window);
        let view_box = self.master_view_box();
        if view_box != previous_box {
            update.view_box = Some(view_box);
        }
        Ok(update)
    }

    /// Handles a container resize.
    ///
    /// Returns the new label stride when label density changed.
    pub fn resize(&mut self, container_width_px: f64) -> Option<usize> {
        if !container_width_px.is_finite() || container_width_px <= 0.0 {
            return None;
        }
        self.config.container_width_px = container_width_px;
        self.selector.set_track_width(container_width_px);
        self.time_labels
            .update_width(container_width_px / self.window.width_fraction())
    }

    pub fn begin_drag(&mut self, handle: DragHandle, pointer_x: f64) {
        self.selector.begin_drag(handle, pointer_x);
    }

    /// Applies a pointer move to the active drag session.
    pub fn drag_to(&mut self, pointer_x: f64) -> Option<ViewportUpdate> {
        let window = self.selector.drag_to(pointer_x)?;
        Some(self.apply_window(window))
    }

    pub fn end_drag(&mut self) {
        self.selector.end_drag();
    }

    pub(super) fn apply_window(&mut self, window: Window) -> ViewportUpdate {
        let axis = self.store.axis();
        let sample_range = resolve_sample_range(window, axis);
        let scale = compute_scale(sample_range, self.store.visible_series());

        let scale_shift = if scale.max_value > self.viewed_scale.max_value {
            Some(ScaleShift::Up)
        } else if scale.max_value < self.viewed_scale.max_value {
            Some(ScaleShift::Down)
        } else {
            None
        };
        if let Some(shift) = scale_shift {
            self.carousel.shift(shift, scale.labels.clone());
            self.viewed_scale = scale;
        }

        let transform = compute_view_transform(
            &self.full_scale,
            &self.viewed_scale,
            window,
            master_width(axis),
            self.config.preview_height_px,
        );
        let transform = self.transform_memo.apply(transform);
        let label_stride = self
            .time_labels
            .update_width(self.config.container_width_px / window.width_fraction());

        self.window = window;
        self.sample_range = sample_range;
        trace!(
            start_index = sample_range.start_index,
            end_index = sample_range.end_index,
            max_value = self.viewed_scale.max_value,
            shifted = scale_shift.is_some(),
            "window applied"
        );

        ViewportUpdate {
            window,
            sample_range,
            scale: self.viewed_scale.clone(),
            scale_shift,
            transform,
            label_strip: TimeLabelStrip::position(window),
            label_stride,
            view_box: None,
        }
    }
}
