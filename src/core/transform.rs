use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::series_store::DAY_MILLIS;
use crate::core::{ScaleResult, TimeAxis, Window};

/// Vertical part of a view transform: `translate(0, translate_y) scale(1, scale_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalTransform {
    pub translate_y: f64,
    pub scale_y: f64,
}

impl VerticalTransform {
    #[must_use]
    pub fn identity() -> Self {
        Self {
            translate_y: 0.0,
            scale_y: 1.0,
        }
    }
}

/// Geometry applied to the master polyline symbol to show one window.
///
/// `x` and `width` are expressed in the master's horizontal units; the
/// vertical transform is relative to a surface of `surface_height` units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub x: f64,
    pub width: f64,
    pub transform: VerticalTransform,
}

/// Fields of a [`ViewTransform`] that changed since the last emission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformUpdate {
    pub x: Option<f64>,
    pub width: Option<f64>,
    pub transform: Option<VerticalTransform>,
}

/// View box `(min_x, min_y, width, height)` of the master symbol.
///
/// Time runs in days from the axis start; values are negated so larger values
/// sit higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

#[must_use]
pub fn master_view_box(axis: &TimeAxis, full_scale: &ScaleResult) -> ViewBox {
    ViewBox {
        min_x: axis.start() as f64 / DAY_MILLIS,
        min_y: -full_scale.max_value,
        width: master_width(axis),
        height: full_scale.max_value,
    }
}

/// Horizontal extent of the master symbol, in days.
#[must_use]
pub fn master_width(axis: &TimeAxis) -> f64 {
    axis.span() as f64 / DAY_MILLIS
}

/// Derives the transform that presents `window` of the master symbol.
///
/// The horizontal part stretches the master so the window fills the surface.
/// The vertical part rescales from the full-range maximum to the windowed
/// scale's top so flat or tall sub-ranges fill the available height.
#[must_use]
pub fn compute_view_transform(
    full_scale: &ScaleResult,
    viewed_scale: &ScaleResult,
    window: Window,
    master_width: f64,
    surface_height: f64,
) -> ViewTransform {
    let width = master_width / window.width_fraction();
    let x = -(window.left_fraction() * width);

    ViewTransform {
        x,
        width,
        transform: vertical_transform(full_scale, viewed_scale, surface_height),
    }
}

fn vertical_transform(
    full_scale: &ScaleResult,
    viewed_scale: &ScaleResult,
    surface_height: f64,
) -> VerticalTransform {
    let full_max = full_scale.max_value;
    let viewed_top = viewed_scale.top();
    if full_max == 0.0 || viewed_top == 0.0 || !full_max.is_finite() || !viewed_top.is_finite() {
        return VerticalTransform::identity();
    }

    let height_ratio = viewed_top / full_max;
    let top_ratio = (viewed_top - full_max) / full_max;
    let scaled_height = surface_height / height_ratio;

    VerticalTransform {
        translate_y: top_ratio * scaled_height,
        scale_y: full_max / viewed_top,
    }
}

/// Remembers the last emitted transform and reports only changed fields.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformMemo {
    last: Option<ViewTransform>,
}

impl TransformMemo {
    #[must_use]
    pub fn last(&self) -> Option<ViewTransform> {
        self.last
    }

    /// Records `next` and returns the delta, or `None` when nothing changed.
    pub fn apply(&mut self, next: ViewTransform) -> Option<TransformUpdate> {
        let update = match self.last {
            None => TransformUpdate {
                x: Some(next.x),
                width: Some(next.width),
                transform: Some(next.transform),
            },
            Some(previous) => TransformUpdate {
                x: (previous.x != next.x).then_some(next.x),
                width: (previous.width != next.width).then_some(next.width),
                transform: (previous.transform != next.transform).then_some(next.transform),
            },
        };
        self.last = Some(next);

        if update.x.is_none() && update.width.is_none() && update.transform.is_none() {
            trace!("view transform unchanged");
            return None;
        }
        Some(update)
    }

    /// Forgets the last emission so the next `apply` reports every field.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
