use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::viewed_time_bounds;

use super::ChartEngine;

/// Value of one visible series at the hovered sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub key: String,
    pub name: String,
    pub color: Option<String>,
    pub value: f64,
}

/// Point tooltip for the sample nearest to the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub index: usize,
    pub timestamp: i64,
    pub date_label: String,
    /// Horizontal position of the sample inside the main view, `0..=1`.
    pub x_fraction: f64,
    pub entries: Vec<TooltipEntry>,
}

impl ChartEngine {
    /// Resolves the tooltip for a pointer at `pointer_fraction` of the main
    /// view's width.
    ///
    /// Returns `None` for non-finite input or when every series is hidden.
    #[must_use]
    pub fn tooltip_at(&self, pointer_fraction: f64) -> Option<Tooltip> {
        if !pointer_fraction.is_finite() {
            return None;
        }
        let visible = self.store.visible_series();
        if visible.is_empty() {
            return None;
        }

        let axis = self.store.axis();
        let (viewed_start, viewed_end) = viewed_time_bounds(self.window, axis);
        let viewed_span = viewed_end - viewed_start;
        let pointer_time = viewed_start + viewed_span * pointer_fraction.clamp(0.0, 1.0);

        let after = axis
            .first_index_at_or_after(pointer_time)
            .unwrap_or(axis.len() - 1);
        let index = [after.saturating_sub(1), after]
            .into_iter()
            .min_by_key(|&candidate| {
                let time = axis.get(candidate).unwrap_or(i64::MAX) as f64;
                OrderedFloat((time - pointer_time).abs())
            })?;
        let timestamp = axis.get(index)?;

        let entries = visible
            .into_iter()
            .filter_map(|series| {
                Some(TooltipEntry {
                    key: series.key.clone(),
                    name: series.name.clone(),
                    color: series.color.clone(),
                    value: *series.values.get(index)?,
                })
            })
            .collect();

        Some(Tooltip {
            index,
            timestamp,
            date_label: self
                .time_labels
                .labels()
                .get(index)
                .cloned()
                .unwrap_or_default(),
            x_fraction: (timestamp as f64 - viewed_start) / viewed_span,
            entries,
        })
    }
}
