use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Window;

/// Part of the range selector grabbed by the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragHandle {
    /// Left edge; resizes the window from the left.
    Left,
    /// Right edge; resizes the window from the right.
    Right,
    /// The area between the edges; moves the window without resizing it.
    Area,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

/// Active pointer capture started on one of the selector handles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub handle: DragHandle,
    pub start_x: f64,
}

/// Pixel state of the range selector drawn over the preview strip.
///
/// `left_px` and `right_px` are the widths of the overflow areas on either
/// side of the selected region. Moves are applied as deltas against the
/// bounds committed by the previous session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSelector {
    track_width_px: f64,
    min_area_width_px: f64,
    left_px: f64,
    right_px: f64,
    committed_left_px: f64,
    committed_right_px: f64,
    session: Option<DragSession>,
}

impl RangeSelector {
    #[must_use]
    pub fn new(track_width_px: f64, min_area_width_px: f64) -> Self {
        Self {
            track_width_px,
            min_area_width_px,
            left_px: 0.0,
            right_px: 0.0,
            committed_left_px: 0.0,
            committed_right_px: 0.0,
            session: None,
        }
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.session.is_some() {
            InteractionMode::Dragging
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    #[must_use]
    pub fn track_width_px(&self) -> f64 {
        self.track_width_px
    }

    /// Overflow widths `(left, right)` in pixels.
    #[must_use]
    pub fn bounds_px(&self) -> (f64, f64) {
        (self.left_px, self.right_px)
    }

    #[must_use]
    pub fn window(&self) -> Window {
        if self.track_width_px <= 0.0 {
            return Window::full();
        }
        let area = self.track_width_px - self.left_px - self.right_px;
        Window::new(
            self.left_px / self.track_width_px,
            area / self.track_width_px,
        )
    }

    /// Moves the selector to reflect a window chosen outside of a drag.
    pub fn set_window(&mut self, window: Window) {
        self.left_px = window.left_fraction() * self.track_width_px;
        self.right_px = (1.0 - window.right_fraction()) * self.track_width_px;
        self.committed_left_px = self.left_px;
        self.committed_right_px = self.right_px;
    }

    /// Applies a new track width while keeping the selected window.
    pub fn set_track_width(&mut self, track_width_px: f64) {
        if !track_width_px.is_finite() || track_width_px <= 0.0 {
            return;
        }
        let window = self.window();
        let (committed_left, committed_right) = if self.track_width_px > 0.0 {
            (
                self.committed_left_px / self.track_width_px,
                self.committed_right_px / self.track_width_px,
            )
        } else {
            (0.0, 0.0)
        };

        self.track_width_px = track_width_px;
        self.left_px = window.left_fraction() * track_width_px;
        self.right_px = (1.0 - window.right_fraction()) * track_width_px;
        self.committed_left_px = committed_left * track_width_px;
        self.committed_right_px = committed_right * track_width_px;
    }

    pub fn begin_drag(&mut self, handle: DragHandle, pointer_x: f64) {
        self.session = Some(DragSession {
            handle,
            start_x: pointer_x,
        });
    }

    /// Applies a pointer move to the active session.
    ///
    /// Returns the resulting window, or `None` when no session is active.
    pub fn drag_to(&mut self, pointer_x: f64) -> Option<Window> {
        let session = self.session?;
        let offset = pointer_x - session.start_x;
        let width = self.track_width_px;

        match session.handle {
            DragHandle::Left => {
                let max = width - self.min_area_width_px - self.right_px;
                self.left_px = clamp_px(self.committed_left_px + offset, max);
            }
            DragHandle::Right => {
                let max = width - self.min_area_width_px - self.left_px;
                self.right_px = clamp_px(self.committed_right_px - offset, max);
            }
            DragHandle::Area => {
                let area = width - self.committed_left_px - self.committed_right_px;
                self.left_px = clamp_px(self.committed_left_px + offset, width - area);
                self.right_px = (width - area - self.left_px).max(0.0);
            }
        }

        trace!(
            handle = ?session.handle,
            left_px = self.left_px,
            right_px = self.right_px,
            "range selector moved"
        );
        Some(self.window())
    }

    /// Ends the session and commits the bounds as the next baseline.
    pub fn end_drag(&mut self) {
        if self.session.take().is_some() {
            self.committed_left_px = self.left_px;
            self.committed_right_px = self.right_px;
        }
    }
}

fn clamp_px(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}
