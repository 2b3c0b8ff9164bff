use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::scale::SCALE_STEP_COUNT;

/// Position a carousel slot currently plays in the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CarouselRole {
    Down,
    Current,
    Up,
}

impl CarouselRole {
    fn after_shift(self, shift: ScaleShift) -> Self {
        match (shift, self) {
            (ScaleShift::Up, Self::Down) => Self::Up,
            (ScaleShift::Up, Self::Current) => Self::Down,
            (ScaleShift::Up, Self::Up) => Self::Current,
            (ScaleShift::Down, Self::Down) => Self::Current,
            (ScaleShift::Down, Self::Current) => Self::Up,
            (ScaleShift::Down, Self::Up) => Self::Down,
        }
    }
}

/// Direction of an animated value-axis transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleShift {
    /// The scale grew; labels slide in from above.
    Up,
    /// The scale shrank; labels slide in from below.
    Down,
}

/// One of the three label groups of the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselSlot {
    pub role: CarouselRole,
    pub labels: [String; SCALE_STEP_COUNT],
    /// `false` for the slot that jumped across the ring on the last shift;
    /// the renderer moves it without a transition.
    pub animated: bool,
}

/// Three-slot ring of value-axis label sets.
///
/// Slots keep their position; only their roles rotate. Exactly one slot is
/// [`CarouselRole::Current`] at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCarousel {
    slots: [CarouselSlot; 3],
}

impl LabelCarousel {
    #[must_use]
    pub fn new(labels: [String; SCALE_STEP_COUNT]) -> Self {
        let slot = |role| CarouselSlot {
            role,
            labels: labels.clone(),
            animated: true,
        };
        Self {
            slots: [
                slot(CarouselRole::Down),
                slot(CarouselRole::Current),
                slot(CarouselRole::Up),
            ],
        }
    }

    #[must_use]
    pub fn slots(&self) -> &[CarouselSlot; 3] {
        &self.slots
    }

    /// Index of the slot currently tagged [`CarouselRole::Current`].
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.slots
            .iter()
            .position(|slot| slot.role == CarouselRole::Current)
            .unwrap_or(1)
    }

    #[must_use]
    pub fn current_labels(&self) -> &[String; SCALE_STEP_COUNT] {
        &self.slots[self.current_index()].labels
    }

    /// `Up -> Current`, `Current -> Down`, `Down -> Up`.
    pub fn shift_up(&mut self, labels: [String; SCALE_STEP_COUNT]) {
        self.shift(ScaleShift::Up, labels);
    }

    /// `Down -> Current`, `Current -> Up`, `Up -> Down`.
    pub fn shift_down(&mut self, labels: [String; SCALE_STEP_COUNT]) {
        self.shift(ScaleShift::Down, labels);
    }

    pub fn shift(&mut self, direction: ScaleShift, labels: [String; SCALE_STEP_COUNT]) {
        let wrapping_role = match direction {
            ScaleShift::Up => CarouselRole::Down,
            ScaleShift::Down => CarouselRole::Up,
        };

        for slot in &mut self.slots {
            slot.animated = slot.role != wrapping_role;
            slot.role = slot.role.after_shift(direction);
        }

        let current = self.current_index();
        self.slots[current].labels = labels;
        debug!(?direction, current, "label carousel shifted");
    }
}
