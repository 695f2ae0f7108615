//! Gesture interpretation: raw pointer movement to swipe decisions.
//!
//! ## Usage
//!
//! Owned by one carousel instance; concurrent carousels must not share a
//! tracker.

/// Pointer position in host pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

/// Movement below this many pixels along the scroll axis is treated as noise.
const SWIPE_NOISE_THRESHOLD: f32 = 4.0;

/// Fraction of one slide's extent a swipe must cross to commit.
const SWIPE_COMMIT_DIVISOR: f32 = 5.0;

/// Decision produced when a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SwipeOutcome {
    /// No gesture was in progress.
    Stationary,
    /// Below the commit threshold; ease back to the current slide.
    SnapBack,
    /// Committed toward the next slide.
    Next,
    /// Committed toward the previous slide.
    Previous,
}

/// Per-instance transient gesture record.
#[derive(Debug, Clone, Default)]
pub(crate) struct GestureTracker {
    start: Option<Point>,
    length: f32,
    direction: i8,
    dragging: bool,
    click_disabled: bool,
}

impl GestureTracker {
    /// Starts tracking a drag at `pos`. Re-arms click delivery.
    pub(crate) fn begin(&mut self, pos: Point) {
        self.start = Some(pos);
        self.length = 0.0;
        self.direction = 0;
        self.dragging = true;
        self.click_disabled = false;
    }

    /// Updates the gesture with a new pointer position and returns the live
    /// touch offset (positive = toward next).
    pub(crate) fn update(&mut self, pos: Point, vertical: bool) -> f32 {
        let Some(start) = self.start else {
            return 0.0;
        };
        let delta = if vertical {
            start.y - pos.y
        } else {
            start.x - pos.x
        };
        if delta.abs() < SWIPE_NOISE_THRESHOLD {
            self.direction = 0;
            self.length = delta.abs();
        } else {
            self.direction = if delta > 0.0 { 1 } else { -1 };
            self.length = delta.abs();
            // The pointer actually travelled; the tail click of this gesture
            // must not reach slide content.
            self.click_disabled = true;
        }
        self.touch_offset()
    }

    /// Signed drag magnitude along the scroll axis.
    pub(crate) fn touch_offset(&self) -> f32 {
        self.length * self.direction as f32
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the click following the last gesture should be swallowed.
    pub(crate) fn click_disabled(&self) -> bool {
        self.click_disabled
    }

    /// Ends the gesture and decides whether it commits to a slide change.
    ///
    /// The commit threshold is a fifth of one slide's share of the frame.
    pub(crate) fn release(&mut self, frame_extent: f32, slides_to_show: f32) -> SwipeOutcome {
        if self.start.is_none() {
            return SwipeOutcome::Stationary;
        }
        let threshold = frame_extent / slides_to_show.max(1.0) / SWIPE_COMMIT_DIVISOR;
        let outcome = if self.length > threshold && self.direction > 0 {
            SwipeOutcome::Next
        } else if self.length > threshold && self.direction < 0 {
            SwipeOutcome::Previous
        } else {
            SwipeOutcome::SnapBack
        };
        self.start = None;
        self.length = 0.0;
        self.direction = 0;
        self.dragging = false;
        outcome
    }
}
