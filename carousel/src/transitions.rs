//! Transition renderers.
//!
//! Each renderer turns the carousel's animated offset and index state into a
//! [`ContainerStyle`] plus one [`SlideStyle`] per child. The scroll renderer
//! translates the strip and lays slides out in a row; fade and 3D scroll keep
//! the strip fixed and position each slide individually.

pub(crate) mod fade;
pub(crate) mod scroll;
pub(crate) mod scroll3d;

use crate::args::{CarouselArgs, SlideAnimation, TransitionMode};
use crate::layout::SlideGeometry;
use crate::style::{ContainerStyle, SlideStyle};

/// Everything a renderer needs for one frame.
pub(crate) struct TransitionInput<'a> {
    pub args: &'a CarouselArgs,
    pub geometry: &'a SlideGeometry,
    pub slide_count: usize,
    pub current_slide: usize,
    /// Animated strip translation for this frame.
    pub tx: f32,
    pub ty: f32,
    /// Settled strip position, untouched by the running animation.
    pub left: f32,
    pub top: f32,
    pub dragging: bool,
    /// A wrap-around snap is in flight.
    pub is_wrapping: bool,
}

impl TransitionInput<'_> {
    /// Settled position along the scroll axis.
    fn position_value(&self) -> f32 {
        if self.args.vertical { self.top } else { self.left }
    }

    /// Animated translation along the scroll axis.
    fn delta(&self) -> f32 {
        if self.args.vertical { self.ty } else { self.tx }
    }

    /// Slide is inside the window the frame currently reveals.
    fn in_window(&self, index: usize) -> bool {
        index >= self.current_slide
            && (index as f32) < self.current_slide as f32 + self.args.slides_to_show
    }

    /// Pixel nudge toward the current slide applied to its neighbors while
    /// the zoom animation runs. Wrap-around treats first and last slides as
    /// neighbors of each other.
    fn zoom_nudge(&self, index: usize) -> f32 {
        if self.args.animation != SlideAnimation::Zoom || self.slide_count == 0 {
            return 0.0;
        }
        let current = self.current_slide;
        let last = self.slide_count - 1;
        if current == index + 1 || (current == 0 && index == last) {
            self.args.slide_offset
        } else if current + 1 == index || (current == last && index == 0) {
            -self.args.slide_offset
        } else {
            0.0
        }
    }
}

/// Renders one frame with the configured transition mode.
///
/// `fade_from` is the fade renderer's cross-render anchor; the other
/// renderers leave it untouched.
pub(crate) fn render(
    input: &TransitionInput<'_>,
    fade_from: &mut f32,
) -> (ContainerStyle, Vec<SlideStyle>) {
    match input.args.transition_mode {
        TransitionMode::Scroll => scroll::render(input),
        TransitionMode::Fade => fade::render(input, fade_from),
        TransitionMode::Scroll3d => scroll3d::render(input),
    }
}
