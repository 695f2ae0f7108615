//! Carousel configuration.
//!
//! ## Usage
//!
//! Build a [`CarouselArgs`] with the setter chain and hand it to
//! [`crate::Carousel::new`]. Every option has a sensible default.

use std::str::FromStr;
use std::time::Duration;

use derive_setters::Setters;

use crate::animation::Easing;
use crate::callback::{Callback, CallbackWith};
use crate::events::{self, SlideChange, SlideStatus};

/// Anchor point used to position the current slide within the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellAlign {
    /// Current slide sits at the leading edge of the frame.
    #[default]
    Left,
    /// Current slide is centered in the frame.
    Center,
    /// Current slide sits at the trailing edge of the frame.
    Right,
}

/// Visual algorithm used to animate between slide positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionMode {
    /// Linear strip translation.
    #[default]
    Scroll,
    /// Cross-dissolve between pages.
    Fade,
    /// Perspective scroll with distance-based scale and opacity falloff.
    Scroll3d,
}

/// How the slide height is derived from measured children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeightMode {
    /// Tallest of the measured slide set.
    #[default]
    Max,
    /// Height of the slide at the current index.
    Current,
    /// Height of the first slide.
    First,
}

/// Optional per-slide animation layered on top of the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideAnimation {
    /// No extra animation.
    #[default]
    None,
    /// Non-current slides shrink to `zoom_scale` and neighbors are nudged.
    Zoom,
}

/// Number of slides advanced per navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlidesToScroll {
    /// Fixed step.
    Count(usize),
    /// Fill the frame: resolved per layout pass to
    /// `floor(frame_width / (slide_width + cell_spacing))`, never below 1.
    Auto,
}

impl SlidesToScroll {
    fn default_count() -> Self {
        Self::Count(1)
    }
}

impl Default for SlidesToScroll {
    fn default() -> Self {
        Self::default_count()
    }
}

/// Error parsing a [`SlidesToScroll`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseSlidesToScrollError {
    /// Input was neither `"auto"` nor an integer.
    #[error("expected \"auto\" or a positive integer, got {0:?}")]
    Invalid(String),
    /// A step of zero slides would never advance.
    #[error("slides-to-scroll must be at least 1")]
    Zero,
}

impl FromStr for SlidesToScroll {
    type Err = ParseSlidesToScrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        let count: usize = s
            .trim()
            .parse()
            .map_err(|_| ParseSlidesToScrollError::Invalid(s.to_owned()))?;
        if count == 0 {
            return Err(ParseSlidesToScrollError::Zero);
        }
        Ok(Self::Count(count))
    }
}

impl std::fmt::Display for SlidesToScroll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

/// Configuration for a [`crate::Carousel`].
///
/// Mirrors the classic slideshow option surface; all fields are optional in
/// the sense that [`CarouselArgs::default`] is a fully working configuration.
#[derive(Clone, Setters)]
pub struct CarouselArgs {
    /// Initial slide index; clamped to the slide count on construction.
    pub slide_index: usize,
    /// Number of slides simultaneously visible. May be fractional for a
    /// partial-slide reveal. Fade mode forces an integer of at least 1.
    pub slides_to_show: f32,
    /// Number of slides advanced per navigation step.
    pub slides_to_scroll: SlidesToScroll,
    /// Anchor point of the current slide within the frame.
    pub cell_align: CellAlign,
    /// Spacing between slides in pixels.
    pub cell_spacing: f32,
    /// Transition renderer.
    pub transition_mode: TransitionMode,
    /// Whether navigation past the first/last slide loops to the other end.
    pub wrap_around: bool,
    /// Vertical orientation (rows stacked instead of columns).
    pub vertical: bool,
    /// How slide height is derived from measured children.
    pub height_mode: HeightMode,
    /// Extra per-slide animation.
    pub animation: SlideAnimation,
    /// Scale applied per step of distance from the current slide, in `[0, 1]`.
    pub zoom_scale: f32,
    /// Opacity applied per step of distance from the current slide, in `[0, 1]`.
    pub opacity_scale: f32,
    /// Pixel nudge applied to the slides adjacent to current while zooming.
    pub slide_offset: f32,
    /// Transition duration.
    pub speed: Duration,
    /// Easing for regular slide transitions.
    pub easing: Easing,
    /// Easing for the snap-back at a non-wrapping boundary.
    pub edge_easing: Easing,
    /// Render every transition with zero duration.
    pub disable_animation: bool,
    /// Suppress drag offsets that would travel past a non-wrapping bound.
    pub disable_edge_swiping: bool,
    /// Whether pointer dragging is enabled.
    pub dragging: bool,
    /// Advance on a timer.
    pub autoplay: bool,
    /// Autoplay period.
    pub autoplay_interval: Duration,
    /// Autoplay toward previous slides instead of next.
    pub autoplay_reverse: bool,
    /// Pause autoplay while the pointer is over the carousel.
    pub pause_on_hover: bool,
    /// React to [`crate::KeyInput`] fed into `handle_key`.
    pub enable_keyboard_controls: bool,
    /// Placeholder slide width used before the first real measurement.
    pub initial_slide_width: f32,
    /// Placeholder slide height used before the first real measurement.
    pub initial_slide_height: f32,
    /// Explicit slide width in pixels, overriding the derived width.
    pub slide_width: Option<f32>,
    /// Fired before the index mutates, with the old and new index.
    #[setters(skip)]
    pub before_slide: CallbackWith<SlideChange>,
    /// Fired when a transition settles, with the settled index.
    #[setters(skip)]
    pub after_slide: CallbackWith<usize>,
    /// Fired when a pointer drag begins.
    #[setters(skip)]
    pub on_drag_start: Callback,
    /// Fired after a resize-triggered re-measurement.
    #[setters(skip)]
    pub on_resize: Callback,
    /// Renders the accessibility live-region message.
    #[setters(skip)]
    pub render_announce_slide_message: CallbackWith<SlideStatus, String>,
}

impl Default for CarouselArgs {
    fn default() -> Self {
        Self {
            slide_index: 0,
            slides_to_show: 1.0,
            slides_to_scroll: SlidesToScroll::Count(1),
            cell_align: CellAlign::Left,
            cell_spacing: 0.0,
            transition_mode: TransitionMode::Scroll,
            wrap_around: false,
            vertical: false,
            height_mode: HeightMode::Max,
            animation: SlideAnimation::None,
            zoom_scale: 0.85,
            opacity_scale: 0.65,
            slide_offset: 25.0,
            speed: Duration::from_millis(500),
            easing: Easing::CircleOut,
            edge_easing: Easing::ElasticOut,
            disable_animation: false,
            disable_edge_swiping: false,
            dragging: true,
            autoplay: false,
            autoplay_interval: Duration::from_millis(3000),
            autoplay_reverse: false,
            pause_on_hover: true,
            enable_keyboard_controls: false,
            initial_slide_width: 0.0,
            initial_slide_height: 0.0,
            slide_width: None,
            before_slide: CallbackWith::default(),
            after_slide: CallbackWith::default(),
            on_drag_start: Callback::default(),
            on_resize: Callback::default(),
            render_announce_slide_message: CallbackWith::new(
                events::default_announce_slide_message,
            ),
        }
    }
}

impl CarouselArgs {
    /// Sets the `before_slide` hook.
    pub fn before_slide<F>(mut self, hook: F) -> Self
    where
        F: Fn(SlideChange) + Send + Sync + 'static,
    {
        self.before_slide = CallbackWith::new(hook);
        self
    }

    /// Sets the `after_slide` hook.
    pub fn after_slide<F>(mut self, hook: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.after_slide = CallbackWith::new(hook);
        self
    }

    /// Sets the drag-start hook.
    pub fn on_drag_start<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_drag_start = Callback::new(hook);
        self
    }

    /// Sets the resize hook.
    pub fn on_resize<F>(mut self, hook: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_resize = Callback::new(hook);
        self
    }

    /// Sets the announce-message renderer.
    pub fn render_announce_slide_message<F>(mut self, render: F) -> Self
    where
        F: Fn(SlideStatus) -> String + Send + Sync + 'static,
    {
        self.render_announce_slide_message = CallbackWith::new(render);
        self
    }

    /// Clamps numeric options into their valid ranges and applies the fade
    /// mode constraints (integer window, left alignment, step = window).
    pub(crate) fn sanitize(&mut self) {
        self.slides_to_show = self.slides_to_show.max(1.0);
        self.zoom_scale = self.zoom_scale.clamp(0.0, 1.0);
        self.opacity_scale = self.opacity_scale.clamp(0.0, 1.0);
        self.cell_spacing = self.cell_spacing.max(0.0);
        self.slide_offset = self.slide_offset.max(0.0);
        if let SlidesToScroll::Count(n) = &mut self.slides_to_scroll {
            *n = (*n).max(1);
        }
        if self.transition_mode == TransitionMode::Fade {
            let window = (self.slides_to_show.floor() as usize).max(1);
            self.slides_to_show = window as f32;
            self.slides_to_scroll = SlidesToScroll::Count(window);
            self.cell_align = CellAlign::Left;
        }
    }
}

impl From<&CarouselArgs> for CarouselArgs {
    fn from(value: &CarouselArgs) -> Self {
        value.clone()
    }
}
