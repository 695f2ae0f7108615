//! The carousel facade: glues the index controller, layout, gestures,
//! autoplay and transition renderers into one host-driven widget.
//!
//! ## Usage
//!
//! The host owns the event loop. Feed pointer and key events in, call
//! [`Carousel::tick`] on every timer beat and [`Carousel::frame`] on every
//! paint, and apply the returned styles to the slide elements.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::animation::{Easing, Tween};
use crate::args::CarouselArgs;
use crate::autoplay::{Autoplay, AutoplayContext, AutoplayStep};
use crate::controller::{GoOutcome, IndexController, NavContext, Settle};
use crate::controls::ControlProps;
use crate::events::{KeyAction, KeyInput, SlideChange, SlideStatus};
use crate::gesture::{GestureTracker, Point, SwipeOutcome};
use crate::layout::{self, SlideGeometry};
use crate::offset::{self, OffsetParams};
use crate::style::{CarouselFrame, SlideExtent, Viewport};
use crate::transitions::{self, TransitionInput};

/// A headless slideshow widget.
///
/// Holds all carousel state; produces a [`CarouselFrame`] per paint and fires
/// the hooks configured on [`CarouselArgs`].
pub struct Carousel {
    args: CarouselArgs,
    slide_count: usize,
    controller: IndexController,
    gesture: GestureTracker,
    autoplay: Autoplay,
    geometry: SlideGeometry,
    measured: bool,
    /// Step resolved against the current geometry.
    slides_to_scroll: usize,
    /// Settled strip position for the current index.
    left: f32,
    top: f32,
    tween: Option<Tween>,
    /// Live drag offset, positive toward the next slide.
    touch_offset: f32,
    /// Cross-render anchor for the fade renderer.
    fade_from: f32,
    hovered: bool,
    document_hidden: bool,
}

impl Carousel {
    /// Builds a carousel for `slide_count` slides.
    ///
    /// Layout starts from the placeholder geometry; call
    /// [`Carousel::measure`] once the host has real extents.
    pub fn new(args: impl Into<CarouselArgs>, slide_count: usize) -> Self {
        let mut args = args.into();
        args.sanitize();
        let now = Instant::now();
        let geometry = SlideGeometry::placeholder(&args);
        let slides_to_scroll = layout::resolve_slides_to_scroll(&args, &geometry);
        let controller = IndexController::new(args.slide_index, slide_count);
        let autoplay = Autoplay::new(
            args.autoplay,
            args.autoplay_interval,
            args.autoplay_reverse,
            now,
        );
        let fade_from = controller.current() as f32;

        let mut carousel = Self {
            args,
            slide_count,
            controller,
            gesture: GestureTracker::default(),
            autoplay,
            geometry,
            measured: false,
            slides_to_scroll,
            left: 0.0,
            top: 0.0,
            tween: None,
            touch_offset: 0.0,
            fade_from,
            hovered: false,
            document_hidden: false,
        };
        carousel.snap_to_current();
        carousel
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the current slide.
    pub fn current_slide(&self) -> usize {
        self.controller.current()
    }

    /// A transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        self.controller.is_transitioning()
    }

    /// A pointer drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Autoplay is currently running.
    pub fn is_playing(&self) -> bool {
        self.autoplay.is_playing()
    }

    /// Geometry of the current layout pass.
    pub fn geometry(&self) -> SlideGeometry {
        self.geometry
    }

    /// The configuration this carousel runs with.
    pub fn args(&self) -> &CarouselArgs {
        &self.args
    }

    /// Snapshot for host-rendered controls.
    pub fn control_props(&self) -> ControlProps {
        ControlProps {
            current_slide: self.controller.current(),
            slide_count: self.slide_count,
            slides_to_show: self.args.slides_to_show,
            slides_to_scroll: self.slides_to_scroll,
            cell_align: self.args.cell_align,
            wrap_around: self.args.wrap_around,
            frame_width: self.geometry.frame_width,
            slide_width: self.geometry.slide_width,
        }
    }

    /// Updates the slide count without fresh measurements, clamping the
    /// current index into the new range.
    pub fn set_slide_count(&mut self, slide_count: usize) {
        if slide_count == self.slide_count {
            return;
        }
        self.slide_count = slide_count;
        self.controller.clamp_to(slide_count);
        self.snap_to_current();
    }

    /// Recomputes the layout from host measurements.
    ///
    /// The slide count follows the measurement slice. Fires `on_resize` when
    /// an already-measured layout changes.
    pub fn measure(&mut self, viewport: Viewport, slides: &[SlideExtent]) {
        self.slide_count = slides.len();
        self.controller.clamp_to(self.slide_count);

        let geometry =
            SlideGeometry::measure(&self.args, viewport, slides, self.controller.current());
        let changed = geometry != self.geometry;
        self.geometry = geometry;
        self.slides_to_scroll = layout::resolve_slides_to_scroll(&self.args, &self.geometry);
        self.snap_to_current();

        if changed && self.measured {
            debug!(
                slide_width = geometry.slide_width,
                frame_width = geometry.frame_width,
                "layout remeasured"
            );
            self.args.on_resize.call();
        }
        self.measured = true;
    }

    /// Navigates to `index`. Out-of-range targets are dropped; requests
    /// during a transition are dropped.
    pub fn go_to_slide(&mut self, index: usize, now: Instant) {
        let ctx = self.nav_context();
        let outcome = self.controller.go_to(index as isize, &ctx, now);
        if self.apply_outcome(outcome, now, None) {
            self.autoplay.reset(now);
        }
    }

    /// Advances by the resolved step.
    pub fn next_slide(&mut self, now: Instant) {
        if self.advance(now) {
            self.autoplay.reset(now);
        }
    }

    /// Steps backward by the resolved step.
    pub fn previous_slide(&mut self, now: Instant) {
        if self.retreat(now) {
            self.autoplay.reset(now);
        }
    }

    /// Drives deadlines: transition settles, autoplay, running tweens.
    ///
    /// Returns whether anything visible changed, so hosts can skip a paint.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(settle) = self.controller.tick(now) {
            self.finish_transition(settle);
            changed = true;
        }

        let ctx = AutoplayContext {
            current_slide: self.controller.current(),
            slide_count: self.slide_count,
            slides_to_show: self.args.slides_to_show,
            wrap_around: self.args.wrap_around,
        };
        match self.autoplay.poll(now, ctx) {
            Some(AutoplayStep::Next) => changed |= self.advance(now),
            Some(AutoplayStep::Previous) => changed |= self.retreat(now),
            None => {}
        }

        if let Some(tween) = &self.tween {
            if !tween.finished(now) {
                changed = true;
            }
        }
        changed
    }

    /// Starts a pointer drag.
    pub fn pointer_down(&mut self, pos: Point) {
        if !self.args.dragging || self.slide_count == 0 {
            return;
        }
        self.tween = None;
        self.gesture.begin(pos);
        self.args.on_drag_start.call();
    }

    /// Feeds a pointer movement into the running drag.
    pub fn pointer_move(&mut self, pos: Point) {
        if !self.gesture.is_dragging() {
            return;
        }
        let touch = self.gesture.update(pos, self.args.vertical);
        if self.args.disable_edge_swiping && !self.args.wrap_around {
            let params = self.offset_params();
            let (tx, ty) = offset::offset_deltas(&params, touch, None);
            if offset::is_edge_swiping(&params, tx, ty) {
                return;
            }
        }
        self.touch_offset = touch;
    }

    /// Ends the drag: commits to a slide change past the swipe threshold,
    /// otherwise eases back to the current slide with the edge easing.
    pub fn pointer_up(&mut self, now: Instant) {
        if !self.gesture.is_dragging() {
            return;
        }
        let from = self.drag_position();
        let outcome = self.gesture.release(
            self.geometry.frame_extent(self.args.vertical),
            self.args.slides_to_show,
        );
        self.touch_offset = 0.0;

        // The tween must pick up where the finger left the strip, not at the
        // pre-drag settled position.
        let moved = match outcome {
            SwipeOutcome::Next => self.advance_from(now, Some(from)),
            SwipeOutcome::Previous => self.retreat_from(now, Some(from)),
            SwipeOutcome::SnapBack | SwipeOutcome::Stationary => false,
        };
        if moved {
            self.autoplay.reset(now);
        } else {
            let to = {
                let params = self.offset_params();
                offset::offset_deltas(&params, 0.0, None)
            };
            self.tween = Some(Tween::new(
                from,
                to,
                now,
                self.duration(),
                self.args.edge_easing,
            ));
        }
    }

    /// Whether the host should swallow the click that follows the last
    /// pointer gesture. True after any real drag motion.
    pub fn should_suppress_click(&self) -> bool {
        self.gesture.click_disabled()
    }

    /// Pointer entered the carousel frame.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if self.args.pause_on_hover {
            self.autoplay.pause();
        }
    }

    /// Pointer left the carousel frame.
    pub fn pointer_leave(&mut self, now: Instant) {
        self.hovered = false;
        if self.args.pause_on_hover && !self.document_hidden {
            self.autoplay.resume(now);
        }
    }

    /// Document visibility change: autoplay pauses while hidden and resumes
    /// when the page returns, unless a hover still holds it.
    pub fn set_document_visible(&mut self, visible: bool, now: Instant) {
        self.document_hidden = !visible;
        if !visible {
            self.autoplay.pause();
        } else if !(self.args.pause_on_hover && self.hovered) {
            self.autoplay.resume(now);
        }
    }

    /// Handles a decoded key press, if keyboard controls are enabled.
    pub fn handle_key(&mut self, key: KeyInput, now: Instant) {
        if !self.args.enable_keyboard_controls {
            return;
        }
        match key.action() {
            KeyAction::Next => self.next_slide(now),
            KeyAction::Previous => self.previous_slide(now),
            KeyAction::First => self.go_to_slide(0, now),
            KeyAction::Last => {
                if self.slide_count > 0 {
                    self.go_to_slide(self.slide_count - 1, now);
                }
            }
            KeyAction::TogglePause => self.autoplay.toggle(now),
        }
    }

    /// Renders one frame.
    pub fn frame(&mut self, now: Instant) -> CarouselFrame {
        let (tx, ty) = if self.gesture.is_dragging() {
            self.drag_position()
        } else {
            self.render_position(now)
        };

        let input = TransitionInput {
            args: &self.args,
            geometry: &self.geometry,
            slide_count: self.slide_count,
            current_slide: self.controller.current(),
            tx,
            ty,
            left: self.left,
            top: self.top,
            dragging: self.gesture.is_dragging(),
            is_wrapping: self.controller.is_wrapping(),
        };
        let (container, slides) = transitions::render(&input, &mut self.fade_from);

        // Announcing every automatic advancement would be noise; hosts only
        // get live-region text while the user is driving.
        let announcement = (!self.autoplay.is_playing()).then(|| {
            self.args.render_announce_slide_message.call(SlideStatus {
                current_slide: self.controller.current(),
                slide_count: self.slide_count,
            })
        });

        CarouselFrame {
            container,
            slides,
            announcement,
        }
    }

    fn advance(&mut self, now: Instant) -> bool {
        self.advance_from(now, None)
    }

    fn retreat(&mut self, now: Instant) -> bool {
        self.retreat_from(now, None)
    }

    fn advance_from(&mut self, now: Instant, start: Option<(f32, f32)>) -> bool {
        let ctx = self.nav_context();
        let outcome = self.controller.next(&ctx, now);
        self.apply_outcome(outcome, now, start)
    }

    fn retreat_from(&mut self, now: Instant, start: Option<(f32, f32)>) -> bool {
        let ctx = self.nav_context();
        let outcome = self.controller.previous(&ctx, now);
        self.apply_outcome(outcome, now, start)
    }

    fn apply_outcome(
        &mut self,
        outcome: GoOutcome,
        now: Instant,
        start: Option<(f32, f32)>,
    ) -> bool {
        match outcome {
            GoOutcome::Ignored => false,
            GoOutcome::Moved { from, to } => {
                self.args.before_slide.call(SlideChange { from, to });
                self.begin_transition(now, self.args.easing, start);
                true
            }
            GoOutcome::WrappedForward { from, settle, .. }
            | GoOutcome::WrappedBackward { from, settle, .. } => {
                if from != settle {
                    self.args.before_slide.call(SlideChange { from, to: settle });
                }
                self.begin_transition(now, self.args.easing, start);
                true
            }
        }
    }

    /// Starts the strip tween toward the controller's new target and updates
    /// the settled position. Wrap snaps aim at the logical wrap target.
    /// `start` overrides the tween origin, for transitions committed from a
    /// live drag position.
    fn begin_transition(&mut self, now: Instant, easing: Easing, start: Option<(f32, f32)>) {
        let from = start.unwrap_or_else(|| self.render_position(now));
        let (to, settled) = {
            let params = self.offset_params();
            (
                offset::offset_deltas(&params, 0.0, self.controller.wrap_target()),
                offset::offset_deltas(&params, 0.0, None),
            )
        };
        self.left = settled.0;
        self.top = settled.1;
        self.tween = Some(Tween::new(from, to, now, self.duration(), easing));
    }

    /// Applies a settle: fires `after_slide` and repositions the strip
    /// without animation, which makes wrap snaps seamless.
    fn finish_transition(&mut self, settle: Settle) {
        if settle.notify {
            self.args.after_slide.call(settle.index);
        }
        self.tween = None;
        self.snap_to_current();
    }

    /// Moves the settled position onto the current index, dropping any
    /// in-flight animation target.
    fn snap_to_current(&mut self) {
        let (left, top) = {
            let params = self.offset_params();
            offset::offset_deltas(&params, 0.0, None)
        };
        self.left = left;
        self.top = top;
    }

    fn render_position(&self, now: Instant) -> (f32, f32) {
        match &self.tween {
            Some(tween) => tween.at(now),
            None => (self.left, self.top),
        }
    }

    fn drag_position(&self) -> (f32, f32) {
        let params = self.offset_params();
        offset::offset_deltas(&params, self.touch_offset, None)
    }

    fn duration(&self) -> Duration {
        if self.args.disable_animation {
            Duration::ZERO
        } else {
            self.args.speed
        }
    }

    fn nav_context(&self) -> NavContext {
        NavContext {
            slide_count: self.slide_count,
            slides_to_show: self.args.slides_to_show,
            slides_to_scroll: self.slides_to_scroll,
            cell_align: self.args.cell_align,
            wrap_around: self.args.wrap_around,
            speed: self.duration(),
        }
    }

    fn offset_params(&self) -> OffsetParams<'_> {
        OffsetParams {
            args: &self.args,
            geometry: &self.geometry,
            slide_count: self.slide_count,
            current_slide: self.controller.current(),
            slides_to_scroll: self.slides_to_scroll,
        }
    }
}
