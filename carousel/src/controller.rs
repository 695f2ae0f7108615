//! Slide index controller: the carousel's navigation state machine.
//!
//! ## Usage
//!
//! Owns the current index, the transition-in-flight flag and the wrap-around
//! bookkeeping. At most one transition is in flight; requests arriving while
//! one is running are dropped, not queued.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::args::CellAlign;

/// Navigation inputs resolved for the current layout pass.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavContext {
    pub slide_count: usize,
    pub slides_to_show: f32,
    /// Resolved step, never 0.
    pub slides_to_scroll: usize,
    pub cell_align: CellAlign,
    pub wrap_around: bool,
    pub speed: Duration,
}

impl NavContext {
    /// Largest index reachable with left alignment and no wrap-around.
    fn last_page(&self) -> usize {
        (self.slide_count as f32 - self.slides_to_show).floor().max(0.0) as usize
    }
}

/// What a navigation request did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum GoOutcome {
    /// Dropped: mid-transition, out of range without wrap, or a no-move.
    Ignored,
    /// Regular in-range transition.
    Moved { from: usize, to: usize },
    /// Wrap past the end: snapped to index 0, aiming the strip at the
    /// logical (out-of-range) target position.
    WrappedForward { from: usize, to: f32, settle: usize },
    /// Wrap before the start: snapped to the wrap origin
    /// (`slide_count - slides_to_scroll`).
    WrappedBackward { from: usize, to: f32, settle: usize },
}

/// Fired when the settle deadline elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Settle {
    /// Index the carousel settled on.
    pub index: usize,
    /// Whether the `after_slide` hook should fire.
    pub notify: bool,
    /// The settled transition was a wrap-around snap; the strip must be
    /// repositioned without animation.
    pub was_wrapping: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct IndexController {
    current: usize,
    transitioning: bool,
    wrapping: bool,
    wrap_to: Option<f32>,
    settle_due: Option<Instant>,
    settle_index: usize,
    settle_notify: bool,
}

impl IndexController {
    pub(crate) fn new(initial: usize, slide_count: usize) -> Self {
        let current = if slide_count == 0 {
            0
        } else {
            initial.min(slide_count - 1)
        };
        Self {
            current,
            transitioning: false,
            wrapping: false,
            wrap_to: None,
            settle_due: None,
            settle_index: current,
            settle_notify: false,
        }
    }

    pub(crate) fn current(&self) -> usize {
        self.current
    }

    pub(crate) fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub(crate) fn is_wrapping(&self) -> bool {
        self.wrapping
    }

    /// Logical (possibly out-of-range) index the wrap snap aims at.
    pub(crate) fn wrap_target(&self) -> Option<f32> {
        self.wrap_to
    }

    /// Re-clamps the index after a children change.
    pub(crate) fn clamp_to(&mut self, slide_count: usize) {
        if slide_count == 0 {
            self.current = 0;
        } else if self.current >= slide_count {
            self.current = slide_count - 1;
        }
    }

    /// Requests a transition to `target`.
    ///
    /// Out-of-range targets are dropped unless wrap-around is on, in which
    /// case the strip snaps to the wrap origin immediately (no animated
    /// traversal across the whole strip) and settles after `speed`.
    pub(crate) fn go_to(&mut self, target: isize, ctx: &NavContext, now: Instant) -> GoOutcome {
        if self.transitioning {
            trace!(target, "navigation dropped: transition in flight");
            return GoOutcome::Ignored;
        }
        if ctx.slide_count == 0 {
            return GoOutcome::Ignored;
        }

        let count = ctx.slide_count as isize;
        if (0..count).contains(&target) {
            let target = target as usize;
            if target == self.current {
                return GoOutcome::Ignored;
            }
            let from = self.current;
            self.begin(target, target, true, ctx, now);
            debug!(from, to = target, "slide transition started");
            return GoOutcome::Moved { from, to: target };
        }

        if !ctx.wrap_around {
            return GoOutcome::Ignored;
        }

        let from = self.current;
        if target >= count {
            let settle = target.rem_euclid(count) as usize;
            self.begin(0, settle, settle != from, ctx, now);
            self.wrapping = true;
            self.wrap_to = Some(target as f32);
            debug!(from, target, settle, "wrapping past the end");
            GoOutcome::WrappedForward {
                from,
                to: target as f32,
                settle,
            }
        } else {
            let origin = ctx.slide_count.saturating_sub(ctx.slides_to_scroll);
            self.begin(origin, origin, true, ctx, now);
            self.wrapping = true;
            self.wrap_to = Some(target as f32);
            debug!(from, target, settle = origin, "wrapping before the start");
            GoOutcome::WrappedBackward {
                from,
                to: target as f32,
                settle: origin,
            }
        }
    }

    /// Advances by the resolved step, clamping to the last page for
    /// left-aligned non-wrapping strips.
    pub(crate) fn next(&mut self, ctx: &NavContext, now: Instant) -> GoOutcome {
        let at_last_page = self.current as f32 >= ctx.slide_count as f32 - ctx.slides_to_show;
        if at_last_page && !ctx.wrap_around && ctx.cell_align == CellAlign::Left {
            return GoOutcome::Ignored;
        }

        let offset = self.current as isize + ctx.slides_to_scroll as isize;
        if ctx.wrap_around {
            return self.go_to(offset, ctx, now);
        }
        let target = if ctx.cell_align == CellAlign::Left {
            offset.min(ctx.last_page() as isize)
        } else {
            offset
        };
        self.go_to(target, ctx, now)
    }

    /// Steps backward, clamping at 0 unless wrapping.
    pub(crate) fn previous(&mut self, ctx: &NavContext, now: Instant) -> GoOutcome {
        if self.current == 0 && !ctx.wrap_around {
            return GoOutcome::Ignored;
        }
        let offset = self.current as isize - ctx.slides_to_scroll as isize;
        if ctx.wrap_around {
            return self.go_to(offset, ctx, now);
        }
        self.go_to(offset.max(0), ctx, now)
    }

    /// Fires the settle deadline if it elapsed.
    pub(crate) fn tick(&mut self, now: Instant) -> Option<Settle> {
        let due = self.settle_due?;
        if now < due {
            return None;
        }
        self.settle_due = None;
        self.transitioning = false;
        let was_wrapping = self.wrapping;
        self.wrapping = false;
        self.wrap_to = None;
        self.current = self.settle_index;
        trace!(index = self.current, "transition settled");
        Some(Settle {
            index: self.settle_index,
            notify: self.settle_notify,
            was_wrapping,
        })
    }

    fn begin(
        &mut self,
        visual: usize,
        settle: usize,
        notify: bool,
        ctx: &NavContext,
        now: Instant,
    ) {
        self.current = visual;
        self.transitioning = true;
        self.wrapping = false;
        self.wrap_to = None;
        self.settle_due = Some(now + ctx.speed);
        self.settle_index = settle;
        self.settle_notify = notify;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(slide_count: usize) -> NavContext {
        NavContext {
            slide_count,
            slides_to_show: 1.0,
            slides_to_scroll: 1,
            cell_align: CellAlign::Left,
            wrap_around: false,
            speed: Duration::from_millis(500),
        }
    }

    fn settle(controller: &mut IndexController, now: Instant) -> Settle {
        controller
            .tick(now + Duration::from_millis(500))
            .expect("settle deadline should have fired")
    }

    #[test]
    fn next_clamps_to_last_page() {
        let mut ctx = ctx(9);
        ctx.slides_to_show = 4.0;
        ctx.slides_to_scroll = 4;
        let mut controller = IndexController::new(0, 9);
        let mut now = Instant::now();

        assert_eq!(
            controller.next(&ctx, now),
            GoOutcome::Moved { from: 0, to: 4 }
        );
        settle(&mut controller, now);
        now += Duration::from_secs(1);

        assert_eq!(
            controller.next(&ctx, now),
            GoOutcome::Moved { from: 4, to: 5 }
        );
        settle(&mut controller, now);
        assert_eq!(controller.current(), 5);

        // Already at slide_count - slides_to_show: idempotent.
        now += Duration::from_secs(1);
        assert_eq!(controller.next(&ctx, now), GoOutcome::Ignored);
        assert_eq!(controller.current(), 5);
    }

    #[test]
    fn repeated_next_reaches_and_stays_at_boundary() {
        let ctx = ctx(4);
        let mut controller = IndexController::new(0, 4);
        let mut now = Instant::now();
        for _ in 0..10 {
            controller.next(&ctx, now);
            controller.tick(now + Duration::from_millis(500));
            now += Duration::from_secs(1);
        }
        assert_eq!(controller.current(), 3);
        assert!(!controller.is_transitioning());
    }

    #[test]
    fn previous_at_zero_is_a_no_op() {
        let ctx = ctx(6);
        let mut controller = IndexController::new(0, 6);
        let now = Instant::now();
        assert_eq!(controller.previous(&ctx, now), GoOutcome::Ignored);
        assert_eq!(controller.current(), 0);
        assert!(!controller.is_transitioning());
        assert_eq!(controller.tick(now + Duration::from_secs(10)), None);
    }

    #[test]
    fn requests_mid_transition_are_dropped() {
        let ctx = ctx(6);
        let mut controller = IndexController::new(0, 6);
        let now = Instant::now();
        assert_eq!(
            controller.go_to(2, &ctx, now),
            GoOutcome::Moved { from: 0, to: 2 }
        );
        assert_eq!(controller.go_to(4, &ctx, now), GoOutcome::Ignored);
        assert_eq!(
            controller.next(&ctx, now + Duration::from_millis(100)),
            GoOutcome::Ignored
        );
        let settled = settle(&mut controller, now);
        assert_eq!(settled.index, 2);
        assert_eq!(controller.current(), 2);
    }

    #[test]
    fn wrap_forward_settles_at_zero() {
        let mut ctx = ctx(6);
        ctx.wrap_around = true;
        let mut controller = IndexController::new(5, 6);
        let now = Instant::now();

        let outcome = controller.next(&ctx, now);
        assert_eq!(
            outcome,
            GoOutcome::WrappedForward {
                from: 5,
                to: 6.0,
                settle: 0,
            }
        );
        assert_eq!(controller.current(), 0);
        assert!(controller.is_wrapping());
        assert_eq!(controller.wrap_target(), Some(6.0));

        let settled = settle(&mut controller, now);
        assert_eq!(settled.index, 0);
        assert!(settled.notify);
        assert!(settled.was_wrapping);
        assert!(!controller.is_wrapping());
    }

    #[test]
    fn wrap_onto_the_same_slide_stays_silent() {
        // Stepping by a full strip wraps back to the slide it started on.
        let mut ctx = ctx(3);
        ctx.wrap_around = true;
        ctx.slides_to_scroll = 3;
        let mut controller = IndexController::new(0, 3);
        let now = Instant::now();

        let outcome = controller.next(&ctx, now);
        assert_eq!(
            outcome,
            GoOutcome::WrappedForward {
                from: 0,
                to: 3.0,
                settle: 0,
            }
        );

        let settled = settle(&mut controller, now);
        assert_eq!(settled.index, 0);
        assert!(!settled.notify);
        assert!(settled.was_wrapping);
    }

    #[test]
    fn wrap_backward_lands_on_wrap_origin() {
        let mut ctx = ctx(6);
        ctx.wrap_around = true;
        ctx.slides_to_scroll = 2;
        let mut controller = IndexController::new(0, 6);
        let now = Instant::now();

        let outcome = controller.previous(&ctx, now);
        assert_eq!(
            outcome,
            GoOutcome::WrappedBackward {
                from: 0,
                to: -2.0,
                settle: 4,
            }
        );
        assert_eq!(settle(&mut controller, now).index, 4);
        assert_eq!(controller.current(), 4);
    }

    #[test]
    fn out_of_range_without_wrap_is_dropped() {
        let ctx = ctx(6);
        let mut controller = IndexController::new(2, 6);
        let now = Instant::now();
        assert_eq!(controller.go_to(6, &ctx, now), GoOutcome::Ignored);
        assert_eq!(controller.go_to(-1, &ctx, now), GoOutcome::Ignored);
        assert_eq!(controller.current(), 2);
        assert!(!controller.is_transitioning());
    }

    #[test]
    fn non_left_alignment_does_not_clamp_next() {
        let mut ctx = ctx(6);
        ctx.cell_align = CellAlign::Center;
        let mut controller = IndexController::new(5, 6);
        let now = Instant::now();
        // Target 6 is out of range and wrap is off: dropped, not clamped.
        assert_eq!(controller.next(&ctx, now), GoOutcome::Ignored);
        assert_eq!(controller.current(), 5);
    }

    #[test]
    fn settle_fires_exactly_once() {
        let ctx = ctx(6);
        let mut controller = IndexController::new(0, 6);
        let now = Instant::now();
        controller.go_to(1, &ctx, now);
        assert!(controller.tick(now + Duration::from_millis(499)).is_none());
        assert!(controller.tick(now + Duration::from_millis(500)).is_some());
        assert!(controller.tick(now + Duration::from_millis(501)).is_none());
    }

    #[test]
    fn initial_index_is_clamped() {
        let controller = IndexController::new(12, 6);
        assert_eq!(controller.current(), 5);
    }
}
