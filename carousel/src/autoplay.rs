//! Autoplay: deadline-based periodic advancement.
//!
//! ## Usage
//!
//! Polled from [`crate::Carousel::tick`]; pauses while the document is hidden
//! or the pointer hovers the carousel, and stops for good when a non-wrapping
//! strip reaches its terminal page.

use std::time::{Duration, Instant};

use tracing::debug;

/// Direction of one autoplay advancement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AutoplayStep {
    Next,
    Previous,
}

/// Page context the autoplay decision needs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AutoplayContext {
    pub current_slide: usize,
    pub slide_count: usize,
    pub slides_to_show: f32,
    pub wrap_around: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct Autoplay {
    enabled: bool,
    playing: bool,
    reverse: bool,
    interval: Duration,
    next_due: Option<Instant>,
    /// Terminal stop: a non-wrapping strip ran out of pages. Visibility
    /// returns do not restart it; an explicit toggle does.
    stopped: bool,
}

impl Autoplay {
    pub(crate) fn new(enabled: bool, interval: Duration, reverse: bool, now: Instant) -> Self {
        Self {
            enabled,
            playing: enabled,
            reverse,
            interval,
            next_due: enabled.then(|| now + interval),
            stopped: false,
        }
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.playing
    }

    /// Returns the advancement to perform if the interval elapsed.
    pub(crate) fn poll(&mut self, now: Instant, ctx: AutoplayContext) -> Option<AutoplayStep> {
        let due = self.next_due?;
        if !self.playing || now < due {
            return None;
        }
        self.next_due = Some(now + self.interval);

        if ctx.wrap_around {
            return Some(if self.reverse {
                AutoplayStep::Previous
            } else {
                AutoplayStep::Next
            });
        }
        if self.reverse {
            if ctx.current_slide != 0 {
                return Some(AutoplayStep::Previous);
            }
        } else {
            let last_page = ctx.slide_count as f32 - ctx.slides_to_show;
            if ctx.current_slide as f32 != last_page {
                return Some(AutoplayStep::Next);
            }
        }
        debug!("autoplay reached its terminal page, stopping");
        self.stop();
        None
    }

    /// Terminal stop at the end of a non-wrapping strip.
    fn stop(&mut self) {
        self.playing = false;
        self.next_due = None;
        self.stopped = true;
    }

    /// Restarts the interval so a user-driven navigation gets a full period
    /// before the next automatic advancement.
    pub(crate) fn reset(&mut self, now: Instant) {
        if self.playing {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Resumable pause (document hidden, pointer hover).
    pub(crate) fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.next_due = None;
        }
    }

    /// Undo a resumable pause. Terminal stops stay stopped.
    pub(crate) fn resume(&mut self, now: Instant) {
        if self.enabled && !self.playing && !self.stopped {
            self.playing = true;
            self.next_due = Some(now + self.interval);
        }
    }

    /// Space-key toggle; restarts even after a terminal stop.
    pub(crate) fn toggle(&mut self, now: Instant) {
        if self.playing {
            self.pause();
        } else {
            self.stopped = false;
            self.playing = true;
            self.enabled = true;
            self.next_due = Some(now + self.interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(current: usize) -> AutoplayContext {
        AutoplayContext {
            current_slide: current,
            slide_count: 3,
            slides_to_show: 1.0,
            wrap_around: false,
        }
    }

    #[test]
    fn advances_every_interval() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::new(true, Duration::from_secs(3), false, t0);
        assert_eq!(autoplay.poll(t0 + Duration::from_secs(1), ctx(0)), None);
        assert_eq!(
            autoplay.poll(t0 + Duration::from_secs(3), ctx(0)),
            Some(AutoplayStep::Next)
        );
        // Rescheduled relative to the firing tick.
        assert_eq!(autoplay.poll(t0 + Duration::from_secs(4), ctx(1)), None);
        assert_eq!(
            autoplay.poll(t0 + Duration::from_secs(6), ctx(1)),
            Some(AutoplayStep::Next)
        );
    }

    #[test]
    fn stops_at_terminal_page_without_wrap() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::new(true, Duration::from_secs(1), false, t0);
        assert_eq!(autoplay.poll(t0 + Duration::from_secs(1), ctx(2)), None);
        assert!(!autoplay.is_playing());
        // A visibility return must not restart a terminal stop.
        autoplay.resume(t0 + Duration::from_secs(2));
        assert!(!autoplay.is_playing());
        // An explicit toggle does.
        autoplay.toggle(t0 + Duration::from_secs(2));
        assert!(autoplay.is_playing());
    }

    #[test]
    fn wrap_never_stops() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::new(true, Duration::from_secs(1), false, t0);
        let wrapped = AutoplayContext {
            wrap_around: true,
            ..ctx(2)
        };
        assert_eq!(
            autoplay.poll(t0 + Duration::from_secs(1), wrapped),
            Some(AutoplayStep::Next)
        );
    }

    #[test]
    fn reverse_walks_backward_and_stops_at_zero() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::new(true, Duration::from_secs(1), true, t0);
        assert_eq!(
            autoplay.poll(t0 + Duration::from_secs(1), ctx(2)),
            Some(AutoplayStep::Previous)
        );
        assert_eq!(autoplay.poll(t0 + Duration::from_secs(2), ctx(0)), None);
        assert!(!autoplay.is_playing());
    }

    #[test]
    fn pause_and_resume() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::new(true, Duration::from_secs(1), false, t0);
        autoplay.pause();
        assert_eq!(autoplay.poll(t0 + Duration::from_secs(5), ctx(0)), None);
        autoplay.resume(t0 + Duration::from_secs(5));
        assert_eq!(
            autoplay.poll(t0 + Duration::from_secs(6), ctx(0)),
            Some(AutoplayStep::Next)
        );
    }

    #[test]
    fn disabled_autoplay_never_fires() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::new(false, Duration::from_secs(1), false, t0);
        assert_eq!(autoplay.poll(t0 + Duration::from_secs(10), ctx(0)), None);
        autoplay.resume(t0);
        assert!(!autoplay.is_playing());
    }
}
