//! Easing curves and the container offset tween.
//!
//! ## Usage
//!
//! Map linear transition progress to eased progress, and interpolate the
//! slide strip translation over a transition's duration.

use std::time::{Duration, Instant};

const TAU: f32 = std::f32::consts::TAU;
const ELASTIC_PERIOD: f32 = 0.3;

/// Easing curve applied to a slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// No easing, constant velocity.
    Linear,
    /// Circular ease-out, the default slide easing.
    #[default]
    CircleOut,
    /// Cubic ease-in-out.
    CubicInOut,
    /// Elastic ease-out, the default edge (rubber-band) easing.
    ElasticOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress.
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CircleOut => (1.0 - (t - 1.0) * (t - 1.0)).max(0.0).sqrt(),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::ElasticOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else {
                    let p = ELASTIC_PERIOD / TAU;
                    let s = (1.0f32).asin() * p;
                    1.0 - 2.0f32.powf(-10.0 * t) * ((t + s) / p).sin()
                }
            }
        }
    }
}

/// Interpolates the container translation from one settled position to the
/// next over a transition's duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Tween {
    from: (f32, f32),
    to: (f32, f32),
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub(crate) fn new(
        from: (f32, f32),
        to: (f32, f32),
        start: Instant,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    pub(crate) fn at(&self, now: Instant) -> (f32, f32) {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed >= self.duration {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.easing.apply(progress);
        (
            self.from.0 + (self.to.0 - self.from.0) * eased,
            self.from.1 + (self.to.1 - self.from.1) * eased,
        )
    }

    pub(crate) fn finished(&self, now: Instant) -> bool {
        self.duration.is_zero() || now.saturating_duration_since(self.start) >= self.duration
    }
}
