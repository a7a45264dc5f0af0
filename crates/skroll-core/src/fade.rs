#![forbid(unsafe_code)]

//! Duration-based 0→1 ramps for enter/exit transitions.
//!
//! Scroll cards take their value from progress, but the source site also
//! animates things the scroll position does not drive: an accordion
//! answer expanding, the mobile menu sliding in. Those reduce to a
//! [`Fade`] — elapsed time over a fixed duration, shaped by an easing
//! function — and its inverted twin [`FadeOut`] for exits.

use std::time::Duration;

use crate::animate::{Animate, EasingFn, linear};

/// A 0.0→1.0 ramp over a fixed duration.
///
/// A zero duration is clamped to 1ns so the first tick completes the fade
/// instead of dividing by zero.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Fade {
    /// Create a fade over the given duration with linear easing.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: linear,
        }
    }

    /// Set the easing function (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Total duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Animate for Fade {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        let t = (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32;
        (self.easing)(t).clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

/// A fade whose value runs 1.0→0.0: the exit half of a reveal.
#[derive(Debug, Clone, Copy)]
pub struct FadeOut(Fade);

impl FadeOut {
    /// Create an inverted fade over the given duration.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self(Fade::new(duration))
    }

    /// Set the easing function (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.0 = self.0.easing(easing);
        self
    }
}

impl Animate for FadeOut {
    fn tick(&mut self, dt: Duration) {
        self.0.tick(dt);
    }

    fn is_complete(&self) -> bool {
        self.0.is_complete()
    }

    fn value(&self) -> f32 {
        1.0 - self.0.value()
    }

    fn reset(&mut self) {
        self.0.reset();
    }
}
