#![forbid(unsafe_code)]

//! The time-driven animation trait and easing functions.
//!
//! Scroll-driven values are pulled from progress each frame and need no
//! clock; time-driven values (fades, springs) advance with an explicit
//! `dt`. [`Animate`] is the shared surface for the latter: the host frame
//! loop ticks every live animation once per display frame.

use std::time::Duration;

/// A value that evolves over time when ticked.
pub trait Animate {
    /// Advance by `dt`. Implementations cap or subdivide large deltas as
    /// needed; a zero `dt` is a no-op.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has finished (or settled) and further ticks
    /// are no-ops.
    fn is_complete(&self) -> bool;

    /// Current normalized value in [0.0, 1.0].
    fn value(&self) -> f32;

    /// Return to the initial state.
    fn reset(&mut self);
}

/// An easing function over normalized time.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[must_use]
pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic ease-in: slow start, fast finish.
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Quadratic ease-out: fast start, slow finish.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::{ease_in, ease_in_out, ease_out, linear};

    #[test]
    fn easings_preserve_endpoints() {
        for f in [linear, ease_in, ease_out, ease_in_out] {
            assert_eq!(f(0.0), 0.0);
            assert_eq!(f(1.0), 1.0);
        }
    }

    #[test]
    fn ease_in_is_below_linear() {
        assert!(ease_in(0.5) < 0.5);
    }

    #[test]
    fn ease_out_is_above_linear() {
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn ease_in_out_midpoint() {
        assert_eq!(ease_in_out(0.5), 0.5);
    }

    #[test]
    fn easings_are_monotonic() {
        for f in [linear, ease_in, ease_out, ease_in_out] {
            let mut prev = f(0.0);
            for i in 1..=100 {
                let v = f(i as f32 / 100.0);
                assert!(v >= prev);
                prev = v;
            }
        }
    }
}
