#![forbid(unsafe_code)]

//! Spring smoothing: a damped harmonic oscillator that follows a target.
//!
//! The mapper's raw output can jump with every scroll event. A [`Spring`]
//! interposed between the mapping and the rendered style trades immediacy
//! for physically-plausible convergence:
//!
//!   F = -stiffness × (position - target) - damping × velocity
//!
//! The spring does not alter progress; it only filters the property's
//! final rendered value. Retargeting is cheap and expected every frame.
//!
//! # Parameters
//!
//! - **stiffness** (k): restoring force. Higher = faster response.
//! - **damping** (c): velocity drag. `c = 2√k` is critical damping —
//!   fastest convergence without overshoot; below that the spring
//!   oscillates past the target before settling.
//!
//! # Integration
//!
//! Semi-implicit Euler with the step capped at 4ms; larger `dt` values
//! are subdivided so high stiffness stays numerically stable.
//!
//! # Failure Modes
//!
//! - Zero stiffness never converges; clamped to a small minimum.
//! - Zero damping oscillates forever; legal, but the spring never
//!   settles.

use std::time::Duration;

use crate::animate::Animate;

/// Maximum dt per integration step. Larger deltas are subdivided.
const MAX_STEP_SECS: f64 = 0.004;

/// Position delta below which the spring counts as settled.
const DEFAULT_REST_THRESHOLD: f64 = 0.001;

/// Velocity magnitude below which (with the position threshold) the
/// spring counts as settled.
const DEFAULT_VELOCITY_THRESHOLD: f64 = 0.01;

/// Minimum stiffness to prevent degenerate springs.
const MIN_STIFFNESS: f64 = 0.1;

/// Tunable spring parameters, separable from the spring's live state so
/// preset tables can carry them as plain data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Restoring force strength.
    pub stiffness: f64,
    /// Velocity drag.
    pub damping: f64,
}

impl SpringParams {
    /// The parameters the source site uses for its hover-tilt cards.
    #[must_use]
    pub const fn tilt() -> Self {
        Self {
            stiffness: 120.0,
            damping: 20.0,
        }
    }

    /// Critically damped parameters for a given stiffness: fastest
    /// convergence with no overshoot.
    #[must_use]
    pub fn critical(stiffness: f64) -> Self {
        let k = stiffness.max(MIN_STIFFNESS);
        Self {
            stiffness: k,
            damping: 2.0 * k.sqrt(),
        }
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::tilt()
    }
}

/// A damped oscillator following a retargetable value.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use skroll_core::spring::{Spring, SpringParams};
///
/// let mut spring = Spring::follow(0.0, SpringParams::tilt());
/// spring.retarget(6.0);
/// for _ in 0..240 {
///     spring.advance(Duration::from_millis(16));
/// }
/// assert!((spring.position() - 6.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    initial: f64,
    params: SpringParams,
    rest_threshold: f64,
    velocity_threshold: f64,
    settled: bool,
}

impl Spring {
    /// Create a spring at `initial`, targeting `initial` (already settled
    /// once ticked), with the given parameters.
    #[must_use]
    pub fn follow(initial: f64, params: SpringParams) -> Self {
        Self::new(initial, initial, params)
    }

    /// Create a spring at `initial` moving toward `target`.
    #[must_use]
    pub fn new(initial: f64, target: f64, params: SpringParams) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target,
            initial,
            params: SpringParams {
                stiffness: params.stiffness.max(MIN_STIFFNESS),
                damping: params.damping.max(0.0),
            },
            rest_threshold: DEFAULT_REST_THRESHOLD,
            velocity_threshold: DEFAULT_VELOCITY_THRESHOLD,
            settled: false,
        }
    }

    /// Set the settle thresholds (builder pattern). Both are taken as
    /// absolute values.
    #[must_use]
    pub fn with_thresholds(mut self, rest: f64, velocity: f64) -> Self {
        self.rest_threshold = rest.abs();
        self.velocity_threshold = velocity.abs();
        self
    }

    /// Current position (unclamped style value).
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current target.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Active parameters.
    #[inline]
    #[must_use]
    pub fn params(&self) -> SpringParams {
        self.params
    }

    /// Whether the spring has settled at its target.
    #[inline]
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Move the target. Wakes the spring if the change exceeds the rest
    /// threshold; retargeting to (nearly) the same value while settled is
    /// a no-op.
    pub fn retarget(&mut self, target: f64) {
        if (self.target - target).abs() > self.rest_threshold {
            self.target = target;
            self.settled = false;
        }
    }

    /// Add to the velocity. Wakes the spring.
    pub fn nudge(&mut self, velocity_delta: f64) {
        self.velocity += velocity_delta;
        self.settled = false;
    }

    /// One integration step of `dt` seconds (semi-implicit Euler: update
    /// velocity from current position, then position from new velocity).
    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let acceleration =
            -self.params.stiffness * displacement - self.params.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Advance the spring by `dt`, subdividing large deltas for stability.
    pub fn advance(&mut self, dt: Duration) {
        if self.settled {
            return;
        }
        let total = dt.as_secs_f64();
        if total <= 0.0 {
            return;
        }

        let mut remaining = total;
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }

        if (self.position - self.target).abs() < self.rest_threshold
            && self.velocity.abs() < self.velocity_threshold
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }
}

impl Animate for Spring {
    fn tick(&mut self, dt: Duration) {
        self.advance(dt);
    }

    fn is_complete(&self) -> bool {
        self.settled
    }

    /// The position clamped to [0.0, 1.0]. For full-range style values use
    /// [`position()`](Spring::position).
    fn value(&self) -> f32 {
        (self.position as f32).clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.position = self.initial;
        self.velocity = 0.0;
        self.settled = false;
    }
}
