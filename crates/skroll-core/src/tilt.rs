#![forbid(unsafe_code)]

//! Pointer-tilt: hover-driven card rotation.
//!
//! The non-scroll sibling of the scroll tracker. Pointer position inside
//! the card is normalized to `px, py ∈ [-0.5, 0.5]` relative to the card
//! center, mapped linearly to rotation degrees, and smoothed through the
//! same spring stage as scroll-driven properties:
//!
//! - `rotate_y = px * max_deg` (pointer right of center tips the card
//!   rightward around the vertical axis)
//! - `rotate_x = -py * max_deg` (pointer above center tips the top away)
//!
//! On pointer leave, the target rotation resets to (0, 0) and the springs
//! glide back. Worst-case failure is a static card, never an error.

use std::time::Duration;

use crate::geometry::DocRect;
use crate::spring::{Spring, SpringParams};

/// Tuning for a tilt card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    /// Rotation in degrees at the card's edge (`|px| = 0.5` maps to
    /// `max_deg / 2`).
    pub max_deg: f64,
    /// Spring parameters for both rotation axes.
    pub spring: SpringParams,
}

impl Default for TiltConfig {
    /// The source site's values: 12° scale with a 120/20 spring.
    fn default() -> Self {
        Self {
            max_deg: 12.0,
            spring: SpringParams::tilt(),
        }
    }
}

/// Smoothed rotation state for one hoverable card.
#[derive(Debug, Clone)]
pub struct PointerTilt {
    config: TiltConfig,
    rotate_x: Spring,
    rotate_y: Spring,
}

impl PointerTilt {
    /// Create a tilt at rest (no rotation).
    #[must_use]
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            rotate_x: Spring::follow(0.0, config.spring),
            rotate_y: Spring::follow(0.0, config.spring),
        }
    }

    /// Feed a normalized pointer position. Inputs are clamped to
    /// `[-0.5, 0.5]`; NaN is treated as center (degraded, not fatal).
    pub fn pointer_move(&mut self, px: f64, py: f64) {
        let px = if px.is_nan() { 0.0 } else { px.clamp(-0.5, 0.5) };
        let py = if py.is_nan() { 0.0 } else { py.clamp(-0.5, 0.5) };
        self.rotate_y.retarget(px * self.config.max_deg);
        self.rotate_x.retarget(-py * self.config.max_deg);
    }

    /// Feed a document-space pointer position against the card's measured
    /// rectangle. An unmeasurable or zero-size rectangle resets the
    /// target to center.
    pub fn pointer_move_in(&mut self, rect: &DocRect, x: f64, y: f64) {
        match rect.normalize_point(x, y) {
            Some((px, py)) => self.pointer_move(px, py),
            None => self.pointer_leave(),
        }
    }

    /// Pointer left the card: glide back to (0, 0).
    pub fn pointer_leave(&mut self) {
        self.rotate_x.retarget(0.0);
        self.rotate_y.retarget(0.0);
    }

    /// Advance both springs by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.rotate_x.advance(dt);
        self.rotate_y.advance(dt);
    }

    /// Current smoothed rotation `(rotate_x, rotate_y)` in degrees.
    #[must_use]
    pub fn rotation(&self) -> (f64, f64) {
        (self.rotate_x.position(), self.rotate_y.position())
    }

    /// Rotation the springs are converging toward.
    #[must_use]
    pub fn target_rotation(&self) -> (f64, f64) {
        (self.rotate_x.target(), self.rotate_y.target())
    }

    /// Whether both axes have settled; a settled tilt needs no further
    /// frame callbacks.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.rotate_x.is_settled() && self.rotate_y.is_settled()
    }
}
