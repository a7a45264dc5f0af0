#![forbid(unsafe_code)]

//! Scroll windows and normalized progress.
//!
//! # Design
//!
//! An [`OffsetWindow`] describes *when* tracking starts and ends as a pair
//! of edge meetings: "tracking begins when this target edge reaches that
//! viewport edge". Resolving it against a measured [`DocRect`] and a
//! viewport height yields a [`ScrollWindow`] — two concrete scroll offsets
//! `entry_y < exit_y` — from which progress is a single division.
//!
//! # Invariants
//!
//! 1. Progress is clamped to [0.0, 1.0]; outside the window it holds the
//!    boundary value, it never becomes undefined.
//! 2. For a fixed window, progress is monotonic non-decreasing in the
//!    scroll offset.
//! 3. A window that cannot be resolved (unmeasurable target, degenerate
//!    span) produces no `ScrollWindow`; callers fall back to progress 0.
//!
//! # Failure Modes
//!
//! - Degenerate spans (`exit_y <= entry_y`) arise when the viewport is
//!   taller than the travel distance implied by the edge pair, or when the
//!   edge pair is inverted. These resolve to `None` rather than dividing
//!   by a non-positive span.

use crate::geometry::{DocRect, Edge};

/// One edge meeting: a target edge against a viewport edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgePair {
    /// Edge of the tracked element.
    pub target: Edge,
    /// Edge of the viewport it meets.
    pub viewport: Edge,
}

impl EdgePair {
    /// Scroll offset at which `target` edge of `rect` coincides with
    /// `viewport` edge of a viewport of the given height.
    #[must_use]
    pub fn resolve(&self, rect: &DocRect, viewport_height: f64) -> f64 {
        rect.edge_y(self.target) - viewport_height * self.viewport.fraction()
    }
}

/// When tracking starts and ends, as two edge meetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetWindow {
    /// Edge meeting at which progress leaves 0.
    pub enter: EdgePair,
    /// Edge meeting at which progress reaches 1.
    pub exit: EdgePair,
}

impl OffsetWindow {
    /// The full pass-through window: tracking starts when the target's top
    /// edge reaches the viewport's bottom edge (element enters from below)
    /// and ends when the target's bottom edge reaches the viewport's top
    /// edge (element leaves above).
    #[must_use]
    pub const fn enter_to_leave() -> Self {
        Self {
            enter: EdgePair {
                target: Edge::Start,
                viewport: Edge::End,
            },
            exit: EdgePair {
                target: Edge::End,
                viewport: Edge::Start,
            },
        }
    }

    /// Resolve against a measured rectangle and viewport height.
    ///
    /// Returns `None` if the target is unmeasurable or the resolved span
    /// is degenerate; callers treat that as progress 0, not as an error.
    #[must_use]
    pub fn resolve(&self, rect: &DocRect, viewport_height: f64) -> Option<ScrollWindow> {
        if !rect.is_measurable() || !viewport_height.is_finite() || viewport_height < 0.0 {
            tracing::debug!(?rect, viewport_height, "unmeasurable tracking target");
            return None;
        }
        let entry_y = self.enter.resolve(rect, viewport_height);
        let exit_y = self.exit.resolve(rect, viewport_height);
        ScrollWindow::new(entry_y, exit_y)
    }
}

impl Default for OffsetWindow {
    fn default() -> Self {
        Self::enter_to_leave()
    }
}

/// Resolved scroll thresholds for one tracked element.
///
/// Progress is `(scroll_y - entry_y) / (exit_y - entry_y)`, clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollWindow {
    entry_y: f64,
    exit_y: f64,
}

impl ScrollWindow {
    /// Create a window from explicit thresholds.
    ///
    /// Returns `None` for degenerate spans (`exit_y <= entry_y`) or
    /// non-finite inputs.
    #[must_use]
    pub fn new(entry_y: f64, exit_y: f64) -> Option<Self> {
        if !entry_y.is_finite() || !exit_y.is_finite() || exit_y <= entry_y {
            tracing::debug!(entry_y, exit_y, "degenerate scroll window");
            return None;
        }
        Some(Self { entry_y, exit_y })
    }

    /// Scroll offset at which progress leaves 0.
    #[inline]
    #[must_use]
    pub fn entry_y(&self) -> f64 {
        self.entry_y
    }

    /// Scroll offset at which progress reaches 1.
    #[inline]
    #[must_use]
    pub fn exit_y(&self) -> f64 {
        self.exit_y
    }

    /// Normalized progress at the given scroll offset, clamped to [0, 1].
    #[inline]
    #[must_use]
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let raw = (scroll_y - self.entry_y) / (self.exit_y - self.entry_y);
        raw.clamp(0.0, 1.0)
    }

    /// Whether the scroll offset is inside the window widened by `margin`
    /// on both sides. Used for optional recomputation culling; correctness
    /// never depends on it.
    #[inline]
    #[must_use]
    pub fn is_within(&self, scroll_y: f64, margin: f64) -> bool {
        scroll_y >= self.entry_y - margin && scroll_y <= self.exit_y + margin
    }
}
