#![forbid(unsafe_code)]

//! Geometric primitives in document space.
//!
//! All coordinates are f64 pixels with the origin at the top of the
//! document. `y` grows downward, so "start" means the top edge and "end"
//! means the bottom edge for vertical tracking.

/// A named edge of a rectangle or viewport along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Top edge.
    Start,
    /// Vertical midpoint.
    Center,
    /// Bottom edge.
    End,
}

impl Edge {
    /// Fractional offset of this edge within an extent: 0.0, 0.5, or 1.0.
    #[inline]
    #[must_use]
    pub const fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
        }
    }
}

/// An element's bounding rectangle in document coordinates.
///
/// Captured on mount and revalidated on resize or content change. The
/// tracker only needs the vertical extent; `left`/`width` exist for the
/// pointer-tilt variant, which normalizes pointer positions against the
/// full box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocRect {
    /// Left edge in document pixels.
    pub left: f64,
    /// Top edge in document pixels.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl DocRect {
    /// Create a rectangle from its top-left corner and size.
    #[inline]
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bottom edge in document pixels.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge in document pixels.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Document y-coordinate of the given edge.
    #[inline]
    #[must_use]
    pub fn edge_y(&self, edge: Edge) -> f64 {
        self.top + self.height * edge.fraction()
    }

    /// Whether the rectangle can be used for tracking: finite and with
    /// non-negative size. A zero-height rectangle is still measurable
    /// (its edges coincide); NaN or infinite fields are not.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }

    /// Normalize a document-space point to `[-0.5, 0.5]` relative to the
    /// rectangle's center, clamped to the box.
    ///
    /// Returns `None` for a rectangle with zero width or height, which has
    /// no meaningful interior.
    #[must_use]
    pub fn normalize_point(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !self.is_measurable() || self.width == 0.0 || self.height == 0.0 {
            return None;
        }
        let px = ((x - self.left) / self.width - 0.5).clamp(-0.5, 0.5);
        let py = ((y - self.top) / self.height - 0.5).clamp(-0.5, 0.5);
        Some((px, py))
    }
}

/// The scroll/viewport snapshot all trackers read from within one frame.
///
/// Single writer (the host's scroll/resize listener), many readers. A
/// `Viewport` is plain data; the runtime wraps it in a subscribable value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Current vertical scroll offset in document pixels.
    pub scroll_y: f64,
    /// Visible viewport height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a snapshot from scroll offset and viewport height.
    #[inline]
    #[must_use]
    pub const fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }

    /// Document y-coordinate of the given viewport edge.
    #[inline]
    #[must_use]
    pub fn edge_y(&self, edge: Edge) -> f64 {
        self.scroll_y + self.height * edge.fraction()
    }
}
