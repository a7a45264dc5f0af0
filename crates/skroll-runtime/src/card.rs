#![forbid(unsafe_code)]

//! A tracked element: geometry, window, tracks, and the evaluated style.
//!
//! # Design
//!
//! A [`Card`] owns everything needed to evaluate one element per frame:
//! the last measured [`DocRect`], the declarative [`OffsetWindow`], and
//! one [`BoundTrack`] per driven property (a [`Track`] with its live
//! spring instantiated, when the track is smoothed).
//!
//! The scroll window is resolved from the rect and viewport height on
//! every evaluation. That keeps the window consistent with viewport
//! resizes without an explicit invalidation channel; resolution is two
//! multiplies and a subtraction.
//!
//! # Invariants
//!
//! 1. A card whose window cannot be resolved evaluates at progress 0.
//! 2. Direct tracks show the mapping output exactly; smoothed tracks show
//!    the spring position, which converges to the mapping output while
//!    the target holds still.
//! 3. `evaluate` is pure over (rect, viewport, dt, spring state); the same
//!    inputs produce the same style.

use std::time::Duration;

use skroll_core::{DocRect, OffsetWindow, Spring, StyleProperty, Track, Viewport};

use crate::surface::CardStyle;

/// A [`Track`] with its live spring, if the track is smoothed.
#[derive(Debug, Clone)]
struct BoundTrack {
    property: StyleProperty,
    mapping: skroll_core::Mapping,
    spring: Option<Spring>,
}

impl BoundTrack {
    fn bind(track: Track) -> Self {
        let spring = track
            .smoothing
            .map(|params| Spring::follow(track.mapping.sample(0.0), params));
        Self {
            property: track.property,
            mapping: track.mapping,
            spring,
        }
    }

    /// Sample the mapping at `progress` and produce the rendered value,
    /// advancing the spring when present.
    fn evaluate(&mut self, progress: f64, dt: Duration) -> f64 {
        let raw = self.mapping.sample(progress);
        match &mut self.spring {
            Some(spring) => {
                spring.retarget(raw);
                spring.advance(dt);
                spring.position()
            }
            None => raw,
        }
    }

    fn is_settled(&self) -> bool {
        self.spring.as_ref().is_none_or(Spring::is_settled)
    }
}

/// One scroll-tracked element.
#[derive(Debug, Clone)]
pub struct Card {
    key: String,
    /// `None` until the host supplies a measurement.
    rect: Option<DocRect>,
    offsets: OffsetWindow,
    tracks: Vec<BoundTrack>,
    progress: f64,
    style: CardStyle,
}

impl Card {
    /// Create a card with the full pass-through window.
    #[must_use]
    pub fn new(key: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self::with_offsets(key, OffsetWindow::enter_to_leave(), tracks)
    }

    /// Create a card with an explicit offset window.
    #[must_use]
    pub fn with_offsets(
        key: impl Into<String>,
        offsets: OffsetWindow,
        tracks: Vec<Track>,
    ) -> Self {
        Self {
            key: key.into(),
            rect: None,
            offsets,
            tracks: tracks.into_iter().map(BoundTrack::bind).collect(),
            progress: 0.0,
            style: CardStyle::default(),
        }
    }

    /// Stable identifier the host uses to locate and style this element.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Last measured rectangle, or `None` before the first measurement.
    #[inline]
    #[must_use]
    pub fn rect(&self) -> Option<DocRect> {
        self.rect
    }

    /// Progress from the most recent evaluation.
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Style from the most recent evaluation.
    #[inline]
    #[must_use]
    pub fn style(&self) -> CardStyle {
        self.style
    }

    /// The declared offset window.
    #[inline]
    #[must_use]
    pub fn offsets(&self) -> OffsetWindow {
        self.offsets
    }

    /// Whether every smoothed track has settled at its target. A card with
    /// only direct tracks is always settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.tracks.iter().all(BoundTrack::is_settled)
    }

    /// Record a fresh measurement of the element's document rectangle.
    pub fn measure(&mut self, rect: DocRect) {
        self.rect = Some(rect);
    }

    fn window(&self, viewport_height: f64) -> Option<skroll_core::ScrollWindow> {
        self.rect
            .as_ref()
            .and_then(|rect| self.offsets.resolve(rect, viewport_height))
    }

    /// Whether the scroll offset falls inside this card's resolved window
    /// widened by `margin`. Unmeasured cards and unresolvable windows
    /// count as outside.
    #[must_use]
    pub fn is_within(&self, viewport: Viewport, margin: f64) -> bool {
        self.window(viewport.height)
            .is_some_and(|w| w.is_within(viewport.scroll_y, margin))
    }

    /// Evaluate all tracks at the given viewport snapshot, advancing
    /// springs by `dt`. Returns the computed style.
    pub fn evaluate(&mut self, viewport: Viewport, dt: Duration) -> CardStyle {
        self.progress = self
            .window(viewport.height)
            .map_or(0.0, |window| window.progress(viewport.scroll_y));

        for track in &mut self.tracks {
            let value = track.evaluate(self.progress, dt);
            self.style.set(track.property, value);
        }
        self.style
    }
}
