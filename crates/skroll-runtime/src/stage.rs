#![forbid(unsafe_code)]

//! Frame orchestration: one scroll snapshot in, all card styles out.
//!
//! # Design
//!
//! A [`Stage`] owns the [`RenderSurface`], a [`ScrollState`] handle, and
//! the mounted [`Card`]s. Scroll events do not evaluate anything; each
//! mounted card's subscription only raises a shared dirty flag, and the
//! host drives evaluation by calling [`Stage::frame`] from its tick loop.
//! Within one frame every card sees the same viewport snapshot, read
//! once at the top.
//!
//! # Invariants
//!
//! 1. Mounting subscribes exactly one observer per card; unmounting (or
//!    dropping the stage) releases it. `ScrollState::subscriber_count`
//!    returns to its prior value after any mount/unmount sequence.
//! 2. All cards in a frame are evaluated against the same snapshot, even
//!    if the writer updates the state mid-frame.
//! 3. Culling (when enabled) skips work only for cards whose window is
//!    outside the snapshot by more than the margin; their last style
//!    stands and their progress is not recomputed.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use skroll_core::Viewport;
use tracing::{debug, trace_span};
use web_time::Instant;

use crate::card::Card;
use crate::scroll_state::{ScrollState, ScrollSubscription};
use crate::surface::RenderSurface;

struct Mounted {
    card: Card,
    _subscription: ScrollSubscription,
}

/// Per-frame summary, mostly for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Cards whose tracks were evaluated this frame.
    pub evaluated: usize,
    /// Cards skipped by the cull margin.
    pub culled: usize,
}

/// The frame-loop coordinator for a set of tracked elements.
pub struct Stage<S: RenderSurface> {
    surface: S,
    scroll: ScrollState,
    mounted: Vec<Mounted>,
    dirty: Rc<Cell<bool>>,
    /// Extra scroll distance, in pixels, beyond a card's window within
    /// which it is still evaluated. `None` disables culling.
    cull_margin: Option<f64>,
}

impl<S: RenderSurface> Stage<S> {
    /// Create a stage over a surface and a scroll state handle.
    #[must_use]
    pub fn new(surface: S, scroll: ScrollState) -> Self {
        Self {
            surface,
            scroll,
            mounted: Vec::new(),
            dirty: Rc::new(Cell::new(true)),
            cull_margin: None,
        }
    }

    /// Enable culling: cards whose window is further than `margin` pixels
    /// from the current scroll offset are skipped. Off by default.
    #[must_use]
    pub fn with_cull_margin(mut self, margin: f64) -> Self {
        self.cull_margin = Some(margin.max(0.0));
        self
    }

    /// The scroll state this stage observes.
    #[must_use]
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Borrow the surface, e.g. to inspect a recording test double.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Number of mounted cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.mounted.len()
    }

    /// Whether a scroll change has arrived since the last frame. Springs
    /// still settling also keep the stage hot.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.dirty.get() || self.mounted.iter().any(|m| !m.card.is_settled())
    }

    /// Mount a card: measure it through the surface and subscribe it to
    /// scroll changes. The subscription lives exactly as long as the
    /// mount.
    pub fn mount(&mut self, mut card: Card) {
        if let Some(rect) = self.surface.measure(card.key()) {
            card.measure(rect);
        } else {
            debug!(key = card.key(), "mounted card without a measurement");
        }
        let dirty = Rc::clone(&self.dirty);
        let subscription = self.scroll.subscribe(move |_| dirty.set(true));
        self.mounted.push(Mounted {
            card,
            _subscription: subscription,
        });
        self.dirty.set(true);
    }

    /// Unmount the card with the given key, dropping its subscription.
    /// Returns the card, or `None` if no card has that key.
    pub fn unmount(&mut self, key: &str) -> Option<Card> {
        let index = self.mounted.iter().position(|m| m.card.key() == key)?;
        Some(self.mounted.remove(index).card)
    }

    /// Remeasure every mounted card through the surface. Call after
    /// layout-affecting changes (resize, content growth).
    pub fn remeasure(&mut self) {
        for mounted in &mut self.mounted {
            if let Some(rect) = self.surface.measure(mounted.card.key()) {
                mounted.card.measure(rect);
            }
        }
        self.dirty.set(true);
    }

    /// Evaluate one frame: read a single viewport snapshot, evaluate every
    /// (non-culled) card against it, and push the styles to the surface.
    pub fn frame(&mut self, dt: Duration) -> FrameStats {
        let viewport: Viewport = self.scroll.get();
        self.dirty.set(false);

        let start = Instant::now();
        let span = trace_span!(
            "stage.frame",
            scroll_y = viewport.scroll_y,
            cards = self.mounted.len()
        );
        let _entered = span.enter();

        let mut stats = FrameStats::default();
        for mounted in &mut self.mounted {
            if let Some(margin) = self.cull_margin
                && !mounted.card.is_within(viewport, margin)
                && mounted.card.is_settled()
            {
                stats.culled += 1;
                continue;
            }
            let style = mounted.card.evaluate(viewport, dt);
            self.surface.apply(mounted.card.key(), &style);
            stats.evaluated += 1;
        }

        debug!(
            evaluated = stats.evaluated,
            culled = stats.culled,
            duration_us = start.elapsed().as_micros() as u64,
            "frame"
        );
        stats
    }

    /// Progress of the card with the given key, if mounted.
    #[must_use]
    pub fn progress(&self, key: &str) -> Option<f64> {
        self.mounted
            .iter()
            .find(|m| m.card.key() == key)
            .map(|m| m.card.progress())
    }
}

impl<S: RenderSurface> std::fmt::Debug for Stage<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("cards", &self.mounted.len())
            .field("cull_margin", &self.cull_margin)
            .field("dirty", &self.dirty.get())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::Stage;
    use crate::card::Card;
    use crate::scroll_state::ScrollState;
    use crate::surface::{CardStyle, RenderSurface};
    use skroll_core::{DocRect, Mapping, StyleProperty, Track, Viewport};
    use std::collections::HashMap;
    use std::time::Duration;

    const MS_16: Duration = Duration::from_millis(16);

    /// Surface with fixed geometry that records every applied style.
    #[derive(Default)]
    struct FixtureSurface {
        rects: HashMap<String, DocRect>,
        applied: Vec<(String, CardStyle)>,
    }

    impl FixtureSurface {
        fn with_rect(mut self, key: &str, rect: DocRect) -> Self {
            self.rects.insert(key.to_string(), rect);
            self
        }
    }

    impl RenderSurface for FixtureSurface {
        fn measure(&self, key: &str) -> Option<DocRect> {
            self.rects.get(key).copied()
        }

        fn apply(&mut self, key: &str, style: &CardStyle) {
            self.applied.push((key.to_string(), *style));
        }
    }

    fn opacity_card(key: &str) -> Card {
        let mapping = Mapping::new(&[0.0, 0.2, 0.8, 1.0], &[0.5, 1.0, 1.0, 0.5]).unwrap();
        Card::new(key, vec![Track::direct(StyleProperty::Opacity, mapping)])
    }

    // Card window with an 800px viewport: entry 1200, exit 2600.
    fn rect_a() -> DocRect {
        DocRect::new(0.0, 2000.0, 1000.0, 600.0)
    }

    #[test]
    fn frame_applies_styles_through_surface() {
        let surface = FixtureSurface::default().with_rect("a", rect_a());
        let scroll = ScrollState::new(Viewport::new(1900.0, 800.0));
        let mut stage = Stage::new(surface, scroll);
        stage.mount(opacity_card("a"));

        let stats = stage.frame(MS_16);
        assert_eq!(stats.evaluated, 1);

        let (key, style) = &stage.surface().applied[0];
        assert_eq!(key, "a");
        // Mid-window sits on the opacity plateau.
        assert_eq!(style.opacity, 1.0);
    }

    #[test]
    fn mount_unmount_balances_subscriptions() {
        let scroll = ScrollState::new(Viewport::new(0.0, 800.0));
        let mut stage = Stage::new(FixtureSurface::default(), scroll.clone());
        assert_eq!(scroll.subscriber_count(), 0);

        stage.mount(opacity_card("a"));
        stage.mount(opacity_card("b"));
        assert_eq!(scroll.subscriber_count(), 2);

        assert!(stage.unmount("a").is_some());
        assert_eq!(scroll.subscriber_count(), 1);
        assert!(stage.unmount("b").is_some());
        assert_eq!(scroll.subscriber_count(), 0);
        assert!(stage.unmount("missing").is_none());
    }

    #[test]
    fn dropping_stage_releases_all_subscriptions() {
        let scroll = ScrollState::new(Viewport::new(0.0, 800.0));
        {
            let mut stage = Stage::new(FixtureSurface::default(), scroll.clone());
            stage.mount(opacity_card("a"));
            stage.mount(opacity_card("b"));
            assert_eq!(scroll.subscriber_count(), 2);
        }
        assert_eq!(scroll.subscriber_count(), 0);
    }

    #[test]
    fn needs_frame_follows_dirty_flag() {
        let surface = FixtureSurface::default().with_rect("a", rect_a());
        let scroll = ScrollState::new(Viewport::new(0.0, 800.0));
        let mut stage = Stage::new(surface, scroll.clone());
        stage.mount(opacity_card("a"));

        assert!(stage.needs_frame());
        stage.frame(MS_16);
        assert!(!stage.needs_frame());

        scroll.set_scroll_y(500.0);
        assert!(stage.needs_frame());
    }

    #[test]
    fn all_cards_see_one_snapshot() {
        // A subscriber that rewrites the scroll state mid-notification
        // would panic on the RefCell; instead, verify two cards at
        // different offsets are evaluated against the same scroll_y.
        let surface = FixtureSurface::default()
            .with_rect("a", rect_a())
            .with_rect("b", DocRect::new(0.0, 3000.0, 1000.0, 600.0));
        let scroll = ScrollState::new(Viewport::new(1900.0, 800.0));
        let mut stage = Stage::new(surface, scroll);

        let unit = |key: &str| {
            Card::new(
                key,
                vec![Track::direct(
                    StyleProperty::TranslateY,
                    Mapping::over_unit(0.0, 1400.0),
                )],
            )
        };
        stage.mount(unit("a"));
        stage.mount(unit("b"));
        stage.frame(MS_16);

        // a: (1900-1200)/1400 = 0.5; b: (1900-2200)/1400 clamps to 0.
        assert_eq!(stage.progress("a"), Some(0.5));
        assert_eq!(stage.progress("b"), Some(0.0));
    }

    #[test]
    fn cull_margin_skips_far_cards() {
        let surface = FixtureSurface::default()
            .with_rect("near", rect_a())
            .with_rect("far", DocRect::new(0.0, 50_000.0, 1000.0, 600.0));
        let scroll = ScrollState::new(Viewport::new(1900.0, 800.0));
        let mut stage = Stage::new(surface, scroll).with_cull_margin(500.0);
        stage.mount(opacity_card("near"));
        stage.mount(opacity_card("far"));

        let stats = stage.frame(MS_16);
        assert_eq!(stats.evaluated, 1);
        assert_eq!(stats.culled, 1);
        assert_eq!(stage.surface().applied.len(), 1);
        assert_eq!(stage.surface().applied[0].0, "near");
    }

    #[test]
    fn culling_off_by_default() {
        let surface = FixtureSurface::default()
            .with_rect("near", rect_a())
            .with_rect("far", DocRect::new(0.0, 50_000.0, 1000.0, 600.0));
        let scroll = ScrollState::new(Viewport::new(1900.0, 800.0));
        let mut stage = Stage::new(surface, scroll);
        stage.mount(opacity_card("near"));
        stage.mount(opacity_card("far"));

        let stats = stage.frame(MS_16);
        assert_eq!(stats.evaluated, 2);
        assert_eq!(stats.culled, 0);
    }

    #[test]
    fn remeasure_picks_up_new_geometry() {
        let surface = FixtureSurface::default().with_rect("a", rect_a());
        let scroll = ScrollState::new(Viewport::new(1900.0, 800.0));
        let mut stage = Stage::new(surface, scroll);
        stage.mount(opacity_card("a"));
        stage.frame(MS_16);
        assert_eq!(stage.progress("a"), Some(0.5));

        stage.surface.rects.insert(
            "a".to_string(),
            DocRect::new(0.0, 4000.0, 1000.0, 600.0),
        );
        stage.remeasure();
        stage.frame(MS_16);
        assert_eq!(stage.progress("a"), Some(0.0));
    }

    #[test]
    fn card_mounted_without_measurement_evaluates_at_zero() {
        let scroll = ScrollState::new(Viewport::new(5000.0, 800.0));
        let mut stage = Stage::new(FixtureSurface::default(), scroll);
        stage.mount(opacity_card("ghost"));
        stage.frame(MS_16);
        assert_eq!(stage.progress("ghost"), Some(0.0));
    }
}
