#![forbid(unsafe_code)]

//! The single-writer scroll/viewport value with change notification.
//!
//! # Design
//!
//! [`ScrollState`] wraps the current [`Viewport`] snapshot in shared,
//! reference-counted storage (`Rc<RefCell<..>>`). The host's scroll and
//! resize listeners are the only writer; every tracker is a reader. When
//! the snapshot changes, live subscribers are notified in registration
//! order with the new value.
//!
//! The state is an explicitly owned handle, never an ambient global:
//! whoever needs it gets a clone of the handle.
//!
//! # Invariants
//!
//! 1. `version` increments by exactly 1 on each value-changing write.
//! 2. `set` with an equal snapshot is a no-op (no notification, no bump).
//! 3. Subscribers are notified in registration order.
//! 4. Dropping a [`ScrollSubscription`] unsubscribes its callback; dead
//!    entries are pruned lazily and never counted as live.
//!
//! # Failure Modes
//!
//! - **Re-entrant write**: `notify` releases its borrow before invoking
//!   callbacks, so a subscriber calling `set` recurses rather than
//!   panicking. The equal-value no-op bounds any recursion that converges
//!   on a fixed point; a subscriber that always writes a fresh value will
//!   recurse without limit, which indicates a bug in the subscriber graph.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use skroll_core::Viewport;
use tracing::debug_span;
use web_time::Instant;

type CallbackRc = Rc<dyn Fn(Viewport)>;
type CallbackWeak = Weak<dyn Fn(Viewport)>;

struct Inner {
    viewport: Viewport,
    version: u64,
    /// Weak references; a dropped guard's entry fails to upgrade and is
    /// pruned on the next notify.
    subscribers: Vec<CallbackWeak>,
}

/// Shared handle to the process-wide scroll snapshot.
///
/// Cloning creates a new handle to the **same** state: clones see the
/// same value and share subscribers.
pub struct ScrollState {
    inner: Rc<RefCell<Inner>>,
}

impl Clone for ScrollState {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for ScrollState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ScrollState")
            .field("viewport", &inner.viewport)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl ScrollState {
    /// Create a state holding the given initial snapshot.
    #[must_use]
    pub fn new(initial: Viewport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                viewport: initial,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn get(&self) -> Viewport {
        self.inner.borrow().viewport
    }

    /// Replace the snapshot. Notifies subscribers only if it changed.
    pub fn set(&self, viewport: Viewport) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.viewport == viewport {
                return;
            }
            inner.viewport = viewport;
            inner.version += 1;
        }
        self.notify();
    }

    /// Update only the scroll offset, keeping the viewport height.
    pub fn set_scroll_y(&self, scroll_y: f64) {
        let height = self.get().height;
        self.set(Viewport::new(scroll_y, height));
    }

    /// Update only the viewport height, keeping the scroll offset.
    pub fn set_height(&self, height: f64) {
        let scroll_y = self.get().scroll_y;
        self.set(Viewport::new(scroll_y, height));
    }

    /// Current version. Increments on each value-changing write; useful
    /// for dirty-checking in frame loops.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Number of live subscribers (dropped guards are not counted).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    /// Register a callback invoked with the new snapshot on every change.
    ///
    /// Returns a guard; dropping it unsubscribes. Every registration has
    /// this matching teardown — a card that holds its guard for exactly
    /// its mounted lifetime cannot leak an observer on any detach path.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn(Viewport) + 'static) -> ScrollSubscription {
        let strong: CallbackRc = Rc::new(callback);
        self.inner.borrow_mut().subscribers.push(Rc::downgrade(&strong));
        ScrollSubscription { _guard: strong }
    }

    /// Notify live subscribers of the current value; prune dead entries.
    fn notify(&self) {
        // Collect live callbacks first so no borrow is held during calls.
        let (viewport, callbacks): (Viewport, Vec<CallbackRc>) = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            (
                inner.viewport,
                inner.subscribers.iter().filter_map(Weak::upgrade).collect(),
            )
        };

        if callbacks.is_empty() {
            return;
        }

        let start = Instant::now();
        let span = debug_span!(
            "scroll.delta",
            scroll_y = viewport.scroll_y,
            subscribers = callbacks.len(),
            duration_us = tracing::field::Empty
        );
        let _entered = span.enter();

        for cb in &callbacks {
            cb(viewport);
        }

        span.record("duration_us", start.elapsed().as_micros() as u64);
    }
}

/// RAII guard for a scroll subscriber.
///
/// Holds the only strong reference to the callback; dropping the guard
/// makes the state's weak entry unupgradeable, so the callback is never
/// invoked again and the entry is pruned on the next notification.
pub struct ScrollSubscription {
    _guard: CallbackRc,
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription").finish_non_exhaustive()
    }
}
