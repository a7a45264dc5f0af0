#![cfg_attr(not(test), forbid(unsafe_code))]

//! Runtime layer for scroll-driven style pipelines.
//!
//! [`skroll_core`] is pure math: windows, mappings, springs. This crate
//! adds the stateful plumbing around it:
//!
//! - [`ScrollState`]: the single-writer viewport snapshot with
//!   subscription-based change notification.
//! - [`Card`]: one tracked element, from measured geometry to evaluated
//!   style.
//! - [`Stage`]: the frame loop coordinator fanning one snapshot out to
//!   every mounted card and pushing styles through a [`RenderSurface`].
//! - [`Catalog`]: serde content records driving the card sections.
//!
//! Everything here is single-threaded by design; handles are `Rc`-based
//! and meant to live on the host's UI thread.

pub mod card;
pub mod content;
pub mod scroll_state;
pub mod stage;
pub mod surface;

pub use card::Card;
pub use content::{Catalog, CatalogError, FaqEntry, WorkItem};
pub use scroll_state::{ScrollState, ScrollSubscription};
pub use stage::{FrameStats, Stage};
pub use surface::{CardStyle, NullSurface, RenderSurface};
