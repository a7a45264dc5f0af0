#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: scroll-progress math, property mappings, and smoothing.
//!
//! # Role in skroll
//! `skroll-core` is the pure layer. It turns a measured rectangle plus a
//! scroll snapshot into normalized progress, progress into style values
//! through piecewise-linear mappings, and raw values into smoothed ones
//! through spring filters. Nothing here owns state shared across cards or
//! talks to a host surface.
//!
//! # Primary responsibilities
//! - **Geometry**: document-space rectangles and viewport snapshots.
//! - **Progress**: offset windows resolved to scroll thresholds.
//! - **Mapping**: validated breakpoint→output interpolation tables.
//! - **Smoothing**: damped-spring target followers and timed fades.
//! - **Presets**: the parameter sets observed in the source site.
//!
//! # How it fits in the system
//! The runtime (`skroll-runtime`) owns the subscribable scroll state and
//! the card arena; each frame it feeds snapshots through these types and
//! writes the results to the host's render surface.

pub mod animate;
pub mod fade;
pub mod geometry;
pub mod mapping;
pub mod presets;
pub mod progress;
pub mod spring;
pub mod tilt;
pub mod track;

pub use animate::Animate;
pub use geometry::{DocRect, Edge, Viewport};
pub use mapping::{Mapping, MappingError};
pub use progress::{EdgePair, OffsetWindow, ScrollWindow};
pub use spring::{Spring, SpringParams};
pub use tilt::{PointerTilt, TiltConfig};
pub use track::{StyleProperty, Track};
