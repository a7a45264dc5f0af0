#![forbid(unsafe_code)]

//! Property tracks: the wiring from progress to one style property.
//!
//! A [`Track`] pairs a [`StyleProperty`] with the [`Mapping`] that drives
//! it and, optionally, the spring parameters that smooth it. Tracks are
//! plain data — fixed at card construction, never mutated — so preset
//! tables can build them and the runtime can instantiate live springs
//! from them per card.

use crate::mapping::Mapping;
use crate::spring::SpringParams;

/// A visual property a mapping can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// Rotation around the horizontal axis, degrees.
    RotateX,
    /// Rotation around the vertical axis, degrees.
    RotateY,
    /// In-plane rotation, degrees.
    Rotate,
    /// Unitless scale factor (1.0 = natural size).
    Scale,
    /// Opacity in [0, 1].
    Opacity,
    /// Horizontal translation, pixels.
    TranslateX,
    /// Vertical translation, pixels.
    TranslateY,
}

/// One property binding: mapping plus optional smoothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// The property this track writes.
    pub property: StyleProperty,
    /// Progress → value table.
    pub mapping: Mapping,
    /// Spring parameters, or `None` for direct (unsmoothed) application.
    pub smoothing: Option<SpringParams>,
}

impl Track {
    /// A direct track: mapping output is applied as-is.
    #[must_use]
    pub fn direct(property: StyleProperty, mapping: Mapping) -> Self {
        Self {
            property,
            mapping,
            smoothing: None,
        }
    }

    /// A smoothed track: mapping output becomes the spring target.
    #[must_use]
    pub fn smoothed(property: StyleProperty, mapping: Mapping, params: SpringParams) -> Self {
        Self {
            property,
            mapping,
            smoothing: Some(params),
        }
    }
}
