#![forbid(unsafe_code)]

//! Host boundary: measurement in, computed styles out.
//!
//! The pipeline never touches a real layout engine or render tree; it
//! talks to a [`RenderSurface`] owned by the host. Tests substitute a
//! recording implementation, headless hosts use [`NullSurface`].

use serde::{Deserialize, Serialize};
use skroll_core::{DocRect, StyleProperty};

/// Visual properties computed for one element per frame.
///
/// Identity is the default: no rotation, no translation, full opacity,
/// unit scale. Rotations are in degrees, translations in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardStyle {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub rotate: f64,
    pub scale: f64,
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            rotate: 0.0,
            scale: 1.0,
            opacity: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

impl CardStyle {
    /// Write one property by name. Used by trackers fanning sampled
    /// outputs into the style record.
    pub fn set(&mut self, property: StyleProperty, value: f64) {
        match property {
            StyleProperty::RotateX => self.rotate_x = value,
            StyleProperty::RotateY => self.rotate_y = value,
            StyleProperty::Rotate => self.rotate = value,
            StyleProperty::Scale => self.scale = value,
            StyleProperty::Opacity => self.opacity = value,
            StyleProperty::TranslateX => self.translate_x = value,
            StyleProperty::TranslateY => self.translate_y = value,
        }
    }

    /// Read one property by name.
    #[must_use]
    pub fn get(&self, property: StyleProperty) -> f64 {
        match property {
            StyleProperty::RotateX => self.rotate_x,
            StyleProperty::RotateY => self.rotate_y,
            StyleProperty::Rotate => self.rotate,
            StyleProperty::Scale => self.scale,
            StyleProperty::Opacity => self.opacity,
            StyleProperty::TranslateX => self.translate_x,
            StyleProperty::TranslateY => self.translate_y,
        }
    }
}

/// What the pipeline needs from the host: element geometry on demand,
/// and a sink for the styles it computes.
pub trait RenderSurface {
    /// Document-space rectangle for the element `key`, or `None` when
    /// the element is unmounted or not yet laid out.
    fn measure(&self, key: &str) -> Option<DocRect>;

    /// Push the computed style for element `key`.
    fn apply(&mut self, key: &str, style: &CardStyle);
}

/// Surface that measures nothing and discards styles.
///
/// Cards mounted against it stay at progress zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn measure(&self, _key: &str) -> Option<DocRect> {
        None
    }

    fn apply(&mut self, _key: &str, _style: &CardStyle) {}
}
