#![forbid(unsafe_code)]

//! Card parameter sets observed across the source site's page variants.
//!
//! The site duplicated the same scroll effect across many near-identical
//! pages, differing only in breakpoint numbers. These constructors
//! generalize every observed variant into the one parametrized mechanism;
//! none of them is "the" canonical set.

use crate::mapping::Mapping;
use crate::tilt::TiltConfig;
use crate::track::{StyleProperty, Track};

/// Build a mapping from static tables known to be valid.
fn table(breakpoints: &[f64], outputs: &[f64]) -> Mapping {
    Mapping::new(breakpoints, outputs).expect("preset tables are strictly increasing")
}

/// The sticky parallax card: tips forward entering, flat at center, tips
/// back leaving, with a scale/opacity dip at the edges and a full-height
/// parallax drift. `index` alternates the horizontal drift direction.
///
/// Tables: rotate_x `[0,0.5,1] → [15,0,-15]`, scale `[0,0.5,1] → [0.8,1,0.8]`,
/// opacity `[0,0.2,0.8,1] → [0.5,1,1,0.5]`, translate_y `[0,1] → [100,-100]`,
/// translate_x `[0,0.5,1] → [∓50,0,∓50]`.
#[must_use]
pub fn parallax_card(index: usize) -> Vec<Track> {
    let x_edge = if index % 2 == 0 { -50.0 } else { 50.0 };
    vec![
        Track::direct(
            StyleProperty::RotateX,
            table(&[0.0, 0.5, 1.0], &[15.0, 0.0, -15.0]),
        ),
        Track::direct(
            StyleProperty::Scale,
            table(&[0.0, 0.5, 1.0], &[0.8, 1.0, 0.8]),
        ),
        Track::direct(
            StyleProperty::Opacity,
            table(&[0.0, 0.2, 0.8, 1.0], &[0.5, 1.0, 1.0, 0.5]),
        ),
        Track::direct(StyleProperty::TranslateY, Mapping::over_unit(100.0, -100.0)),
        Track::direct(
            StyleProperty::TranslateX,
            table(&[0.0, 0.5, 1.0], &[x_edge, 0.0, x_edge]),
        ),
    ]
}

/// The carousel card variant: index-staggered vertical drift, a gentler
/// scale/opacity dip, and an alternating settle-to-flat rotation.
///
/// Tables: translate_y `[0,1] → [0,-50·index]`, scale `[0,0.5,1] → [0.9,1,0.9]`,
/// opacity `[0,0.2,0.8,1] → [0.6,1,1,0.6]`, rotate `[0,1] → [±5,0]`.
#[must_use]
pub fn carousel_card(index: usize) -> Vec<Track> {
    let start_deg = if index % 2 == 0 { -5.0 } else { 5.0 };
    vec![
        Track::direct(
            StyleProperty::TranslateY,
            Mapping::over_unit(0.0, -50.0 * index as f64),
        ),
        Track::direct(
            StyleProperty::Scale,
            table(&[0.0, 0.5, 1.0], &[0.9, 1.0, 0.9]),
        ),
        Track::direct(
            StyleProperty::Opacity,
            table(&[0.0, 0.2, 0.8, 1.0], &[0.6, 1.0, 1.0, 0.6]),
        ),
        Track::direct(StyleProperty::Rotate, Mapping::over_unit(start_deg, 0.0)),
    ]
}

/// The hover-tilt card: 12° scale, 120/20 spring.
#[must_use]
pub fn tilt_card() -> TiltConfig {
    TiltConfig::default()
}
