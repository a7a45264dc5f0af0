#![forbid(unsafe_code)]

//! Piecewise-linear progress-to-property mapping.
//!
//! A [`Mapping`] is an ordered table of `(breakpoint, output)` stops.
//! Sampling a progress value interpolates linearly between the bracketing
//! stops and clamps to the endpoint outputs outside the breakpoint range.
//!
//! # Invariants
//!
//! 1. Breakpoints are strictly increasing and there are at least two
//!    stops; violations are rejected at construction, never at sample
//!    time.
//! 2. `sample` is a pure function: identical inputs produce bit-identical
//!    outputs.
//! 3. The sampled value always lies within `[min(outputs), max(outputs)]`.

use thiserror::Error;

/// Construction-time contract violations for [`Mapping`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Fewer than two stops were supplied.
    #[error("mapping needs at least two stops, got {found}")]
    TooFewStops {
        /// Number of stops supplied.
        found: usize,
    },
    /// Breakpoint and output slices differ in length.
    #[error("breakpoint/output length mismatch: {breakpoints} vs {outputs}")]
    LengthMismatch {
        /// Number of breakpoints supplied.
        breakpoints: usize,
        /// Number of outputs supplied.
        outputs: usize,
    },
    /// A breakpoint is not strictly greater than its predecessor.
    #[error("breakpoints must be strictly increasing (violated at index {index})")]
    NonIncreasing {
        /// Index of the offending breakpoint.
        index: usize,
    },
    /// A breakpoint or output is NaN or infinite.
    #[error("non-finite value at stop {index}")]
    NonFinite {
        /// Index of the offending stop.
        index: usize,
    },
}

/// An ordered breakpoint→output table defining a piecewise-linear function
/// of progress.
///
/// # Example
///
/// ```
/// use skroll_core::mapping::Mapping;
///
/// // rotate_x: flat-on at the center of the window, tipped at the edges.
/// let rotate = Mapping::new(&[0.0, 0.5, 1.0], &[15.0, 0.0, -15.0]).unwrap();
/// assert_eq!(rotate.sample(0.75), -7.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    stops: Vec<(f64, f64)>,
}

impl Mapping {
    /// Build a mapping from parallel breakpoint and output slices.
    ///
    /// # Errors
    ///
    /// Returns a [`MappingError`] if the slices differ in length, fewer
    /// than two stops are given, any value is non-finite, or breakpoints
    /// are not strictly increasing.
    pub fn new(breakpoints: &[f64], outputs: &[f64]) -> Result<Self, MappingError> {
        if breakpoints.len() != outputs.len() {
            return Err(MappingError::LengthMismatch {
                breakpoints: breakpoints.len(),
                outputs: outputs.len(),
            });
        }
        if breakpoints.len() < 2 {
            return Err(MappingError::TooFewStops {
                found: breakpoints.len(),
            });
        }
        for (i, (b, v)) in breakpoints.iter().zip(outputs).enumerate() {
            if !b.is_finite() || !v.is_finite() {
                return Err(MappingError::NonFinite { index: i });
            }
            if i > 0 && *b <= breakpoints[i - 1] {
                return Err(MappingError::NonIncreasing { index: i });
            }
        }
        Ok(Self {
            stops: breakpoints.iter().copied().zip(outputs.iter().copied()).collect(),
        })
    }

    /// Two-stop mapping over the full [0, 1] domain.
    ///
    /// Shorthand for the common "interpolate from A to B across the whole
    /// window" case. The breakpoints are known-good; the outputs still go
    /// through the same construction-time contract as [`Mapping::new`].
    ///
    /// # Panics
    ///
    /// Panics if either output is NaN or infinite.
    #[must_use]
    pub fn over_unit(from: f64, to: f64) -> Self {
        assert!(
            from.is_finite() && to.is_finite(),
            "over_unit outputs must be finite, got ({from}, {to})"
        );
        Self {
            stops: vec![(0.0, from), (1.0, to)],
        }
    }

    /// Number of stops in the table.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false: a valid mapping has at least two stops.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Smallest output in the table.
    #[must_use]
    pub fn min_output(&self) -> f64 {
        self.stops.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min)
    }

    /// Largest output in the table.
    #[must_use]
    pub fn max_output(&self) -> f64 {
        self.stops
            .iter()
            .map(|&(_, v)| v)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Sample the mapping at `progress`.
    ///
    /// Values at or before the first breakpoint return the first output;
    /// at or after the last breakpoint, the last output. A NaN progress
    /// clamps to the first output (the tracker's boundary default).
    #[must_use]
    pub fn sample(&self, progress: f64) -> f64 {
        // Valid mappings always have a first and last stop.
        let (first_b, first_v) = self.stops[0];
        let (last_b, last_v) = self.stops[self.stops.len() - 1];

        if progress.is_nan() || progress <= first_b {
            return first_v;
        }
        if progress >= last_b {
            return last_v;
        }

        // Index of the first stop strictly past `progress`; the guards
        // above ensure 1 <= idx <= len-1.
        let idx = self.stops.partition_point(|&(b, _)| b <= progress);
        let (b0, v0) = self.stops[idx - 1];
        let (b1, v1) = self.stops[idx];
        v0 + (v1 - v0) * (progress - b0) / (b1 - b0)
    }
}
