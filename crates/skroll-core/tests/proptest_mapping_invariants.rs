//! Property-based tests for the progress → property pipeline.
//!
//! These cover the pipeline's stated guarantees:
//!
//! 1. **Range containment** — for any valid mapping and any progress, the
//!    sampled output lies within [min(outputs), max(outputs)].
//! 2. **Idempotence** — sampling is a pure function; identical inputs give
//!    bit-identical outputs.
//! 3. **Endpoint exactness** — sampling at a breakpoint returns exactly
//!    that stop's output.
//! 4. **Scroll monotonicity** — for a fixed window, progress never
//!    decreases as the scroll offset increases.
//! 5. **Clamping** — progress is 0 before the entry threshold and 1 past
//!    the exit threshold.

use proptest::prelude::*;
use skroll_core::mapping::Mapping;
use skroll_core::progress::ScrollWindow;

// ── Strategies ──────────────────────────────────────────────────────────

/// Strictly increasing breakpoints in [0, 1] plus matching finite outputs.
fn valid_mapping() -> impl Strategy<Value = Mapping> {
    (2usize..8)
        .prop_flat_map(|n| {
            (
                proptest::collection::vec(0.0f64..1.0, n),
                proptest::collection::vec(-1000.0f64..1000.0, n),
            )
        })
        .prop_filter_map("breakpoints must be strictly increasing", |(mut bps, outs)| {
            bps.sort_by(|a, b| a.partial_cmp(b).expect("finite breakpoints"));
            bps.dedup();
            if bps.len() < 2 {
                return None;
            }
            let outs = outs[..bps.len()].to_vec();
            Mapping::new(&bps, &outs).ok()
        })
}

fn window() -> impl Strategy<Value = ScrollWindow> {
    (-1.0e6f64..1.0e6, 1.0f64..1.0e5).prop_filter_map("valid window", |(entry, span)| {
        ScrollWindow::new(entry, entry + span)
    })
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sample_stays_within_output_range(m in valid_mapping(), p in -2.0f64..3.0) {
        let v = m.sample(p);
        prop_assert!(v >= m.min_output() - 1e-9);
        prop_assert!(v <= m.max_output() + 1e-9);
    }

    #[test]
    fn sample_is_idempotent(m in valid_mapping(), p in -2.0f64..3.0) {
        prop_assert_eq!(m.sample(p).to_bits(), m.sample(p).to_bits());
    }

    #[test]
    fn sample_is_exact_at_breakpoints(
        bps_outs in (2usize..6).prop_flat_map(|n| (
            proptest::collection::vec(0u32..10_000, n),
            proptest::collection::vec(-100.0f64..100.0, n),
        ))
    ) {
        let (raw_bps, outs) = bps_outs;
        let mut bps: Vec<f64> = raw_bps.iter().map(|&b| f64::from(b) / 10_000.0).collect();
        bps.sort_by(|a, b| a.partial_cmp(b).expect("finite breakpoints"));
        bps.dedup();
        prop_assume!(bps.len() >= 2);
        let outs = &outs[..bps.len()];

        let m = Mapping::new(&bps, outs).expect("constructed valid");
        for (b, v) in bps.iter().zip(outs) {
            prop_assert_eq!(m.sample(*b), *v);
        }
    }

    #[test]
    fn progress_is_monotonic_in_scroll(w in window(), y1 in -2.0e6f64..2.0e6, y2 in -2.0e6f64..2.0e6) {
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        prop_assert!(w.progress(lo) <= w.progress(hi));
    }

    #[test]
    fn progress_clamps_at_boundaries(w in window(), y in -2.0e6f64..2.0e6) {
        let p = w.progress(y);
        prop_assert!((0.0..=1.0).contains(&p));
        if y < w.entry_y() {
            prop_assert_eq!(p, 0.0);
        }
        if y > w.exit_y() {
            prop_assert_eq!(p, 1.0);
        }
    }

    #[test]
    fn mapped_progress_composes(m in valid_mapping(), w in window(), y in -2.0e6f64..2.0e6) {
        // Full pipeline: scroll offset → progress → property value stays
        // within the mapping's output range.
        let v = m.sample(w.progress(y));
        prop_assert!(v >= m.min_output() - 1e-9);
        prop_assert!(v <= m.max_output() + 1e-9);
    }
}
