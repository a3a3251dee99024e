#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Random city generation system.
//!
//! Produces a [`CityGrid`] by sampling a classification for every position
//! from an explicitly injected random source, so that generation is
//! reproducible under a fixed seed and free of ambient global state.

use std::num::NonZeroU32;

use gridtown_core::{Cell, CityGrid, Classification};
use rand::Rng;

/// Per-classification threshold numerators, in priority order.
///
/// Each classification is tested against a uniform draw in `[0, range)`
/// where `range` is the total cell count of the grid being generated. The
/// numerators are fixed, so per-cell classification density shrinks as the
/// map grows; that coupling is inherited behavior and intentionally kept.
const CLASSIFICATION_THRESHOLDS: [(Classification, u64); 4] = [
    (Classification::Walkway, 50),
    (Classification::Residence, 25),
    (Classification::Business, 20),
    (Classification::Blockage, 5),
];

/// Generates a rows x columns city grid using the provided random source.
///
/// Every cell carries its own grid position and an empty description. The
/// non-zero dimension types make degenerate requests unrepresentable.
pub fn generate(rows: NonZeroU32, columns: NonZeroU32, rng: &mut impl Rng) -> CityGrid {
    let range = u64::from(rows.get()) * u64::from(columns.get());
    CityGrid::from_fn(rows, columns, |position| {
        Cell::new(position, sample_classification(range, &mut *rng))
    })
}

/// Samples one classification via priority-ordered threshold tests.
///
/// Walkway, residence, business and blockage are tested in that order; each
/// test draws a fresh uniform integer in `[0, range)` and succeeds when the
/// draw is at most its numerator. The first success wins and later draws
/// are not consumed. When every test fails the cell defaults to walkway.
fn sample_classification(range: u64, rng: &mut impl Rng) -> Classification {
    for (classification, numerator) in CLASSIFICATION_THRESHOLDS {
        if rng.gen_range(0..range) <= numerator {
            return classification;
        }
    }

    Classification::Walkway
}
