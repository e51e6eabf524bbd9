//! Deterministic input generation for `orst sort`, `orst trace` and `orst bench`.

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::algorithm::Value;

/// Largest value produced for random input.
pub const VALUE_CEILING: Value = 999;

/// The arrangement of generated input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputShape {
    /// Uniformly random values.
    #[default]
    Random,
    /// Ascending, no work to do.
    Sorted,
    /// Descending, the worst case for the simple sorts.
    Reversed,
    /// Ascending with about one in ten elements swapped out of place.
    NearlySorted,
    /// Random values drawn from only four distinct ones.
    FewUnique,
}

/// Generates `len` values arranged as `shape`. The same `seed` always gives the same values.
pub fn generate(shape: InputShape, len: usize, seed: u64) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(seed);
    let ascending = || (0..len as Value).collect::<Vec<_>>();

    match shape {
        InputShape::Random => (0..len)
            .map(|_| rng.gen_range(0..=VALUE_CEILING))
            .collect(),
        InputShape::Sorted => ascending(),
        InputShape::Reversed => {
            let mut values = ascending();
            values.reverse();
            values
        }
        InputShape::NearlySorted => {
            let mut values = ascending();
            if len >= 2 {
                for _ in 0..(len / 10).max(1) {
                    let i = rng.gen_range(0..len);
                    let j = rng.gen_range(0..len);
                    values.swap(i, j);
                }
            }
            values
        }
        InputShape::FewUnique => (0..len)
            .map(|_| rng.gen_range(0..4) * (VALUE_CEILING / 3))
            .collect(),
    }
}
