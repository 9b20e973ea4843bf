//! Seeded random number helpers.
//!
//! Every random decision of a run (initial shuffles, tournament draws,
//! crossover coin flips and points, mutation positions) goes through one
//! generator created here, so a fixed seed reproduces a run exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Unbiased in-place shuffle.
///
/// Forward Fisher–Yates: position `i` is swapped with a uniformly chosen
/// position in `[i, len)`, so each of the `len!` orderings is equally likely.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    let n = items.len();
    for i in 0..n {
        let j = rng.random_range(i..n);
        items.swap(i, j);
    }
}
