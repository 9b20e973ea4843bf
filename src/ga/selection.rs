//! Selection and replacement ranking over a fitness vector.
//!
//! All functions take the per-slot fitness values of the current population
//! and return slot indices. Lower fitness is better.

use std::cmp::Ordering;

use rand::seq::index;
use rand::Rng;

use super::config::TournamentSampling;

/// The `count` best slots, best first.
///
/// Equal fitness keeps population order (stable sort).
pub fn elite_indices(fitnesses: &[f64], count: usize) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..fitnesses.len()).collect();
    ranked.sort_by(|&a, &b| fitnesses[a].total_cmp(&fitnesses[b]));
    ranked.truncate(count);
    ranked
}

/// Every slot ordered worst first.
///
/// Equal fitness keeps population order (stable sort). Offspring are
/// assigned to these slots one-for-one.
pub fn replacement_slots(fitnesses: &[f64]) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..fitnesses.len()).collect();
    ranked.sort_by(|&a, &b| fitnesses[b].total_cmp(&fitnesses[a]));
    ranked
}

/// Tournament selection: draw `k` slots, return the fittest.
///
/// The first drawn contestant wins ties. `k` is clamped to `[1, len]` for
/// [`TournamentSampling::WithoutReplacement`] and to at least 1 otherwise.
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub fn tournament<R: Rng>(
    fitnesses: &[f64],
    k: usize,
    sampling: TournamentSampling,
    rng: &mut R,
) -> usize {
    let n = fitnesses.len();
    assert!(n > 0, "cannot select from empty population");

    match sampling {
        TournamentSampling::WithReplacement => {
            let mut best = rng.random_range(0..n);
            for _ in 1..k.max(1) {
                let challenger = rng.random_range(0..n);
                if beats(fitnesses[challenger], fitnesses[best]) {
                    best = challenger;
                }
            }
            best
        }
        TournamentSampling::WithoutReplacement => {
            let mut contestants = index::sample(rng, n, k.clamp(1, n)).into_iter();
            let mut best = contestants.next().unwrap_or(0);
            for challenger in contestants {
                if beats(fitnesses[challenger], fitnesses[best]) {
                    best = challenger;
                }
            }
            best
        }
    }
}

fn beats(challenger: f64, incumbent: f64) -> bool {
    challenger.total_cmp(&incumbent) == Ordering::Less
}
