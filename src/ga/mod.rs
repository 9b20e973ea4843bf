//! Genetic Algorithm for the TSP.
//!
//! A generational GA over permutation-encoded tours. Each generation:
//!
//! 1. **Select**: the best `elite_count` tours, then tournament winners,
//!    fill a parent list as long as the population.
//! 2. **Breed**: consecutive parent pairs produce two children each, through
//!    order-preserving crossover (with probability `crossover_probability`)
//!    and swap mutation.
//! 3. **Replace**: children overwrite the population slots ranked worst to
//!    best by the fitness the population had before breeding.
//!
//! The best tour seen over the whole run is reported, since replacement can
//! discard a generation's best individual.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, budgets, presets)
//! - [`GeneticEngine`]: Executes the generational loop
//! - [`GaResult`]: Best [`Solution`] plus run statistics
//!
//! # Submodules
//!
//! - [`operators`]: Permutation crossover and mutation
//! - [`selection`]: Elite, tournament, and replacement ranking
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection, and the
//!   Effects of Noise"

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{GaConfig, MutationPolicy, TournamentSampling};
pub use runner::GeneticEngine;
pub use types::{GaResult, Solution, Tour};
