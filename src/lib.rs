//! Genetic algorithm solver for the Euclidean Traveling Salesman Problem.
//!
//! Given a set of planar cities, searches for a closed tour of minimum total
//! length:
//!
//! - **Problem model** ([`tsp`]): cities, instances, closed-tour length, and
//!   TSPLIB-style coordinate input and tour output.
//! - **Genetic Algorithm** ([`ga`]): population initialization, elitism,
//!   tournament selection, order-preserving crossover, swap mutation, and
//!   rank-based generational replacement, bounded by a generation budget
//!   and a wall-clock limit.
//!
//! All randomness of a run comes from one seedable generator ([`random`]),
//! so runs are reproducible.
//!
//! # Example
//!
//! ```
//! use tsp_ga::ga::{GaConfig, GeneticEngine};
//! use tsp_ga::tsp::Instance;
//!
//! let instance = Instance::from_coords(&[(0.0, 0.0), (3.0, 4.0)])?;
//! let engine = GeneticEngine::new(instance, GaConfig::fast().with_seed(1))?;
//! let result = engine.run()?;
//! assert_eq!(result.solution.distance, 10.0);
//! # Ok::<(), tsp_ga::TspError>(())
//! ```

mod error;
pub mod ga;
pub mod random;
pub mod tsp;

pub use error::{Result, TspError};
