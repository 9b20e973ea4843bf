//! GA configuration.
//!
//! [`GaConfig`] holds every parameter that controls the generational loop.

use crate::error::{Result, TspError};

/// When the swap mutation is applied to a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationPolicy {
    /// Swap two positions in every child. `mutation_probability` is ignored.
    Always,

    /// Swap two positions with probability `mutation_probability` per child.
    #[default]
    PerIndividual,
}

/// How tournament contestants are drawn from the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TournamentSampling {
    /// Contestants are drawn independently; an individual may be drawn twice.
    #[default]
    WithReplacement,

    /// Contestants are distinct. A tournament as large as the population
    /// always returns its best individual.
    WithoutReplacement,
}

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.tournament_size, 5);
/// assert_eq!(config.elite_count(), 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::ga::{GaConfig, MutationPolicy};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_crossover_probability(0.8)
///     .with_mutation_policy(MutationPolicy::Always)
///     .with_max_generations(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in the population. Odd sizes are accepted; the last
    /// parent of an odd staging list breeds with itself.
    pub population_size: usize,

    /// Probability of recombining a pair of parents (0.0–1.0).
    ///
    /// When crossover is skipped, the children are copies of the parents.
    pub crossover_probability: f64,

    /// Probability of mutating a child (0.0–1.0).
    ///
    /// Only consulted under [`MutationPolicy::PerIndividual`].
    pub mutation_probability: f64,

    pub mutation_policy: MutationPolicy,

    /// Contestants per tournament, in `[1, population_size]`.
    pub tournament_size: usize,

    pub tournament_sampling: TournamentSampling,

    /// Fraction of the population carried into the parent pool as elites.
    ///
    /// The count is `population_size * elite_ratio` rounded half to even.
    pub elite_ratio: f64,

    /// Generation budget. Zero evaluates the initial population only.
    pub max_generations: usize,

    /// Optional wall-clock budget in milliseconds.
    ///
    /// Checked at the start of each generation, so a run may overshoot by
    /// up to one generation's work.
    pub time_limit_ms: Option<u64>,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            crossover_probability: 0.4,
            mutation_probability: 0.03,
            mutation_policy: MutationPolicy::default(),
            tournament_size: 5,
            tournament_sampling: TournamentSampling::default(),
            elite_ratio: 0.1,
            max_generations: 1000,
            time_limit_ms: Some(300_000),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    pub fn with_mutation_policy(mut self, policy: MutationPolicy) -> Self {
        self.mutation_policy = policy;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_tournament_sampling(mut self, sampling: TournamentSampling) -> Self {
        self.tournament_sampling = sampling;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Removes the wall-clock limit; only the generation budget applies.
    pub fn without_time_limit(mut self) -> Self {
        self.time_limit_ms = None;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites: `population_size * elite_ratio`, ties rounded to even.
    pub fn elite_count(&self) -> usize {
        let count = (self.population_size as f64 * self.elite_ratio).round_ties_even();
        (count.max(0.0) as usize).min(self.population_size)
    }

    /// Preset for quick runs on small instances.
    ///
    /// - Population: 50, Generations: 200, Time limit: 10s
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            max_generations: 200,
            time_limit_ms: Some(10_000),
            ..Self::default()
        }
    }

    /// Preset for mid-sized instances.
    ///
    /// - Population: 100, Generations: 1000, Time limit: 60s
    pub fn balanced() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            time_limit_ms: Some(60_000),
            ..Self::default()
        }
    }

    /// Preset for large instances.
    ///
    /// - Population: 200, Generations: 5000, Time limit: 5min
    pub fn quality() -> Self {
        Self {
            population_size: 200,
            max_generations: 5000,
            time_limit_ms: Some(300_000),
            ..Self::default()
        }
    }

    /// Selects a preset from the number of cities.
    ///
    /// - `city_count < 50` → [`fast()`](Self::fast)
    /// - `50 ≤ city_count < 200` → [`balanced()`](Self::balanced)
    /// - `city_count ≥ 200` → [`quality()`](Self::quality)
    pub fn auto_select(city_count: usize) -> Self {
        if city_count < 50 {
            Self::fast()
        } else if city_count < 200 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidConfiguration`] describing the first bad parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(invalid(format!(
                "tournament_size must be in [1, {}], got {}",
                self.population_size, self.tournament_size
            )));
        }
        check_unit("crossover_probability", self.crossover_probability)?;
        check_unit("mutation_probability", self.mutation_probability)?;
        check_unit("elite_ratio", self.elite_ratio)?;
        if self.time_limit_ms == Some(0) {
            return Err(invalid("time_limit_ms must be positive or None"));
        }
        Ok(())
    }
}

fn check_unit(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be in [0, 1], got {value}")))
    }
}

fn invalid(message: impl Into<String>) -> TspError {
    TspError::InvalidConfiguration(message.into())
}
