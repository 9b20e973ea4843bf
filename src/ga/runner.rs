//! GA generational loop execution.
//!
//! [`GeneticEngine`] drives the complete run:
//! initialization → evaluation → selection → breeding → replacement → repeat.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::instrument;

use super::config::{GaConfig, MutationPolicy};
use super::operators::{order_preserving_crossover, random_tour, swap_mutation};
use super::selection::{elite_indices, replacement_slots, tournament};
use super::types::{GaResult, Solution, Tour};
use crate::error::Result;
use crate::random::create_rng;
use crate::tsp::Instance;

/// Genetic algorithm for one TSP instance.
///
/// Owns the instance and a validated configuration. Each call to a `run*`
/// method performs an independent run.
///
/// # Usage
///
/// ```
/// use tsp_ga::ga::{GaConfig, GeneticEngine};
/// use tsp_ga::tsp::Instance;
///
/// let square = Instance::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])?;
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(50)
///     .with_seed(42);
///
/// let engine = GeneticEngine::new(square, config)?;
/// let result = engine.run()?;
/// assert!((result.solution.distance - 4.0).abs() < 1e-9);
/// # Ok::<(), tsp_ga::TspError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeneticEngine {
    instance: Instance,
    config: GaConfig,
}

impl GeneticEngine {
    /// Creates an engine.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidConfiguration`](crate::TspError::InvalidConfiguration)
    /// if `config` fails [`GaConfig::validate`].
    pub fn new(instance: Instance, config: GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { instance, config })
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the GA with a generator seeded from the configuration.
    pub fn run(&self) -> Result<GaResult> {
        self.run_with_cancel(None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops at
    /// the start of the next generation and returns the best tour so far.
    pub fn run_with_cancel(&self, cancel: Option<Arc<AtomicBool>>) -> Result<GaResult> {
        let mut rng = match self.config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        self.run_with_rng(&mut rng, cancel)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// # Errors
    ///
    /// [`TspError::InvalidIndex`](crate::TspError::InvalidIndex) if a tour
    /// ever references a city outside the instance. The run is aborted.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            cities = self.instance.len(),
            population = self.config.population_size
        )
    )]
    pub fn run_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        let config = &self.config;
        let started = Instant::now();
        let time_limit = config.time_limit_ms.map(Duration::from_millis);

        // 1. Initialize and evaluate
        let n = self.instance.len();
        let mut population: Vec<Tour> = (0..config.population_size)
            .map(|_| Tour::new(random_tour(n, rng)))
            .collect();
        self.evaluate_all(&mut population)?;

        // 2. Track the best tour of the whole run
        let mut best = best_of(&population).clone();
        let mut fitness_history = vec![best.fitness];

        let mut generation = 0usize;
        let mut cancelled = false;
        let mut timed_out = false;

        // 3. Generational loop
        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if generation >= config.max_generations {
                break;
            }
            if let Some(limit) = time_limit {
                if started.elapsed() >= limit {
                    timed_out = true;
                    break;
                }
            }

            let fitnesses: Vec<f64> = population.iter().map(|t| t.fitness).collect();

            let parents = self.select_parents(&fitnesses, rng);
            let mut offspring = self.breed(&population, &parents, rng);
            self.evaluate_all(&mut offspring)?;

            // Worst slot of the evaluated population gets the first child.
            for (slot, child) in replacement_slots(&fitnesses).into_iter().zip(offspring) {
                population[slot] = child;
            }
            generation += 1;

            let generation_best = best_of(&population);
            if generation_best.fitness < best.fitness {
                best = generation_best.clone();
            }
            fitness_history.push(best.fitness);

            tracing::debug!(generation, best = best.fitness, "generation complete");
        }

        tracing::info!(
            generations = generation,
            best = best.fitness,
            cancelled,
            timed_out,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "GA run finished"
        );

        Ok(GaResult {
            solution: Solution {
                distance: best.fitness,
                order: best.order,
                dimension: n,
            },
            generations: generation,
            cancelled,
            timed_out,
            fitness_history,
        })
    }

    /// Elites by stable fitness rank, then tournament winners.
    ///
    /// Returns population slots; a slot may appear more than once.
    fn select_parents<R: Rng>(&self, fitnesses: &[f64], rng: &mut R) -> Vec<usize> {
        let config = &self.config;
        let mut parents = elite_indices(fitnesses, config.elite_count());
        while parents.len() < config.population_size {
            parents.push(tournament(
                fitnesses,
                config.tournament_size,
                config.tournament_sampling,
                rng,
            ));
        }
        parents
    }

    /// Breeds consecutive parent pairs into `population_size` children.
    ///
    /// An unpaired last parent is bred with itself and yields one child.
    /// Children never alias their parents.
    fn breed<R: Rng>(&self, population: &[Tour], parents: &[usize], rng: &mut R) -> Vec<Tour> {
        let config = &self.config;
        let mut offspring = Vec::with_capacity(parents.len());

        for pair in parents.chunks(2) {
            let first = &population[pair[0]].order;
            let second = &population[*pair.get(1).unwrap_or(&pair[0])].order;

            let (mut child1, mut child2) =
                if rng.random_range(0.0..1.0) < config.crossover_probability {
                    order_preserving_crossover(first, second, rng)
                } else {
                    (first.clone(), second.clone())
                };

            self.mutate(&mut child1, rng);
            offspring.push(Tour::new(child1));
            if pair.len() == 2 {
                self.mutate(&mut child2, rng);
                offspring.push(Tour::new(child2));
            }
        }
        offspring
    }

    fn mutate<R: Rng>(&self, order: &mut [usize], rng: &mut R) {
        let apply = match self.config.mutation_policy {
            MutationPolicy::Always => true,
            MutationPolicy::PerIndividual => {
                rng.random_range(0.0..1.0) < self.config.mutation_probability
            }
        };
        if apply {
            swap_mutation(order, rng);
        }
    }

    fn evaluate_all(&self, tours: &mut [Tour]) -> Result<()> {
        for tour in tours.iter_mut() {
            tour.evaluate(&self.instance)?;
        }
        Ok(())
    }
}

/// The tour with the lowest fitness; the earliest slot wins ties.
fn best_of(population: &[Tour]) -> &Tour {
    let mut best = &population[0];
    for tour in &population[1..] {
        if tour.fitness < best.fitness {
            best = tour;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
