//! Tours, solutions, and run results.

use std::fmt;

use crate::error::Result;
use crate::tsp::Instance;

/// A candidate closed route: a sequence of city indices with its fitness.
///
/// `fitness` is the total cyclic distance once evaluated and
/// `f64::INFINITY` before. Lower is better.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub order: Vec<usize>,
    pub fitness: f64,
}

impl Tour {
    /// Wraps an unevaluated order.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            fitness: f64::INFINITY,
        }
    }

    /// Recomputes and stores the fitness against `instance`.
    pub fn evaluate(&mut self, instance: &Instance) -> Result<f64> {
        self.fitness = instance.tour_length(&self.order)?;
        Ok(self.fitness)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// The reported result of a run: the best order and its distance.
///
/// `dimension` is the number of cities in the instance the order belongs to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub order: Vec<usize>,
    pub distance: f64,
    pub dimension: usize,
}

impl Solution {
    /// Builds a solution for `order`, computing its distance.
    pub fn new(order: Vec<usize>, instance: &Instance) -> Result<Self> {
        let distance = instance.tour_length(&order)?;
        Ok(Self {
            order,
            distance,
            dimension: instance.len(),
        })
    }

    /// Recomputes the closed-tour distance from `instance`.
    pub fn recompute_distance(&self, instance: &Instance) -> Result<f64> {
        instance.tour_length(&self.order)
    }

    /// External city ids in visiting order.
    pub fn city_ids(&self, instance: &Instance) -> Result<Vec<i64>> {
        self.order
            .iter()
            .map(|&i| instance.city(i).map(|c| c.id))
            .collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order: [")?;
        for (i, idx) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{idx}")?;
        }
        write!(f, "], Distance: {}", self.distance)
    }
}

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best tour seen across the whole run.
    pub solution: Solution,

    /// Number of completed generations.
    pub generations: usize,

    /// Whether the run stopped on the cancellation flag.
    pub cancelled: bool,

    /// Whether the run stopped on the wall-clock limit.
    pub timed_out: bool,

    /// Running best fitness; index 0 is the initial population, index `g`
    /// is after generation `g`.
    pub fitness_history: Vec<f64>,
}
