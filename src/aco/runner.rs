//! ACO generation loop.
//!
//! # Algorithm
//!
//! 1. Fill the pheromone matrix with the initial density
//! 2. For each generation:
//!    a. Let every ant build a tour, one after another; each ant deposits
//!       `q / length` immediately, so later ants of the same generation see
//!       the trails of earlier ones
//!    b. Evaporate once: multiply every entry by `1 - degradation`
//!    c. Append the best cost so far to the history
//! 3. Return the best tour ever seen
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant System: Optimization by a
//! Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use super::ant::Ant;
use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use super::tracker::BestTracker;
use crate::error::TspResult;
use crate::geometry::DistanceMatrix;
use crate::random::rng_from_seed;
use crate::tour::Tour;
use rand::Rng;
use tracing::{debug, info};
use web_time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcoResult {
    /// Shortest tour found, starting at whichever node its ant started on.
    pub best: Tour,

    /// Closed length of `best`.
    pub best_cost: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Zero-based generation in which `best` was found.
    pub best_generation: usize,

    /// Total number of tours constructed.
    pub tours_built: usize,

    /// Best cost at the end of each generation. Non-increasing.
    pub cost_history: Vec<f64>,

    /// Pheromone trails after the final evaporation.
    pub pheromone: PheromoneMatrix,

    /// Wall-clock time spent in the generation loop.
    pub elapsed: Duration,
}

impl AcoResult {
    /// `best` in presentation form, starting and ending at node 0.
    pub fn normalized_best(&self) -> TspResult<Vec<usize>> {
        self.best.normalized(0)
    }
}

/// Runs Ant Colony Optimization.
///
/// # Examples
///
/// ```
/// use u_tsp::aco::{AcoConfig, AcoRunner};
/// use u_tsp::geometry::DistanceMatrix;
///
/// let distances =
///     DistanceMatrix::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
/// let config = AcoConfig::default().with_generations(20).with_ants(10).with_seed(42);
///
/// let result = AcoRunner::run(&distances, &config).unwrap();
/// assert_eq!(result.cost_history.len(), 20);
/// assert!(result.best_cost >= 4.0 - 1e-9);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO with a random stream seeded from `config.seed`.
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> TspResult<AcoResult> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed);
        Self::run_validated(distances, config, &mut rng)
    }

    /// Runs ACO drawing every random number from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        rng: &mut R,
    ) -> TspResult<AcoResult> {
        config.validate()?;
        Self::run_validated(distances, config, rng)
    }

    fn run_validated<R: Rng>(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        rng: &mut R,
    ) -> TspResult<AcoResult> {
        let start = Instant::now();
        let mut pheromone = PheromoneMatrix::new(distances.len(), config.initial_pheromone)?;
        let mut tracker = BestTracker::new();
        let ant = Ant::new(distances, config);

        for generation in 0..config.generations {
            for _ in 0..config.ants {
                ant.walk(&mut pheromone, &mut tracker, rng);
            }
            pheromone.degrade(config.degradation);
            tracker.record_generation();
            debug!(generation, best_cost = tracker.best_cost(), "generation finished");
        }

        let elapsed = start.elapsed();
        let (best, best_cost, best_generation, cost_history) = tracker.into_parts();
        info!(
            nodes = distances.len(),
            best_cost,
            best_generation,
            elapsed_ms = elapsed.as_millis() as u64,
            "ant colony optimization finished"
        );

        Ok(AcoResult {
            best: best.unwrap_or_default(),
            best_cost,
            generations: config.generations,
            best_generation,
            tours_built: config.generations * config.ants,
            cost_history,
            pheromone,
            elapsed,
        })
    }
}
