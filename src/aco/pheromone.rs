//! Pheromone trail matrix.

use crate::error::{TspError, TspResult};
use crate::tour::Tour;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-edge pheromone intensities for `n` nodes, stored row-major.
///
/// Entries are never negative and every update is applied to `(i, j)` and
/// `(j, i)` alike, so the matrix stays symmetric for its whole lifetime.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PheromoneMatrix {
    n: usize,
    data: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an `n × n` matrix with every entry set to `tau0`.
    ///
    /// `tau0` must be positive: with zero pheromone every selection weight
    /// would vanish.
    pub fn new(n: usize, tau0: f64) -> TspResult<Self> {
        if !(tau0.is_finite() && tau0 > 0.0) {
            return Err(TspError::hyperparameter(
                "initial_pheromone",
                format!("must be positive and finite, got {tau0}"),
            ));
        }
        Ok(Self {
            n,
            data: vec![tau0; n * n],
        })
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Pheromone on edge `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Row `i`: pheromone from node `i` to every node.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Largest entry, useful for scaling a rendering.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// Evaporation: multiplies every entry by `1 - rho`.
    ///
    /// `rho` must lie in `[0, 1]`; it is clamped so an entry can never turn
    /// negative.
    pub fn degrade(&mut self, rho: f64) {
        debug_assert!((0.0..=1.0).contains(&rho), "rho out of range: {rho}");
        let keep = 1.0 - rho.clamp(0.0, 1.0);
        for value in &mut self.data {
            *value *= keep;
        }
    }

    /// Adds `amount` to both directions of every edge of `tour`, closing
    /// edge included.
    ///
    /// Entries saturate at `f64::MAX` so a later evaporation never sees an
    /// infinite trail.
    pub fn deposit(&mut self, tour: &Tour, amount: f64) {
        for (i, j) in tour.edges() {
            for index in [i * self.n + j, j * self.n + i] {
                self.data[index] = (self.data[index] + amount).min(f64::MAX);
            }
        }
    }
}
