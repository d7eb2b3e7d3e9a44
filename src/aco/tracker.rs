//! Elitist best-solution tracking.

use crate::tour::Tour;

/// Keeps the single best tour seen during a run and the per-generation
/// history of the best cost.
///
/// The best cost only ever decreases; an offer replaces the incumbent only
/// when it is strictly shorter.
#[derive(Debug, Clone)]
pub struct BestTracker {
    best: Option<Tour>,
    best_cost: f64,
    best_generation: usize,
    history: Vec<f64>,
}

impl Default for BestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl BestTracker {
    pub fn new() -> Self {
        Self {
            best: None,
            best_cost: f64::INFINITY,
            best_generation: 0,
            history: Vec::new(),
        }
    }

    /// Records `tour` if `cost` beats the incumbent. Returns whether it did.
    pub fn offer(&mut self, tour: &Tour, cost: f64) -> bool {
        if cost < self.best_cost {
            self.best = Some(tour.clone());
            self.best_cost = cost;
            self.best_generation = self.history.len();
            true
        } else {
            false
        }
    }

    /// Closes the current generation by appending the best cost so far.
    pub fn record_generation(&mut self) {
        self.history.push(self.best_cost);
    }

    pub fn best(&self) -> Option<&Tour> {
        self.best.as_ref()
    }

    /// Best cost so far; `+∞` before the first offer.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Zero-based generation in which the incumbent was found.
    pub fn best_generation(&self) -> usize {
        self.best_generation
    }

    /// Best cost at the end of each completed generation.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    pub(crate) fn into_parts(self) -> (Option<Tour>, f64, usize, Vec<f64>) {
        (self.best, self.best_cost, self.best_generation, self.history)
    }
}
