//! Stochastic tour construction for a single ant.
//!
//! From the current node, every unvisited node `j` gets the weight
//! `tau[cur][j]^alpha / d[cur][j]^beta`. The weights are normalized into a
//! probability distribution and the next node is drawn by roulette-wheel
//! sampling with one uniform draw from the run's random stream.
//!
//! Guards keep every probability finite:
//!
//! - A zero distance to an unvisited node (coincident coordinates) makes that
//!   edge overwhelmingly preferred: only zero-distance candidates keep a
//!   weight, namely `tau^alpha`.
//! - A weight that overflows to `+∞` wins the same way against finite ones.
//! - An undefined weight (`∞ / ∞`) counts as zero.
//! - A zero weight sum falls back to a uniform choice among unvisited nodes.

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use super::tracker::BestTracker;
use crate::geometry::DistanceMatrix;
use crate::tour::Tour;
use rand::Rng;
use tracing::trace;

/// A tour built by one ant together with its closed length.
#[derive(Debug, Clone, PartialEq)]
pub struct AntTour {
    pub tour: Tour,
    pub length: f64,
}

/// Builds candidate tours from distances and the current pheromone trails.
#[derive(Debug, Clone, Copy)]
pub struct Ant<'a> {
    distances: &'a DistanceMatrix,
    alpha: f64,
    beta: f64,
    q: f64,
}

impl<'a> Ant<'a> {
    pub fn new(distances: &'a DistanceMatrix, config: &AcoConfig) -> Self {
        Self {
            distances,
            alpha: config.alpha,
            beta: config.beta,
            q: config.q,
        }
    }

    /// Selection probabilities from `current` to every node.
    ///
    /// Visited nodes get probability zero; the unvisited ones sum to one.
    /// If every node is visited, all entries are zero.
    pub fn probabilities(
        &self,
        pheromone: &PheromoneMatrix,
        current: usize,
        visited: &[bool],
    ) -> Vec<f64> {
        let n = self.distances.len();
        let mut weights = vec![0.0; n];
        let candidates: Vec<usize> = (0..n).filter(|&j| !visited[j]).collect();
        if candidates.is_empty() {
            return weights;
        }

        let coincident = candidates
            .iter()
            .any(|&j| self.distances.get(current, j) == 0.0);
        if coincident {
            trace!(current, "zero-length edge available, restricting choice");
            for &j in &candidates {
                if self.distances.get(current, j) == 0.0 {
                    weights[j] = pheromone.get(current, j).powf(self.alpha);
                }
            }
        } else {
            for &j in &candidates {
                weights[j] = self.weight(pheromone.get(current, j), self.distances.get(current, j));
            }
        }

        for w in weights.iter_mut().filter(|w| w.is_nan()) {
            *w = 0.0;
        }

        let mut sum: f64 = weights.iter().sum();
        if sum.is_infinite() {
            trace!(current, "weight overflow, keeping only unbounded weights");
            for w in weights.iter_mut() {
                *w = if w.is_infinite() { 1.0 } else { 0.0 };
            }
            sum = weights.iter().sum();
        }
        if sum <= 0.0 {
            trace!(current, "zero weight sum, choosing uniformly");
            for &j in &candidates {
                weights[j] = 1.0;
            }
            sum = candidates.len() as f64;
        }

        for w in weights.iter_mut() {
            *w /= sum;
        }
        weights
    }

    /// Builds one closed tour from a uniformly random start node.
    ///
    /// Reads `pheromone` but does not modify it.
    pub fn construct<R: Rng>(&self, pheromone: &PheromoneMatrix, rng: &mut R) -> AntTour {
        let n = self.distances.len();
        let start = rng.random_range(0..n);

        let mut visited = vec![false; n];
        let mut nodes = Vec::with_capacity(n);
        let mut length = 0.0;
        let mut current = start;
        visited[start] = true;
        nodes.push(start);

        while let Some(first_open) = visited.iter().position(|&v| !v) {
            let probabilities = self.probabilities(pheromone, current, &visited);
            let draw: f64 = rng.random();
            let next = roulette(&probabilities, draw).unwrap_or(first_open);
            length += self.distances.get(current, next);
            visited[next] = true;
            nodes.push(next);
            current = next;
        }
        length += self.distances.get(current, start);

        AntTour {
            tour: Tour::new(nodes),
            length,
        }
    }

    /// Constructs a tour, deposits `q / length` on it and offers it to
    /// `tracker`.
    ///
    /// Nothing is deposited when `q / length` is not finite, which covers a
    /// zero-length tour (every node on one coordinate) and an overflowing `q`.
    pub fn walk<R: Rng>(
        &self,
        pheromone: &mut PheromoneMatrix,
        tracker: &mut BestTracker,
        rng: &mut R,
    ) -> AntTour {
        let built = self.construct(pheromone, rng);
        let amount = self.q / built.length;
        if amount.is_finite() {
            pheromone.deposit(&built.tour, amount);
        } else {
            trace!(length = built.length, "deposit not finite, skipped");
        }
        tracker.offer(&built.tour, built.length);
        built
    }

    fn weight(&self, tau: f64, distance: f64) -> f64 {
        let attraction = tau.powf(self.alpha);
        if attraction == 0.0 {
            return 0.0;
        }
        attraction / distance.powf(self.beta)
    }
}

/// Roulette-wheel selection over `probabilities` with a draw in `[0, 1)`.
///
/// Returns the first index with non-zero probability whose cumulative
/// probability exceeds `draw`. When rounding leaves the total just below the
/// draw, the last index with non-zero probability is returned. `None` only
/// if every probability is zero.
pub fn roulette(probabilities: &[f64], draw: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    let mut last = None;
    for (i, &p) in probabilities.iter().enumerate() {
        if p > 0.0 {
            cumulative += p;
            last = Some(i);
            if cumulative > draw {
                return Some(i);
            }
        }
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn pentagon() -> DistanceMatrix {
        DistanceMatrix::from_coords(&[
            (0.0, 1.0),
            (0.95, 0.31),
            (0.59, -0.81),
            (-0.59, -0.81),
            (-0.95, 0.31),
        ])
        .unwrap()
    }

    fn config() -> AcoConfig {
        AcoConfig::default()
            .with_alpha(1.0)
            .with_beta(2.0)
            .with_q(1.0)
            .with_initial_pheromone(1.0)
    }

    #[test]
    fn test_probabilities_normalized() {
        let m = pentagon();
        let cfg = config();
        let ant = Ant::new(&m, &cfg);
        let p = PheromoneMatrix::new(5, 1.0).unwrap();
        let visited = [true, false, true, false, false];

        let probs = ant.probabilities(&p, 0, &visited);
        assert_eq!(probs[0], 0.0);
        assert_eq!(probs[2], 0.0);
        assert!(probs.iter().all(|&x| x >= 0.0 && x.is_finite()));
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_probabilities_favor_short_edges() {
        let m = DistanceMatrix::from_coords(&[(0.0, 0.0), (1.0, 0.0), (10.0, 0.0)]).unwrap();
        let cfg = config();
        let ant = Ant::new(&m, &cfg);
        let p = PheromoneMatrix::new(3, 1.0).unwrap();

        let probs = ant.probabilities(&p, 0, &[true, false, false]);
        // weights 1/1 and 1/100
        assert!((probs[1] - 100.0 / 101.0).abs() < 1e-12);
        assert!((probs[2] - 1.0 / 101.0).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_all_visited() {
        let m = pentagon();
        let cfg = config();
        let ant = Ant::new(&m, &cfg);
        let p = PheromoneMatrix::new(5, 1.0).unwrap();
        let probs = ant.probabilities(&p, 0, &[true; 5]);
        assert!(probs.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_probabilities_zero_distance_preferred() {
        let m = DistanceMatrix::from_coords(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0), (0.0, 0.0)])
            .unwrap();
        let cfg = config();
        let ant = Ant::new(&m, &cfg);
        let p = PheromoneMatrix::new(4, 1.0).unwrap();

        let probs = ant.probabilities(&p, 0, &[true, false, false, false]);
        assert!((probs[1] - 0.5).abs() < 1e-12);
        assert_eq!(probs[2], 0.0);
        assert!((probs[3] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_zero_pheromone_uniform() {
        let m = pentagon();
        let cfg = config();
        let ant = Ant::new(&m, &cfg);
        let mut p = PheromoneMatrix::new(5, 1.0).unwrap();
        p.degrade(1.0);

        let probs = ant.probabilities(&p, 0, &[true, false, false, false, false]);
        for &x in &probs[1..] {
            assert!((x - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_probabilities_weight_overflow() {
        // 1e-10^40 underflows to zero, so the weight of node 1 is +inf
        let m = DistanceMatrix::from_coords(&[(0.0, 0.0), (1e-10, 0.0), (1.0, 0.0)]).unwrap();
        let cfg = config().with_beta(40.0);
        let ant = Ant::new(&m, &cfg);
        let p = PheromoneMatrix::new(3, 1.0).unwrap();

        let probs = ant.probabilities(&p, 0, &[true, false, false]);
        assert!(probs.iter().all(|x| x.is_finite()));
        assert_eq!(probs[1], 1.0);
        assert_eq!(probs[2], 0.0);
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_probabilities_undefined_weights_uniform() {
        // MAX^2 and (1e200)^2 both overflow: every weight is inf / inf
        let m = DistanceMatrix::from_coords(&[(0.0, 0.0), (1e200, 0.0), (-1e200, 0.0)]).unwrap();
        let cfg = config().with_alpha(2.0).with_beta(2.0);
        let ant = Ant::new(&m, &cfg);
        let p = PheromoneMatrix::new(3, f64::MAX).unwrap();

        let probs = ant.probabilities(&p, 0, &[true, false, false]);
        assert_eq!(probs, vec![0.0, 0.5, 0.5]);
    }

    #[test]
    fn test_construct_complete_without_usable_weights() {
        let m = DistanceMatrix::from_coords(&[(0.0, 0.0), (1e200, 0.0), (-1e200, 0.0), (0.0, 1e200)])
            .unwrap();
        let cfg = config().with_alpha(2.0).with_beta(2.0);
        let ant = Ant::new(&m, &cfg);
        let p = PheromoneMatrix::new(4, f64::MAX).unwrap();
        let mut rng = create_rng(5);

        for _ in 0..10 {
            let built = ant.construct(&p, &mut rng);
            assert!(built.tour.validate(4).is_ok());
            assert!(built.length.is_finite());
        }
    }

    #[test]
    fn test_walk_skips_overflowing_deposit() {
        // q / length overflows for any tour shorter than 1
        let m = DistanceMatrix::from_coords(&[(0.0, 0.0), (0.0, 0.1), (0.1, 0.1), (0.1, 0.0)])
            .unwrap();
        let cfg = config().with_q(f64::MAX);
        let ant = Ant::new(&m, &cfg);
        let mut p = PheromoneMatrix::new(4, 1.0).unwrap();
        let mut tracker = BestTracker::new();

        let built = ant.walk(&mut p, &mut tracker, &mut create_rng(1));
        assert!(built.tour.validate(4).is_ok());
        assert_eq!(p.max(), 1.0);
        assert!((tracker.best_cost() - built.length).abs() < 1e-12);
    }

    #[test]
    fn test_roulette_walks_cumulative() {
        let probs = [0.0, 0.2, 0.0, 0.5, 0.3];
        assert_eq!(roulette(&probs, 0.0), Some(1));
        assert_eq!(roulette(&probs, 0.19), Some(1));
        assert_eq!(roulette(&probs, 0.2), Some(3));
        assert_eq!(roulette(&probs, 0.69), Some(3));
        assert_eq!(roulette(&probs, 0.7), Some(4));
        assert_eq!(roulette(&probs, 0.999_999), Some(4));
    }

    #[test]
    fn test_roulette_rounding_shortfall() {
        let probs = [0.3, 0.3, 0.0];
        assert_eq!(roulette(&probs, 0.9), Some(1));
        assert_eq!(roulette(&[0.0, 0.0], 0.5), None);
    }

    #[test]
    fn test_construct_is_permutation() {
        let m = pentagon();
        let cfg = config();
        let ant = Ant::new(&m, &cfg);
        let p = PheromoneMatrix::new(5, 1.0).unwrap();
        let mut rng = create_rng(42);

        for _ in 0..20 {
            let built = ant.construct(&p, &mut rng);
            assert!(built.tour.validate(5).is_ok());
            assert!((built.length - built.tour.length(&m)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_construct_deterministic() {
        let m = pentagon();
        let cfg = config();
        let ant = Ant::new(&m, &cfg);
        let p = PheromoneMatrix::new(5, 1.0).unwrap();

        let a = ant.construct(&p, &mut create_rng(9));
        let b = ant.construct(&p, &mut create_rng(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_walk_deposits_and_tracks() {
        let m = DistanceMatrix::from_coords(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]).unwrap();
        let cfg = config().with_q(12.0);
        let ant = Ant::new(&m, &cfg);
        let mut p = PheromoneMatrix::new(3, 1.0).unwrap();
        let mut tracker = BestTracker::new();

        let built = ant.walk(&mut p, &mut tracker, &mut create_rng(1));

        assert!((built.length - 12.0).abs() < 1e-12);
        assert!((tracker.best_cost() - 12.0).abs() < 1e-12);
        // every edge of a triangle is on the tour: 1 + 12/12
        assert!((p.get(0, 1) - 2.0).abs() < 1e-12);
        assert!((p.get(2, 0) - 2.0).abs() < 1e-12);
        assert_eq!(p.get(1, 1), 1.0);
    }

    #[test]
    fn test_walk_all_coincident() {
        let m = DistanceMatrix::from_coords(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]).unwrap();
        let cfg = config();
        let ant = Ant::new(&m, &cfg);
        let mut p = PheromoneMatrix::new(3, 1.0).unwrap();
        let mut tracker = BestTracker::new();

        let built = ant.walk(&mut p, &mut tracker, &mut create_rng(3));
        assert_eq!(built.length, 0.0);
        assert!(built.tour.validate(3).is_ok());
        assert_eq!(p.max(), 1.0);
        assert_eq!(tracker.best_cost(), 0.0);
    }
}
