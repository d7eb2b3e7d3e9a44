//! Exhaustive branch-and-bound search.
//!
//! # Algorithm
//!
//! Node 0 is fixed as the start: every rotation of a cycle has the same
//! length, so this drops redundant rotations without losing optimality.
//! A depth-first search then extends the partial path with each unvisited
//! node in index order:
//!
//! 1. If the partial length already exceeds the best complete cycle, prune
//! 2. Once every node is visited, close the cycle back to node 0 and keep it
//!    if it is strictly shorter than the best
//! 3. On return, unmark the node and pop it from the partial path
//!
//! Ties keep the first cycle found in index enumeration order, so the result
//! is fully deterministic.
//!
//! # Complexity
//!
//! Worst case `O((n - 1)!)` expansions. Pruning helps in practice but the
//! growth stays factorial: a dozen nodes take well under a second, each
//! further node multiplies the work roughly by `n`. Bounding `n` is up to the
//! caller.

use crate::geometry::DistanceMatrix;
use crate::tour::Tour;
use tracing::{info, warn};
use web_time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Node count above which a run is logged as potentially very slow.
const LARGE_INSTANCE: usize = 12;

/// Result of an exhaustive search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BruteForceResult {
    /// An optimal tour, starting at node 0.
    pub best: Tour,

    /// Closed length of `best`.
    pub best_cost: f64,

    /// Number of search nodes expanded.
    pub expanded: usize,

    /// Number of branches cut by the bound.
    pub pruned: usize,

    /// Wall-clock time of the search.
    pub elapsed: Duration,
}

impl BruteForceResult {
    /// `best` in presentation form, starting and ending at node 0.
    pub fn closed_best(&self) -> Vec<usize> {
        self.best.closed()
    }
}

/// Exact TSP solver for small instances.
///
/// # Examples
///
/// ```
/// use u_tsp::exact::BruteForceRunner;
/// use u_tsp::geometry::DistanceMatrix;
///
/// let distances =
///     DistanceMatrix::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
/// let result = BruteForceRunner::run(&distances);
/// assert!((result.best_cost - 4.0).abs() < 1e-12);
/// assert_eq!(result.best.nodes(), &[0, 1, 2, 3]);
/// ```
pub struct BruteForceRunner;

impl BruteForceRunner {
    /// Finds an optimal tour by exhaustive search.
    pub fn run(distances: &DistanceMatrix) -> BruteForceResult {
        let n = distances.len();
        if n > LARGE_INSTANCE {
            warn!(nodes = n, "exhaustive search grows factorially with the node count");
        }

        let start = Instant::now();
        let mut search = Search {
            distances,
            visited: vec![false; n],
            path: Vec::with_capacity(n),
            best_cost: f64::INFINITY,
            best_path: Vec::new(),
            expanded: 0,
            pruned: 0,
        };
        search.explore(0, 0.0);
        let elapsed = start.elapsed();

        info!(
            nodes = n,
            best_cost = search.best_cost,
            expanded = search.expanded,
            pruned = search.pruned,
            elapsed_ms = elapsed.as_millis() as u64,
            "exhaustive search finished"
        );

        BruteForceResult {
            best: Tour::new(search.best_path),
            best_cost: search.best_cost,
            expanded: search.expanded,
            pruned: search.pruned,
            elapsed,
        }
    }
}

/// Recursion state, discarded once the search returns.
struct Search<'a> {
    distances: &'a DistanceMatrix,
    visited: Vec<bool>,
    path: Vec<usize>,
    best_cost: f64,
    best_path: Vec<usize>,
    expanded: usize,
    pruned: usize,
}

impl Search<'_> {
    fn explore(&mut self, node: usize, length: f64) {
        if length > self.best_cost {
            self.pruned += 1;
            return;
        }
        self.expanded += 1;

        self.visited[node] = true;
        self.path.push(node);

        let distances = self.distances;
        let mut all_visited = true;
        for next in 0..distances.len() {
            if !self.visited[next] {
                all_visited = false;
                self.explore(next, length + distances.get(node, next));
            }
        }

        if all_visited {
            let total = length + distances.get(node, 0);
            if total < self.best_cost {
                self.best_cost = total;
                self.best_path.clone_from(&self.path);
            }
        }

        self.path.pop();
        self.visited[node] = false;
    }
}
