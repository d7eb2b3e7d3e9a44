//! Solvers for the symmetric Euclidean Traveling-Salesman Problem.
//!
//! Two approaches share one distance matrix:
//!
//! - **Exact (branch-and-bound)**: Exhaustive depth-first search from node 0
//!   that prunes any partial path already longer than the best cycle. Returns
//!   a provably optimal tour; runtime grows factorially.
//! - **Ant Colony Optimization (ACO)**: Ants build tours by
//!   pheromone-weighted roulette-wheel sampling, deposit pheromone in
//!   proportion to tour quality, and trails evaporate each generation.
//!   Approximates the optimum on instances far beyond exhaustive reach.
//!
//! Supporting modules:
//!
//! - [`geometry`]: Points and the pairwise [`DistanceMatrix`](geometry::DistanceMatrix)
//! - [`tour`]: Tours with an implicit closing edge, and canonical rotation
//! - [`random`]: The single seedable random stream threaded through a run
//! - [`error`]: Input and configuration validation errors
//!
//! # Example
//!
//! ```
//! use u_tsp::aco::{AcoConfig, AcoRunner};
//! use u_tsp::exact::BruteForceRunner;
//! use u_tsp::geometry::DistanceMatrix;
//!
//! let distances = DistanceMatrix::from_coords(&[
//!     (0.0, 0.0), (0.2, 0.9), (0.5, 0.4), (0.9, 0.8), (0.7, 0.1),
//! ]).unwrap();
//!
//! let exact = BruteForceRunner::run(&distances);
//! let config = AcoConfig::default().with_generations(30).with_ants(10).with_seed(1);
//! let aco = AcoRunner::run(&distances, &config).unwrap();
//!
//! assert!(aco.best_cost >= exact.best_cost - 1e-9);
//! ```
//!
//! Everything runs on the calling thread. The optional `parallel` feature only
//! parallelizes the distance matrix build.

pub mod aco;
pub mod error;
pub mod exact;
pub mod geometry;
pub mod random;
pub mod tour;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{TspError, TspResult};
