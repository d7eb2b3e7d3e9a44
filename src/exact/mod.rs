//! Exact solver: depth-first branch-and-bound over Hamiltonian cycles.
//!
//! Only practical for small instances; see [`BruteForceRunner`] for the
//! growth of the search.

mod runner;

pub use runner::{BruteForceResult, BruteForceRunner};
