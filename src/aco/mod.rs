//! Ant Colony Optimization (Ant System variant).
//!
//! Ants build tours one at a time, choosing each next node with probability
//! proportional to `pheromone^alpha / distance^beta`. Every ant deposits
//! `q / length` on its tour as soon as it finishes, so ants later in the same
//! generation already feel the trails of earlier ones. After each generation
//! all trails evaporate by the degradation factor.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: Hyperparameters and seed
//! - [`PheromoneMatrix`]: Trail intensities, initialized, degraded and deposited on
//! - [`Ant`]: Builds one tour by roulette-wheel sampling
//! - [`BestTracker`]: Elitist best tour and convergence history
//! - [`AcoRunner`]: Executes the generation loop
//! - [`AcoResult`]: Best tour, history and the final pheromone snapshot
//!
//! Ants within a generation are strictly sequential. Updating trails in one
//! batch at the end of a generation would be a different algorithm with
//! different convergence behavior and is not offered here.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony
//!   of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod ant;
mod config;
mod pheromone;
mod runner;
mod tracker;

pub use ant::{roulette, Ant, AntTour};
pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner};
pub use tracker::BestTracker;
