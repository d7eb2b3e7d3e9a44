//! Seedable random streams.
//!
//! Every run draws from exactly one [`StdRng`] so that a fixed seed
//! reproduces the whole run, start nodes and roulette draws alike.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the random stream for a run from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a stream from `seed`, or from a fresh random seed when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
