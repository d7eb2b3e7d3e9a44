//! ACO hyperparameters.

use crate::error::{TspError, TspResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for one Ant Colony Optimization run.
///
/// # Defaults
///
/// The defaults are tuned for instances of a few dozen nodes on the unit
/// square:
///
/// ```
/// use u_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.ants, 50);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_alpha(1.0)
///     .with_beta(3.0)
///     .with_degradation(0.5)
///     .with_generations(200)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcoConfig {
    /// Pheromone influence exponent. Must be positive.
    pub alpha: f64,

    /// Distance influence exponent. Must be positive.
    ///
    /// Higher values make ants greedier towards short edges.
    pub beta: f64,

    /// Deposit scale: each ant adds `q / tour_length` to every edge it used.
    pub q: f64,

    /// Pheromone level of every edge at the start of the run. Must be positive.
    pub initial_pheromone: f64,

    /// Fraction of pheromone removed after every generation, in `[0, 1]`.
    ///
    /// `0` disables evaporation; `1` wipes the matrix each generation.
    pub degradation: f64,

    /// Number of generations to run.
    pub generations: usize,

    /// Number of ants per generation. Ants run sequentially.
    pub ants: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            alpha: 0.9,
            beta: 2.9,
            q: 0.01,
            initial_pheromone: 0.1,
            degradation: 0.7,
            generations: 100,
            ants: 50,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    pub fn with_degradation(mut self, rho: f64) -> Self {
        self.degradation = rho;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_ants(mut self, n: usize) -> Self {
        self.ants = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Called by the runner before anything is allocated, so a bad value
    /// never surfaces mid-run.
    pub fn validate(&self) -> TspResult<()> {
        positive("alpha", self.alpha)?;
        positive("beta", self.beta)?;
        positive("q", self.q)?;
        positive("initial_pheromone", self.initial_pheromone)?;
        if !(0.0..=1.0).contains(&self.degradation) {
            return Err(TspError::hyperparameter(
                "degradation",
                format!("must be in [0, 1], got {}", self.degradation),
            ));
        }
        if self.generations == 0 {
            return Err(TspError::hyperparameter("generations", "must be at least 1"));
        }
        if self.ants == 0 {
            return Err(TspError::hyperparameter("ants", "must be at least 1"));
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> TspResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TspError::hyperparameter(
            name,
            format!("must be positive and finite, got {value}"),
        ))
    }
}
