//! Error types shared by every solver in the crate.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type TspResult<T> = Result<T, TspError>;

/// Errors raised while validating input or configuration.
///
/// All variants are detected before a solver starts working; once inputs
/// pass validation, no solver fails mid-run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// Fewer than two nodes were supplied, so no cycle is definable.
    #[error("at least 2 nodes are required, got {found}")]
    InsufficientNodes { found: usize },

    /// A hyperparameter is out of its valid range.
    #[error("invalid hyperparameter `{name}`: {reason}")]
    InvalidHyperparameter { name: &'static str, reason: String },

    /// A coordinate is NaN or infinite.
    #[error("coordinate of node {index} is not finite")]
    NonFiniteCoordinate { index: usize },

    /// Finite coordinates whose distance is so large that it, or a tour
    /// built from edges like it, is not representable.
    #[error("distance between nodes {i} and {j} overflows")]
    DistanceOverflow { i: usize, j: usize },

    /// The requested anchor node does not occur in the tour.
    #[error("node {node} does not occur in the tour")]
    NodeNotInTour { node: usize },

    /// A tour is not a permutation of the matrix nodes.
    #[error("invalid tour: {reason}")]
    InvalidTour { reason: String },
}

impl TspError {
    pub(crate) fn hyperparameter(name: &'static str, reason: impl Into<String>) -> Self {
        TspError::InvalidHyperparameter {
            name,
            reason: reason.into(),
        }
    }
}
