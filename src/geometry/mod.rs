//! Planar geometry: node coordinates and the distance matrix derived from them.
//!
//! - [`Point`]: an immutable 2-D coordinate
//! - [`DistanceMatrix`]: all pairwise Euclidean distances, computed once and
//!   shared read-only by every solver

mod matrix;
mod point;

pub use matrix::DistanceMatrix;
pub use point::Point;
