//! Pairwise Euclidean distance matrix.

use super::point::Point;
use crate::error::{TspError, TspResult};
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All pairwise distances between `n` nodes, stored row-major.
///
/// Invariants: symmetric, zero diagonal, non-negative and finite. Built once
/// from coordinates and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use u_tsp::geometry::DistanceMatrix;
///
/// let m = DistanceMatrix::from_coords(&[(0.0, 0.0), (3.0, 4.0)]).unwrap();
/// assert_eq!(m.len(), 2);
/// assert!((m.get(0, 1) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Computes the matrix for the given nodes in O(n²).
    ///
    /// Fails with [`TspError::InsufficientNodes`] for fewer than two points and
    /// with [`TspError::NonFiniteCoordinate`] for NaN or infinite coordinates.
    /// Fails with [`TspError::DistanceOverflow`] when a distance times `n` is
    /// not finite, since a tour of `n` such edges would have no finite length.
    /// Coincident points are accepted; each resulting zero off-diagonal
    /// distance is reported through `tracing::warn!` and by
    /// [`degenerate_pairs`](Self::degenerate_pairs).
    pub fn from_points(points: &[Point]) -> TspResult<Self> {
        let n = points.len();
        if n < 2 {
            return Err(TspError::InsufficientNodes { found: n });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(TspError::NonFiniteCoordinate { index });
        }

        let mut data = vec![0.0; n * n];

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            data.par_chunks_mut(n)
                .enumerate()
                .for_each(|(i, row)| fill_row(points, i, row));
        }
        #[cfg(not(feature = "parallel"))]
        {
            data.chunks_mut(n)
                .enumerate()
                .for_each(|(i, row)| fill_row(points, i, row));
        }

        let scale = n as f64;
        if let Some(k) = data.iter().position(|d| !(d * scale).is_finite()) {
            return Err(TspError::DistanceOverflow { i: k / n, j: k % n });
        }

        let matrix = Self { n, data };
        for (i, j) in matrix.degenerate_pairs() {
            warn!(i, j, "distinct nodes share a coordinate; edge has zero length");
        }
        Ok(matrix)
    }

    /// Convenience constructor from `(x, y)` tuples.
    pub fn from_coords(coords: &[(f64, f64)]) -> TspResult<Self> {
        let points: Vec<Point> = coords.iter().copied().map(Point::from).collect();
        Self::from_points(&points)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: a matrix holds at least two nodes.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between nodes `i` and `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice: distances from node `i` to every node.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Pairs `(i, j)` with `i < j` whose distance is zero.
    pub fn degenerate_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.get(i, j) == 0.0 {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Length of the closed cycle visiting `nodes` in order and returning to
    /// the first one.
    pub fn tour_length(&self, nodes: &[usize]) -> f64 {
        match (nodes.first(), nodes.last()) {
            (Some(&first), Some(&last)) => {
                let open: f64 = nodes.windows(2).map(|w| self.get(w[0], w[1])).sum();
                open + self.get(last, first)
            }
            _ => 0.0,
        }
    }
}

fn fill_row(points: &[Point], i: usize, row: &mut [f64]) {
    let from = &points[i];
    for (j, cell) in row.iter_mut().enumerate() {
        *cell = from.distance(&points[j]);
    }
}
