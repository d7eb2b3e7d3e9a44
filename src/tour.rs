//! Hamiltonian cycles and their canonical presentation.
//!
//! A [`Tour`] stores the visiting order as an open sequence; the closing
//! edge from the last node back to the first is implicit and always counted
//! in its length. Only the presentation form returned by
//! [`normalize_cycle`] (and [`Tour::normalized`]) repeats the anchor node at
//! both ends.

use crate::error::{TspError, TspResult};
use crate::geometry::DistanceMatrix;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed tour over node indices, stored without repeating the start.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tour {
    nodes: Vec<usize>,
}

impl Tour {
    /// Wraps a visiting order. The start node must not be repeated at the end.
    pub fn new(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }

    /// Visiting order, without the closing node.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node of the visiting order.
    pub fn start(&self) -> Option<usize> {
        self.nodes.first().copied()
    }

    /// Iterates over every edge, including the closing edge back to the start.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes
            .iter()
            .copied()
            .zip(self.nodes.iter().copied().cycle().skip(1))
    }

    /// Length of the closed cycle under `distances`.
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        distances.tour_length(&self.nodes)
    }

    /// Visiting order with the start node appended at the end.
    pub fn closed(&self) -> Vec<usize> {
        let mut closed = self.nodes.clone();
        if let Some(&start) = self.nodes.first() {
            closed.push(start);
        }
        closed
    }

    /// Checks that the tour is a permutation of `0..n`.
    pub fn validate(&self, n: usize) -> TspResult<()> {
        if self.nodes.len() != n {
            return Err(TspError::InvalidTour {
                reason: format!("expected {n} nodes, got {}", self.nodes.len()),
            });
        }
        let mut seen = vec![false; n];
        for &node in &self.nodes {
            if node >= n {
                return Err(TspError::InvalidTour {
                    reason: format!("node {node} out of range 0..{n}"),
                });
            }
            if seen[node] {
                return Err(TspError::InvalidTour {
                    reason: format!("node {node} visited twice"),
                });
            }
            seen[node] = true;
        }
        Ok(())
    }

    /// The same cycle rotated so that it starts at `anchor`.
    pub fn rotated_to(&self, anchor: usize) -> TspResult<Tour> {
        let pos = self
            .nodes
            .iter()
            .position(|&node| node == anchor)
            .ok_or(TspError::NodeNotInTour { node: anchor })?;
        let mut nodes = Vec::with_capacity(self.nodes.len());
        nodes.extend_from_slice(&self.nodes[pos..]);
        nodes.extend_from_slice(&self.nodes[..pos]);
        Ok(Tour { nodes })
    }

    /// Closed presentation form starting and ending at `anchor`.
    pub fn normalized(&self, anchor: usize) -> TspResult<Vec<usize>> {
        normalize_cycle(&self.nodes, anchor)
    }

    /// Closed form anchored at node 0, labelled from 1 instead of 0.
    pub fn one_based(&self) -> TspResult<Vec<usize>> {
        Ok(self
            .normalized(0)?
            .into_iter()
            .map(|node| node + 1)
            .collect())
    }
}

impl From<Vec<usize>> for Tour {
    fn from(nodes: Vec<usize>) -> Self {
        Tour::new(nodes)
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.closed().iter().map(|n| n.to_string()).collect();
        write!(f, "{}", labels.join(" -> "))
    }
}

/// Rotates a cyclic path so that it starts and ends at `anchor`.
///
/// `path` may be open (`[2, 0, 1]`) or closed with its start repeated at the
/// end (`[2, 0, 1, 2]`). The result is always closed and contains `anchor`
/// exactly once at each end, e.g. `[0, 1, 2, 0]` for both inputs above. Edge
/// order and total length are preserved.
///
/// # Examples
///
/// ```
/// use u_tsp::tour::normalize_cycle;
///
/// assert_eq!(normalize_cycle(&[3, 1, 0, 2, 3], 0).unwrap(), vec![0, 2, 3, 1, 0]);
/// ```
pub fn normalize_cycle(path: &[usize], anchor: usize) -> TspResult<Vec<usize>> {
    let open = match (path.first(), path.last()) {
        (Some(first), Some(last)) if path.len() >= 2 && first == last => &path[..path.len() - 1],
        _ => path,
    };
    let pos = open
        .iter()
        .position(|&node| node == anchor)
        .ok_or(TspError::NodeNotInTour { node: anchor })?;

    let mut normalized = Vec::with_capacity(open.len() + 1);
    normalized.extend_from_slice(&open[pos..]);
    normalized.extend_from_slice(&open[..pos]);
    normalized.push(anchor);
    Ok(normalized)
}
