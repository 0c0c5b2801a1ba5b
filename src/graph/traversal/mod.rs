//! Deterministic traversals.
//!
//! Every traversal starts from [`Graph::roots`] and returns the vertices in visit
//! order. The order depends only on the vertex order and the edge set, never on
//! insertion order, so repeated calls on the same graph return identical results.

mod bfs;
mod dfs;

use core::fmt;

use super::Graph;
use crate::Vertex;

/// Selects one of the four traversal algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalKind {
    /// Breadth-first, explicit loop.
    IterativeBfs,
    /// Breadth-first, recursive.
    RecursiveBfs,
    /// Depth-first, explicit stack.
    IterativeDfs,
    /// Depth-first, recursive.
    RecursiveDfs,
}

impl TraversalKind {
    /// All traversal kinds, breadth-first first.
    pub const ALL: [TraversalKind; 4] = [
        TraversalKind::IterativeBfs,
        TraversalKind::RecursiveBfs,
        TraversalKind::IterativeDfs,
        TraversalKind::RecursiveDfs,
    ];

    /// Returns `true` for the two breadth-first kinds.
    pub const fn is_breadth_first(self) -> bool {
        matches!(self, TraversalKind::IterativeBfs | TraversalKind::RecursiveBfs)
    }
}

impl fmt::Display for TraversalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TraversalKind::IterativeBfs => "iterative-bfs",
            TraversalKind::RecursiveBfs => "recursive-bfs",
            TraversalKind::IterativeDfs => "iterative-dfs",
            TraversalKind::RecursiveDfs => "recursive-dfs",
        })
    }
}

impl<T: Vertex> Graph<T> {
    /// Runs the traversal selected by `kind`.
    pub fn traverse(&self, kind: TraversalKind) -> Vec<T> {
        match kind {
            TraversalKind::IterativeBfs => self.iterative_bfs(),
            TraversalKind::RecursiveBfs => self.recursive_bfs(),
            TraversalKind::IterativeDfs => self.iterative_dfs(),
            TraversalKind::RecursiveDfs => self.recursive_dfs(),
        }
    }
}
