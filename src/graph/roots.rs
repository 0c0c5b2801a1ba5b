//! Root selection.
//!
//! A root is a vertex with no incoming edge. When the graph is an equivalence
//! relation every vertex has a self-loop, so that rule would select nothing;
//! roots are then the smallest member of each equivalence class instead.

use std::collections::{BTreeMap, BTreeSet};

use super::Graph;
use crate::Vertex;

impl<T: Vertex> Graph<T> {
    /// Returns the traversal roots in ascending order.
    ///
    /// - Not an equivalence relation: every vertex that is not the destination of
    ///   an edge. A destination reached from a source outside the vertex set is
    ///   excluded as well.
    /// - Equivalence relation: the minimum of every vertex's equivalence class.
    pub fn roots(&self) -> BTreeSet<T> {
        if self.is_equivalence() {
            let roots: BTreeSet<T> = self
                .vertices()
                .filter_map(|v| self.class_of(v).pop_first())
                .collect();
            trace_event!(debug, roots = roots.len(), policy = "class-minimum", "selected roots");
            return roots;
        }

        let mut in_degree: BTreeMap<&T, usize> = self.vertices().map(|v| (v, 0)).collect();
        for edge in self.edges() {
            *in_degree.entry(edge.destination()).or_insert(0) += 1;
        }

        let mut roots: BTreeSet<T> = self.vertices().cloned().collect();
        for edge in self.edges() {
            let destination = edge.destination();
            let has_incoming = in_degree.get(destination).is_some_and(|&d| d > 0);
            if has_incoming || !self.contains_vertex(edge.source()) {
                roots.remove(destination);
            }
        }

        trace_event!(debug, roots = roots.len(), policy = "in-degree", "selected roots");
        roots
    }
}
