//! Relation properties of a graph's edge set.
//!
//! A graph `G = (V, E)` is read as the binary relation `E ⊆ V × V`. The checks
//! below are pure queries over the owned sets.

use std::collections::BTreeSet;

use super::{Edge, Graph};
use crate::Vertex;

impl<T: Vertex> Graph<T> {
    /// Checks that every vertex has a self-loop.
    pub fn is_reflexive(&self) -> bool {
        self.vertices()
            .all(|v| self.contains_edge(&Edge::new(v.clone(), v.clone())))
    }

    /// Checks that every edge `a -> b` with `a != b` has its reverse `b -> a`.
    pub fn is_symmetric(&self) -> bool {
        self.edges()
            .all(|e| e.is_self_loop() || self.contains_edge(&e.reversed()))
    }

    /// Checks that `a -> b` and `b -> c` always imply `a -> c`.
    ///
    /// This is a pairwise scan over the edge set, \(O(m^2)\) membership tests.
    pub fn is_transitive(&self) -> bool {
        self.edges().all(|first| {
            self.edges()
                .filter(|second| second.source() == first.destination())
                .all(|second| {
                    self.contains_edge(&Edge::new(
                        first.source().clone(),
                        second.destination().clone(),
                    ))
                })
        })
    }

    /// Checks that no edge `a -> b` with `a != b` has its reverse `b -> a`.
    pub fn is_anti_symmetric(&self) -> bool {
        self.edges()
            .all(|e| e.is_self_loop() || !self.contains_edge(&e.reversed()))
    }

    /// Checks that the relation is reflexive, symmetric and transitive.
    pub fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }

    /// Returns the equivalence class of `vertex`.
    ///
    /// The class is `vertex` plus every vertex sharing an edge with it in either
    /// direction. When the graph is not an equivalence relation the result is
    /// empty. `vertex` is not required to be in the vertex set.
    pub fn equivalence_class(&self, vertex: &T) -> BTreeSet<T> {
        if !self.is_equivalence() {
            return BTreeSet::new();
        }
        self.class_of(vertex)
    }

    /// Returns every distinct equivalence class, ordered by smallest member.
    ///
    /// Empty when the graph is not an equivalence relation. Otherwise the classes
    /// are pairwise disjoint and their union is the vertex set.
    pub fn equivalence_classes(&self) -> Vec<BTreeSet<T>> {
        if !self.is_equivalence() {
            return Vec::new();
        }

        let mut seen = BTreeSet::new();
        let mut classes = Vec::new();
        // Vertices come out ascending, so each new class starts at its minimum.
        for vertex in self.vertices() {
            if seen.contains(vertex) {
                continue;
            }
            let class = self.class_of(vertex);
            seen.extend(class.iter().cloned());
            classes.push(class);
        }
        classes
    }

    /// Class extraction without the equivalence guard.
    pub(crate) fn class_of(&self, vertex: &T) -> BTreeSet<T> {
        let mut class = BTreeSet::new();
        class.insert(vertex.clone());
        for edge in self.edges() {
            if edge.source() == vertex {
                class.insert(edge.destination().clone());
            } else if edge.destination() == vertex {
                class.insert(edge.source().clone());
            }
        }
        class
    }
}
