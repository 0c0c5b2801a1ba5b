//! Directed edges.

use serde::{Deserialize, Serialize};

/// A directed edge `source -> destination`.
///
/// Equality is structural over both endpoints. Edges order lexicographically by
/// `(source, destination)`, which is the order a [`Graph`](super::Graph) scans them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge<T> {
    source: T,
    destination: T,
}

impl<T> Edge<T> {
    /// Creates the edge `source -> destination`.
    pub const fn new(source: T, destination: T) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// The vertex this edge leaves.
    #[inline]
    pub const fn source(&self) -> &T {
        &self.source
    }

    /// The vertex this edge enters.
    #[inline]
    pub const fn destination(&self) -> &T {
        &self.destination
    }

    /// Splits the edge into `(source, destination)`.
    pub fn into_parts(self) -> (T, T) {
        (self.source, self.destination)
    }
}

impl<T: PartialEq> Edge<T> {
    /// Returns `true` if both endpoints are the same vertex.
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl<T: Clone> Edge<T> {
    /// The edge pointing the other way.
    pub fn reversed(&self) -> Self {
        Self::new(self.destination.clone(), self.source.clone())
    }
}

impl<T> From<(T, T)> for Edge<T> {
    fn from((source, destination): (T, T)) -> Self {
        Self::new(source, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_equality_is_structural() {
        assert_eq!(Edge::new(1, 2), Edge::new(1, 2));
        assert_ne!(Edge::new(1, 2), Edge::new(2, 1));
        assert_eq!(Edge::from((3, 4)), Edge::new(3, 4));
    }

    #[test]
    fn edge_reversed_and_self_loop() {
        let e = Edge::new(1, 2);
        assert_eq!(e.reversed(), Edge::new(2, 1));
        assert!(!e.is_self_loop());
        assert!(Edge::new(7, 7).is_self_loop());
        assert_eq!(Edge::new(7, 7).reversed(), Edge::new(7, 7));
    }

    #[test]
    fn edges_order_by_source_then_destination() {
        let mut edges = vec![Edge::new(2, 1), Edge::new(1, 3), Edge::new(1, 2)];
        edges.sort();
        assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(1, 3), Edge::new(2, 1)]);
    }
}
