//! The owned directed graph.
//!
//! A `Graph` is a vertex set plus an edge set, both fixed at construction. The
//! relation checks, root selection and traversals live in sibling modules as
//! further `impl` blocks on this type.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `contains_vertex` / `contains_edge` | \(O(\log n)\) / \(O(\log m)\) | ordered sets |
//! | `out_neighbors` / `out_degree` | \(O(m)\) | scans the edge set |
//! | `in_degree` | \(O(m)\) | scans the edge set |

use std::collections::BTreeSet;

use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};

use super::Edge;
use crate::{GraphError, Vertex};

/// A finite directed graph over an ordered vertex type.
///
/// Edges may name vertices outside the vertex set when built with
/// [`Graph::new`]; root selection has a dedicated rule for such dangling
/// sources. Use [`Graph::try_new`] to reject them instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Vertex + Deserialize<'de>"
))]
pub struct Graph<T> {
    vertices: BTreeSet<T>,
    edges: BTreeSet<Edge<T>>,
}

impl<T: Vertex> Graph<T> {
    /// Creates a graph from any collections of vertices and edges.
    ///
    /// Duplicates collapse. Edge endpoints are not validated.
    pub fn new<V, E>(vertices: V, edges: E) -> Self
    where
        V: IntoIterator<Item = T>,
        E: IntoIterator<Item = Edge<T>>,
    {
        Self {
            vertices: vertices.into_iter().collect(),
            edges: edges.into_iter().collect(),
        }
    }

    /// Creates a graph, rejecting any edge with an endpoint outside `vertices`.
    ///
    /// # Errors
    /// Returns [`GraphError::DanglingEdge`] carrying the first offending edge in
    /// edge order.
    pub fn try_new<V, E>(vertices: V, edges: E) -> Result<Self, GraphError<T>>
    where
        V: IntoIterator<Item = T>,
        E: IntoIterator<Item = Edge<T>>,
    {
        let graph = Self::new(vertices, edges);
        if let Some(edge) = graph.edges.iter().find(|e| {
            !graph.vertices.contains(e.source()) || !graph.vertices.contains(e.destination())
        }) {
            return Err(GraphError::DanglingEdge(edge.clone()));
        }
        Ok(graph)
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of distinct edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates the vertices in ascending order.
    pub fn vertices(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.vertices.iter()
    }

    /// Iterates the edges in `(source, destination)` order.
    pub fn edges(&self) -> impl DoubleEndedIterator<Item = &Edge<T>> + ExactSizeIterator + '_ {
        self.edges.iter()
    }

    /// Checks if `vertex` is in the vertex set.
    #[inline]
    pub fn contains_vertex(&self, vertex: &T) -> bool {
        self.vertices.contains(vertex)
    }

    /// Checks if the edge `source -> destination` exists.
    #[inline]
    pub fn contains_edge(&self, edge: &Edge<T>) -> bool {
        self.edges.contains(edge)
    }

    /// Destinations of every edge leaving `vertex`, in edge order (ascending).
    pub(crate) fn successors<'a>(&'a self, vertex: &'a T) -> impl Iterator<Item = &'a T> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.source() == vertex)
            .map(Edge::destination)
    }

    /// Returns the out-neighbors of `vertex` in ascending order.
    pub fn out_neighbors(&self, vertex: &T) -> Vec<T> {
        let mut neighbors: Vec<T> = self.successors(vertex).cloned().collect();
        neighbors.sort();
        neighbors
    }

    /// Returns the number of edges leaving `vertex`.
    pub fn out_degree(&self, vertex: &T) -> usize {
        self.successors(vertex).count()
    }

    /// Returns the number of edges entering `vertex`, self-loops included.
    pub fn in_degree(&self, vertex: &T) -> usize {
        self.edges.iter().filter(|e| e.destination() == vertex).count()
    }
}

impl<T: Vertex + FromPrimitive> Graph<T> {
    /// Creates a graph from adjacency lists.
    ///
    /// Vertex `i` is labelled `T::from_usize(i)`; `adjacency[i]` lists the
    /// indices it points to.
    ///
    /// # Errors
    /// - [`GraphError::LabelOutOfRange`] if an index does not fit in `T`.
    /// - [`GraphError::DanglingEdge`] if a neighbor index is not below
    ///   `adjacency.len()`.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self, GraphError<T>> {
        let label = |index: usize| T::from_usize(index).ok_or(GraphError::LabelOutOfRange(index));

        let vertices = (0..adjacency.len())
            .map(label)
            .collect::<Result<BTreeSet<T>, _>>()?;

        let mut edges = BTreeSet::new();
        for (u, nbrs) in adjacency.iter().enumerate() {
            let source = label(u)?;
            for &v in nbrs {
                edges.insert(Edge::new(source.clone(), label(v)?));
            }
        }

        Self::try_new(vertices, edges)
    }
}

impl<T: Vertex> Default for Graph<T> {
    fn default() -> Self {
        Self {
            vertices: BTreeSet::new(),
            edges: BTreeSet::new(),
        }
    }
}
