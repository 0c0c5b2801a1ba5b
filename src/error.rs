//! Errors reported by the strict graph constructors.
//!
//! Every query on a constructed [`Graph`](crate::Graph) is total; only building a
//! graph under validation can fail.

use core::fmt;

use crate::graph::Edge;

/// The error type for rejected graph input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError<T> {
    /// An edge endpoint is not a member of the vertex set.
    DanglingEdge(Edge<T>),
    /// An adjacency index cannot be represented as the vertex type.
    LabelOutOfRange(usize),
}

impl<T: fmt::Debug> fmt::Display for GraphError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::DanglingEdge(edge) => write!(
                f,
                "edge {:?} -> {:?} references a vertex outside the graph",
                edge.source(),
                edge.destination()
            ),
            GraphError::LabelOutOfRange(index) => {
                write!(f, "adjacency index {index} does not fit the vertex type")
            }
        }
    }
}

impl<T: fmt::Debug> std::error::Error for GraphError<T> {}
