//! # `relgraph` - Ordered Relation Graphs
//!
//! A small toolkit for treating a finite directed graph as a binary relation over
//! a totally-ordered vertex type, and for walking it in a reproducible order.
//!
//! ## Key Features
//!
//! - **Relation properties**: reflexive, symmetric, transitive, anti-symmetric and
//!   equivalence checks over the owned edge set.
//! - **Equivalence classes**: per-vertex classes and the full partition.
//! - **Root selection**: in-degree-zero vertices, or the minimum of every
//!   equivalence class when the graph is an equivalence relation.
//! - **Deterministic traversals**: iterative and recursive breadth-first and
//!   depth-first search whose visitation order depends only on the vertex order.
//!
//! ## Architecture
//!
//! The crate is layered the same way as its traversals consume it:
//!
//! 1. **Collections** (`Sequence<T>`, `Queue<T>`, `Stack<T>`):
//!    - index-based ring-buffer storage
//!    - FIFO and LIFO views used as traversal frontiers
//!
//! 2. **Graph** (`Edge<T>`, `Graph<T>`):
//!    - vertex and edge sets stored in ordered sets, immutable after construction
//!    - every query takes `&self`; derived state is built per call
//!
//! ### Ordering
//!
//! All ascending-order decisions (root order, neighbour order, queue sorting) go
//! through the vertex type's `Ord` implementation, which must agree with its `Eq`.
//! Edges are stored ordered by `(source, destination)`, so "scan every edge" steps
//! are deterministic as well.
//!
//! ## Example
//!
//! ```rust
//! use relgraph::{Edge, Graph};
//!
//! let graph = Graph::new(
//!     [1, 2, 3, 4],
//!     [Edge::new(1, 2), Edge::new(1, 3), Edge::new(2, 4), Edge::new(3, 4)],
//! );
//!
//! assert_eq!(graph.roots().into_iter().collect::<Vec<_>>(), vec![1]);
//! assert_eq!(graph.iterative_bfs(), vec![1, 2, 3, 4]);
//! assert_eq!(graph.recursive_dfs(), vec![1, 2, 4, 3]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

/// Emits a `tracing` event at `$level`.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        tracing::$level!($($arg)+)
    };
}

/// Logging is compiled out without the `tracing` feature.
#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {};
}

pub mod collections;
pub mod error;
pub mod graph;
pub mod vertex;

pub use collections::{Queue, Sequence, Stack};
pub use error::GraphError;
pub use graph::{Edge, Graph, TraversalKind};
pub use vertex::Vertex;

// Compile-time assertions for the thread-safety claims in the graph docs.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Graph<u32>>();
    assert_send_sync::<Edge<u32>>();
    assert_send_sync::<Sequence<u32>>();
};
