//! Ordered directed graphs read as binary relations.
//!
//! The graph type is split across modules by concern:
//! - `digraph`: storage, construction and neighborhood queries
//! - `relation`: relation-property checks and equivalence classes
//! - `roots`: root selection
//! - `traversal`: breadth-first and depth-first orders

pub mod digraph;
pub mod edge;
pub mod relation;
pub mod roots;
pub mod traversal;
pub(crate) mod access;

pub use digraph::Graph;
pub use edge::Edge;
pub use traversal::TraversalKind;
