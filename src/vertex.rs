//! The vertex bound shared by every graph type.

use core::fmt::Debug;

/// A graph vertex label.
///
/// Vertices are compared with their `Ord` implementation wherever an ascending
/// order is required, so that order **must** be consistent with `Eq`:
/// `a == b` iff `a.cmp(&b) == Ordering::Equal`. Every std integer type
/// qualifies, which is the domain the traversal orderings are designed for.
///
/// This trait is blanket-implemented; it only names the bound.
pub trait Vertex: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Vertex for T {}
