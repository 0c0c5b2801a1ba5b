//! Ordered visited sets for graph traversals.
//!
//! Traversals over `Graph<T>` key their visited state by vertex value rather than
//! by index, so the set is an ordered set of cloned labels. Keeping the
//! test-and-mark step in one place lets BFS and DFS share the same visited logic.

use std::collections::BTreeSet;

/// Vertices already claimed by a traversal.
pub(crate) struct VisitedSet<T> {
    seen: BTreeSet<T>,
}

impl<T: Ord + Clone> VisitedSet<T> {
    pub(crate) fn new() -> Self {
        Self {
            seen: BTreeSet::new(),
        }
    }

    /// Returns `true` iff this call observed `vertex` as not-yet-visited and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, vertex: &T) -> bool {
        if self.seen.contains(vertex) {
            return false;
        }
        self.seen.insert(vertex.clone())
    }

    /// Marks `vertex` visited whether or not it already was.
    #[inline]
    pub(crate) fn mark(&mut self, vertex: &T) {
        if !self.seen.contains(vertex) {
            self.seen.insert(vertex.clone());
        }
    }

    #[inline]
    pub(crate) fn is_visited(&self, vertex: &T) -> bool {
        self.seen.contains(vertex)
    }
}
