//! Depth-first search, iterative and recursive.
//!
//! Roots are taken in ascending order and each vertex descends into its
//! out-neighbors smallest first. A vertex already reached from an earlier root is
//! not visited again.

use crate::collections::Stack;
use crate::graph::access::visited::VisitedSet;
use crate::graph::Graph;
use crate::Vertex;

impl<T: Vertex> Graph<T> {
    /// Depth-first preorder from every root, using an explicit stack.
    ///
    /// Neighbors are pushed largest first so the smallest is popped next.
    pub fn iterative_dfs(&self) -> Vec<T> {
        let roots = self.roots();
        trace_event!(trace, roots = roots.len(), "iterative dfs start");

        let mut order = Vec::new();
        let mut visited = VisitedSet::new();
        let mut stack = Stack::new();

        for root in roots {
            if visited.is_visited(&root) {
                continue;
            }
            stack.push(root);

            while let Some(vertex) = stack.pop() {
                if !visited.try_visit(&vertex) {
                    continue;
                }
                for next in self.out_neighbors(&vertex).into_iter().rev() {
                    if !visited.is_visited(&next) {
                        stack.push(next);
                    }
                }
                order.push(vertex);
            }
        }

        trace_event!(trace, visited = order.len(), "iterative dfs done");
        order
    }

    /// Depth-first preorder from every root, recursing per vertex.
    ///
    /// Produces the same order as [`iterative_dfs`](Self::iterative_dfs). Recursion
    /// depth equals the longest descent path, so very deep graphs are better served
    /// by the iterative variant.
    pub fn recursive_dfs(&self) -> Vec<T> {
        let roots = self.roots();
        trace_event!(trace, roots = roots.len(), "recursive dfs start");

        let mut order = Vec::new();
        let mut visited = VisitedSet::new();
        for root in roots {
            if !visited.is_visited(&root) {
                self.dfs_visit(root, &mut visited, &mut order);
            }
        }

        trace_event!(trace, visited = order.len(), "recursive dfs done");
        order
    }

    fn dfs_visit(&self, vertex: T, visited: &mut VisitedSet<T>, order: &mut Vec<T>) {
        visited.mark(&vertex);
        let neighbors = self.out_neighbors(&vertex);
        order.push(vertex);

        for next in neighbors {
            if !visited.is_visited(&next) {
                self.dfs_visit(next, visited, order);
            }
        }
    }
}
