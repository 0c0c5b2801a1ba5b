//! Breadth-first search, iterative and recursive.
//!
//! Both variants share one piece of state: a root queue seeded with every root and
//! a child queue for everything discovered after. While roots are being expanded,
//! children are inserted in ascending order, so the first wave below the roots is
//! visited smallest-first no matter which root found it. Once the root queue runs
//! dry the child queue is drained as a plain FIFO, with neighbors appended in edge
//! order and no further sorting.

use std::collections::BTreeSet;

use crate::collections::Queue;
use crate::graph::access::visited::VisitedSet;
use crate::graph::Graph;
use crate::Vertex;

struct BfsState<T> {
    order: Vec<T>,
    visited: VisitedSet<T>,
    root_queue: Queue<T>,
    child_queue: Queue<T>,
}

impl<T: Vertex> BfsState<T> {
    /// Queues every root, marking each visited on the way in.
    fn seeded(roots: BTreeSet<T>) -> Self {
        let mut state = Self {
            order: Vec::with_capacity(roots.len()),
            visited: VisitedSet::new(),
            root_queue: Queue::new(),
            child_queue: Queue::new(),
        };
        for root in roots {
            if state.visited.try_visit(&root) {
                state.root_queue.enqueue(root);
            }
        }
        state
    }

    fn expand_root(&mut self, graph: &Graph<T>, vertex: T) {
        for next in graph.successors(&vertex) {
            if self.visited.try_visit(next) {
                self.child_queue.enqueue_ordered(next.clone());
            }
        }
        self.order.push(vertex);
    }

    fn expand_child(&mut self, graph: &Graph<T>, vertex: T) {
        for next in graph.successors(&vertex) {
            if self.visited.try_visit(next) {
                self.child_queue.enqueue(next.clone());
            }
        }
        self.order.push(vertex);
    }
}

impl<T: Vertex> Graph<T> {
    /// Breadth-first order from every root, using an explicit loop.
    ///
    /// Vertices unreachable from the roots are omitted.
    pub fn iterative_bfs(&self) -> Vec<T> {
        let mut state = BfsState::seeded(self.roots());
        trace_event!(trace, roots = state.root_queue.len(), "iterative bfs start");

        loop {
            if let Some(vertex) = state.root_queue.dequeue() {
                state.expand_root(self, vertex);
            } else if let Some(vertex) = state.child_queue.dequeue() {
                state.expand_child(self, vertex);
            } else {
                break;
            }
        }

        trace_event!(trace, visited = state.order.len(), "iterative bfs done");
        state.order
    }

    /// Breadth-first order from every root, one recursive step per phase.
    ///
    /// Produces the same order as [`iterative_bfs`](Self::iterative_bfs). The first
    /// step expands every root and the next drains the child queue, so recursion
    /// depth stays constant regardless of how many roots or vertices the graph has.
    pub fn recursive_bfs(&self) -> Vec<T> {
        let mut state = BfsState::seeded(self.roots());
        trace_event!(trace, roots = state.root_queue.len(), "recursive bfs start");

        self.bfs_step(&mut state);

        trace_event!(trace, visited = state.order.len(), "recursive bfs done");
        state.order
    }

    fn bfs_step(&self, state: &mut BfsState<T>) {
        // The root queue never refills, so one step can empty it.
        if !state.root_queue.is_empty() {
            while let Some(vertex) = state.root_queue.dequeue() {
                state.expand_root(self, vertex);
            }
        } else if state.child_queue.is_empty() {
            return;
        } else {
            while let Some(vertex) = state.child_queue.dequeue() {
                state.expand_child(self, vertex);
            }
        }
        self.bfs_step(state);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Edge, Graph};

    fn graph(vertices: &[u32], edges: &[(u32, u32)]) -> Graph<u32> {
        Graph::new(vertices.iter().copied(), edges.iter().copied().map(Edge::from))
    }

    fn both(g: &Graph<u32>) -> Vec<u32> {
        let iterative = g.iterative_bfs();
        assert_eq!(iterative, g.recursive_bfs(), "bfs variants disagree");
        iterative
    }

    #[test]
    fn bfs_diamond() {
        let g = graph(&[1, 2, 3, 4], &[(1, 2), (1, 3), (2, 4), (3, 4)]);
        assert_eq!(both(&g), vec![1, 2, 3, 4]);
    }

    #[test]
    fn bfs_first_wave_is_sorted_across_roots() {
        // Root 1 discovers 4 and 6, root 2 discovers 3 and 5.
        let g = graph(&[1, 2, 3, 4, 5, 6], &[(1, 4), (1, 6), (2, 3), (2, 5)]);
        assert_eq!(both(&g), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn bfs_later_waves_keep_discovery_order() {
        // Wave one is [2, 3]. 2 discovers 9, then 3 discovers 5; no re-sort.
        let g = graph(
            &[1, 2, 3, 5, 9],
            &[(1, 2), (1, 3), (2, 9), (3, 5)],
        );
        assert_eq!(both(&g), vec![1, 2, 3, 9, 5]);
    }

    #[test]
    fn bfs_omits_unreachable_vertices() {
        // 3 <-> 4 is a cycle nobody enters.
        let g = graph(&[1, 2, 3, 4], &[(1, 2), (3, 4), (4, 3)]);
        assert_eq!(both(&g), vec![1, 2]);
    }

    #[test]
    fn bfs_over_equivalence_starts_at_class_minimums() {
        let g = graph(&[1, 2, 3], &[(1, 1), (2, 2), (3, 3), (1, 2), (2, 1)]);
        assert_eq!(both(&g), vec![1, 3, 2]);
    }

    #[test]
    fn bfs_many_isolated_roots() {
        let g: Graph<u32> = Graph::new(0..200_000u32, []);
        let order = g.recursive_bfs();
        assert_eq!(order.len(), 200_000);
        assert_eq!(order, g.iterative_bfs());
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn bfs_empty_graph() {
        assert!(both(&graph(&[], &[])).is_empty());
    }
}
