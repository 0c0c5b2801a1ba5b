//! Relation checks, equivalence classes and roots through the public API.

use std::collections::BTreeSet;

use relgraph::{Edge, Graph};

fn graph(vertices: &[u32], edges: &[(u32, u32)]) -> Graph<u32> {
    Graph::new(vertices.iter().copied(), edges.iter().copied().map(Edge::from))
}

#[test]
fn test_dag_roots() {
    let g = graph(&[1, 2, 3], &[(1, 2), (2, 3)]);
    assert_eq!(g.roots(), BTreeSet::from([1]));
}

#[test]
fn test_equivalence_roots() {
    let g = graph(&[1, 2, 3], &[(1, 1), (2, 2), (3, 3), (1, 2), (2, 1)]);
    assert_eq!(g.roots(), BTreeSet::from([1, 3]));
}

#[test]
fn test_symmetric_after_adding_reverse() {
    let edges = vec![(1, 2)];
    assert!(!graph(&[1, 2], &edges).is_symmetric());

    let mut edges = edges;
    edges.push((2, 1));
    assert!(graph(&[1, 2], &edges).is_symmetric());
}

#[test]
fn test_equivalence_is_conjunction() {
    let cases: Vec<Graph<u32>> = vec![
        graph(&[1, 2], &[(1, 1), (2, 2)]),
        graph(&[1, 2], &[(1, 1), (2, 2), (1, 2)]),
        graph(&[1, 2], &[(1, 2), (2, 1)]),
        graph(&[1, 2, 3], &[(1, 1), (2, 2), (3, 3), (1, 2), (2, 3), (2, 1), (3, 2)]),
        graph(&[1, 2, 3], &[(1, 1), (2, 2), (3, 3), (1, 2), (2, 1)]),
    ];
    for g in &cases {
        assert_eq!(
            g.is_equivalence(),
            g.is_reflexive() && g.is_symmetric() && g.is_transitive(),
            "{g:?}"
        );
    }
    assert!(cases[0].is_equivalence());
    assert!(!cases[1].is_equivalence());
    assert!(!cases[2].is_equivalence());
    assert!(!cases[3].is_equivalence());
    assert!(cases[4].is_equivalence());
}

#[test]
fn test_partition_covers_vertices() {
    let g = graph(
        &[1, 2, 3, 4, 5],
        &[
            (1, 1), (2, 2), (3, 3), (4, 4), (5, 5),
            (1, 3), (3, 1), (3, 5), (5, 3), (1, 5), (5, 1),
            (2, 4), (4, 2),
        ],
    );
    assert!(g.is_equivalence());

    let classes = g.equivalence_classes();
    assert_eq!(classes, vec![BTreeSet::from([1, 3, 5]), BTreeSet::from([2, 4])]);

    for v in g.vertices() {
        let class = g.equivalence_class(v);
        assert!(classes.contains(&class));
        for w in &class {
            assert_eq!(g.equivalence_class(w), class);
        }
    }

    let union: BTreeSet<u32> = classes.into_iter().flatten().collect();
    assert_eq!(union, g.vertices().copied().collect::<BTreeSet<_>>());
    assert_eq!(g.roots(), BTreeSet::from([1, 2]));
}

#[test]
fn test_symmetric_and_anti_symmetric_only_with_self_loops() {
    let loops = graph(&[1, 2, 3], &[(1, 1), (3, 3)]);
    assert!(loops.is_symmetric() && loops.is_anti_symmetric());

    let mixed = graph(&[1, 2], &[(1, 1), (1, 2)]);
    assert!(!(mixed.is_symmetric() && mixed.is_anti_symmetric()));

    let pair = graph(&[1, 2], &[(1, 2), (2, 1)]);
    assert!(pair.is_symmetric());
    assert!(!pair.is_anti_symmetric());
}

#[test]
fn test_string_vertices_use_their_own_order() {
    let g = Graph::new(
        ["b", "a", "c"],
        [Edge::new("a", "c"), Edge::new("b", "c")],
    );
    assert_eq!(g.roots().into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(g.iterative_dfs(), vec!["a", "c", "b"]);
}
