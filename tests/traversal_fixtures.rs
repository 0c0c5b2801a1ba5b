//! Traversal orders checked against JSON fixtures under `tests/fixtures`.

use std::path::Path;

use anyhow::{Context, Result};
use relgraph::{Graph, TraversalKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Fixture {
    graph: Graph<u32>,
    roots: Vec<u32>,
    bfs: Vec<u32>,
    dfs: Vec<u32>,
}

fn load(name: &str) -> Result<Fixture> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let content =
        std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn check(name: &str) -> Result<()> {
    let fixture = load(name)?;
    let graph = &fixture.graph;

    assert_eq!(graph.roots().into_iter().collect::<Vec<_>>(), fixture.roots, "{name}: roots");
    for kind in TraversalKind::ALL {
        let expected = if kind.is_breadth_first() { &fixture.bfs } else { &fixture.dfs };
        assert_eq!(&graph.traverse(kind), expected, "{name}: {kind}");
    }
    Ok(())
}

#[test]
fn diamond_fixture() -> Result<()> {
    check("diamond.json")
}

#[test]
fn equivalence_fixture() -> Result<()> {
    check("two_blocks.json")
}

#[test]
fn forest_fixture() -> Result<()> {
    check("forest.json")
}

#[test]
fn graph_survives_json_round_trip() -> Result<()> {
    let fixture = load("forest.json")?;
    let encoded = serde_json::to_string(&fixture.graph)?;
    let decoded: Graph<u32> = serde_json::from_str(&encoded)?;
    assert_eq!(decoded, fixture.graph);
    Ok(())
}
