//! CLI command implementations.

use crate::graph::{bfs, build_path, DiGraph};
use crate::types::{GraphError, GraphResult, Owner};

/// Values and edges of the built-in demonstration graph: six nodes keyed
/// 0..=5 with alternating owners, wired so that two equally short routes
/// exist from 0 to 5 and the one through node 1 wins the tie.
const DEMO_VALUES: [u64; 6] = [111, 222, 333, 444, 555, 666];
const DEMO_EDGES: [(u64, u64); 6] = [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5)];

/// Run the built-in demonstration graph and report the route.
pub fn cmd_demo(from: u64, to: u64, json: bool) -> GraphResult<()> {
    let mut graph = DiGraph::with_capacity(DEMO_VALUES.len());
    for (i, value) in DEMO_VALUES.iter().enumerate() {
        let owner = if i % 2 == 0 { Owner::Local } else { Owner::Remote };
        graph.add_node(i as u64, value, owner);
    }
    for &(src, dst) in &DEMO_EDGES {
        graph.add_edge(src, dst);
    }
    report_route(&graph, from, to, json)
}

/// Build a graph from `KEY:OWNER` node specs and `SRC,DST` edge specs and
/// report the route between `from` and `to`.
pub fn cmd_route(
    nodes: &[String],
    edges: &[String],
    from: u64,
    to: u64,
    json: bool,
) -> GraphResult<()> {
    let node_specs: Vec<(u64, Owner)> = nodes
        .iter()
        .map(|s| parse_node_spec(s))
        .collect::<GraphResult<_>>()?;
    let edge_specs: Vec<(u64, u64)> = edges
        .iter()
        .map(|s| parse_edge_spec(s))
        .collect::<GraphResult<_>>()?;

    // Route nodes carry no payload; each key doubles as its own value.
    let values: Vec<u64> = node_specs.iter().map(|&(key, _)| key).collect();

    let mut graph = DiGraph::with_capacity(node_specs.len());
    for (&(key, owner), value) in node_specs.iter().zip(&values) {
        graph.add_node(key, value, owner);
    }
    for &(src, dst) in &edge_specs {
        // Endpoints come from untrusted input, so check them here instead of
        // letting add_edge's trusted-caller assertion fire.
        for key in [src, dst] {
            if !graph.contains_key(key) {
                return Err(GraphError::NodeNotFound(key));
            }
        }
        graph.add_edge(src, dst);
    }
    report_route(&graph, from, to, json)
}

/// Parse a `KEY:OWNER` node spec, e.g. `7:local`.
pub fn parse_node_spec(spec: &str) -> GraphResult<(u64, Owner)> {
    let (key, owner) = spec
        .split_once(':')
        .ok_or_else(|| GraphError::InvalidNodeSpec(spec.to_string()))?;
    let key: u64 = key
        .trim()
        .parse()
        .map_err(|_| GraphError::InvalidNodeSpec(spec.to_string()))?;
    let owner = Owner::from_name(owner.trim())
        .ok_or_else(|| GraphError::UnknownOwner(owner.trim().to_string()))?;
    Ok((key, owner))
}

/// Parse a `SRC,DST` edge spec, e.g. `0,1`.
pub fn parse_edge_spec(spec: &str) -> GraphResult<(u64, u64)> {
    let (src, dst) = spec
        .split_once(',')
        .ok_or_else(|| GraphError::InvalidEdgeSpec(spec.to_string()))?;
    let src: u64 = src
        .trim()
        .parse()
        .map_err(|_| GraphError::InvalidEdgeSpec(spec.to_string()))?;
    let dst: u64 = dst
        .trim()
        .parse()
        .map_err(|_| GraphError::InvalidEdgeSpec(spec.to_string()))?;
    Ok((src, dst))
}

/// Run BFS from `from`, reconstruct the path to `to`, and print both.
fn report_route<V>(graph: &DiGraph<'_, V>, from: u64, to: u64, json: bool) -> GraphResult<()> {
    for key in [from, to] {
        if !graph.contains_key(key) {
            return Err(GraphError::NodeNotFound(key));
        }
    }

    let tree = bfs(graph, from);
    let path = build_path(graph, from, to, &tree);
    let distance = graph.index_of(to).and_then(|pos| tree.distance(pos));

    if json {
        let info = serde_json::json!({
            "from": from,
            "from_owner": graph.owner_of(from).name(),
            "to": to,
            "to_owner": graph.owner_of(to).name(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "reached": tree.reached_count(),
            "distance": distance,
            "path": path,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        match distance {
            Some(d) => println!("dist({from}->{to}) = {d}"),
            None => println!("dist({from}->{to}) = -1"),
        }
        if path.is_empty() {
            println!("path: (none)");
        } else {
            let keys: Vec<String> = path.iter().map(u64::to_string).collect();
            println!("path: {}", keys.join(" "));
        }
    }
    Ok(())
}
