//! Graph traversal algorithms (BFS) and shortest-path reconstruction.

use std::collections::VecDeque;

use log::debug;

use super::DiGraph;

/// Shortest-path tree produced by [`bfs`] for a fixed source.
///
/// Distances and parents are recorded by node position (index into
/// [`DiGraph::nodes`]) as of the moment the tree was computed. The source is
/// its own parent, the root sentinel that [`build_path`] walks back to. A
/// tree is a snapshot: it stays valid on its own but goes stale if the graph
/// mutates afterward, and nothing tracks that for you.
#[derive(Debug, Clone)]
pub struct BfsTree {
    /// The source key the tree was computed from.
    source: u64,
    /// Shortest distance in edge count per node position; `None` = unreached.
    dist: Vec<Option<u32>>,
    /// Predecessor position on a shortest path; the source points at itself,
    /// unreached nodes have `None`.
    parent: Vec<Option<usize>>,
}

impl BfsTree {
    /// The source key this tree was computed from.
    pub fn source(&self) -> u64 {
        self.source
    }

    /// Shortest distance from the source to the node at `pos`, in edge
    /// count. `None` if the node was not reached.
    pub fn distance(&self, pos: usize) -> Option<u32> {
        self.dist.get(pos).copied().flatten()
    }

    /// Position of the predecessor on a shortest path to `pos`. The source
    /// is its own parent; unreached nodes have no parent.
    pub fn parent(&self, pos: usize) -> Option<usize> {
        self.parent.get(pos).copied().flatten()
    }

    /// Whether the node at `pos` was reached from the source.
    pub fn reached(&self, pos: usize) -> bool {
        self.distance(pos).is_some()
    }

    /// Number of node positions covered by this tree (the graph's node count
    /// at computation time).
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Whether the tree covers no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// How many nodes were reached from the source, the source included.
    pub fn reached_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }
}

/// Compute shortest-path distances and parents from `source_key` over all
/// nodes using unweighted BFS.
///
/// Nodes are settled in FIFO order; each dequeued node's out-edges are
/// followed in insertion order, and a node's distance is fixed on first
/// visit. That makes the result deterministic for a fixed graph and source,
/// with shortest-path ties won by whichever edge was inserted first.
///
/// Edge targets whose key is not in the graph are skipped silently; this is
/// the one place a dangling key is tolerated on the read path.
///
/// # Panics
///
/// Panics if `source_key` is not in the graph.
pub fn bfs<V>(graph: &DiGraph<'_, V>, source_key: u64) -> BfsTree {
    let src = match graph.index_of(source_key) {
        Some(pos) => pos,
        None => panic!("bfs source key {source_key} is not in the graph"),
    };

    let n = graph.node_count();
    let mut dist: Vec<Option<u32>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut queue: VecDeque<(usize, u32)> = VecDeque::new();

    dist[src] = Some(0);
    parent[src] = Some(src);
    queue.push_back((src, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for &target_key in graph.nodes()[current].children() {
            // Dangling targets are skipped, not an error.
            let Some(target) = graph.index_of(target_key) else {
                continue;
            };
            if dist[target].is_none() {
                dist[target] = Some(depth + 1);
                parent[target] = Some(current);
                queue.push_back((target, depth + 1));
            }
        }
    }

    let tree = BfsTree {
        source: source_key,
        dist,
        parent,
    };
    debug!(
        "bfs from key {source_key}: reached {}/{} nodes",
        tree.reached_count(),
        n
    );
    tree
}

/// Reconstruct the key sequence of a shortest path from `src_key` to
/// `dst_key` out of a [`BfsTree`].
///
/// Walks parent positions backward from the destination until it hits the
/// root sentinel (a node that is its own parent), then reverses. Returns an
/// empty vector (distinct from the single-node path `[src_key]`) when:
///
/// - either key is absent from the graph,
/// - the tree does not line up with the graph (stale snapshot),
/// - the destination was never reached, or
/// - the walk ends at a root other than `src_key`, i.e. the tree was
///   computed from a different source than the caller claims.
///
/// The last case is checked on the reconstructed path itself: the walk must
/// come out starting at `src_key`, whatever the tree says its source was.
pub fn build_path<V>(
    graph: &DiGraph<'_, V>,
    src_key: u64,
    dst_key: u64,
    tree: &BfsTree,
) -> Vec<u64> {
    let (Some(_), Some(dst)) = (graph.index_of(src_key), graph.index_of(dst_key)) else {
        return Vec::new();
    };
    // A tree from before a mutation can't index this graph.
    if tree.len() != graph.node_count() {
        debug!(
            "path {src_key}->{dst_key} rejected: tree covers {} nodes, graph has {}",
            tree.len(),
            graph.node_count()
        );
        return Vec::new();
    }

    let mut keys: Vec<u64> = Vec::new();
    let mut current = dst;
    loop {
        keys.push(graph.nodes()[current].key);
        match tree.parent(current) {
            // Root sentinel: the node is its own parent.
            Some(parent) if parent == current => break,
            Some(parent) => current = parent,
            // Unreached destination (or a hole on the walk).
            None => return Vec::new(),
        }
    }
    keys.reverse();

    if keys[0] != src_key {
        return Vec::new();
    }
    keys
}
