//! Core graph structure — insertion-ordered nodes with a key index.

use std::collections::HashMap;

use log::debug;

use crate::types::{InsertOutcome, Node, Owner, DEFAULT_CAPACITY};

/// A directed graph of keyed nodes with adjacency stored per node.
///
/// Nodes live in a `Vec` in insertion order; a `HashMap` maps each key to its
/// position. All traversal iterates the vector and the per-node out-lists,
/// never the map, so iteration order is deterministic for a fixed build
/// sequence.
///
/// Lookups come in two flavors: [`owner_of`](Self::owner_of),
/// [`value_of`](Self::value_of), and [`add_edge`](Self::add_edge) treat a
/// missing key as a caller bug and panic, while
/// [`children_of`](Self::children_of) and [`get`](Self::get) return `None`.
/// The asymmetry is part of the contract, not an accident.
pub struct DiGraph<'a, V> {
    /// All nodes, in insertion order.
    nodes: Vec<Node<'a, V>>,
    /// Key -> position in `nodes`.
    index: HashMap<u64, usize>,
}

impl<'a, V> DiGraph<'a, V> {
    /// Create a new empty graph with the default capacity hint.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a new empty graph sized for roughly `capacity` nodes.
    ///
    /// The hint only pre-sizes storage; the graph grows past it freely.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges (duplicates counted).
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.children().len()).sum()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node<'a, V>] {
        &self.nodes
    }

    /// Get a node by key.
    pub fn get(&self, key: u64) -> Option<&Node<'a, V>> {
        self.index.get(&key).map(|&pos| &self.nodes[pos])
    }

    /// Position of a key in the node array, if present.
    pub fn index_of(&self, key: u64) -> Option<usize> {
        self.index.get(&key).copied()
    }

    /// Whether a node with this key exists.
    pub fn contains_key(&self, key: u64) -> bool {
        self.index.contains_key(&key)
    }

    /// Insert a node, or overwrite an existing one in place.
    ///
    /// A new key appends a node with an empty out-list. An existing key has
    /// its value and owner replaced while its out-list is left untouched, so
    /// re-adding a key never disturbs edges. Never fails.
    pub fn add_node(&mut self, key: u64, value: &'a V, owner: Owner) -> InsertOutcome {
        match self.index.get(&key) {
            Some(&pos) => {
                let node = &mut self.nodes[pos];
                node.value = value;
                node.owner = owner;
                debug!("node {key} updated in place");
                InsertOutcome::Updated
            }
            None => {
                let pos = self.nodes.len();
                self.nodes.push(Node::new(key, value, owner));
                self.index.insert(key, pos);
                InsertOutcome::Inserted
            }
        }
    }

    /// Append a directed edge from `src_key` to `dst_key`.
    ///
    /// Duplicate edges are permitted and kept. Both endpoints must already
    /// exist: the container trusts its caller here, and a missing endpoint
    /// is a bug in the calling code rather than a condition to handle.
    ///
    /// # Panics
    ///
    /// Panics if either `src_key` or `dst_key` is not in the graph.
    pub fn add_edge(&mut self, src_key: u64, dst_key: u64) {
        assert!(
            self.index.contains_key(&dst_key),
            "edge target key {dst_key} is not in the graph"
        );
        let pos = match self.index.get(&src_key) {
            Some(&pos) => pos,
            None => panic!("edge source key {src_key} is not in the graph"),
        };
        self.nodes[pos].children.push(dst_key);
    }

    /// The owner tag stored for `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not in the graph.
    pub fn owner_of(&self, key: u64) -> Owner {
        match self.get(key) {
            Some(node) => node.owner,
            None => panic!("no node with key {key}"),
        }
    }

    /// The value reference stored for `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not in the graph.
    pub fn value_of(&self, key: u64) -> &'a V {
        match self.get(key) {
            Some(node) => node.value,
            None => panic!("no node with key {key}"),
        }
    }

    /// The ordered outgoing edge targets of `key`, or `None` if the key is
    /// absent. Unlike [`owner_of`](Self::owner_of) and
    /// [`value_of`](Self::value_of), a missing key here is tolerated.
    pub fn children_of(&self, key: u64) -> Option<&[u64]> {
        self.get(key).map(Node::children)
    }
}

impl<V> Default for DiGraph<'_, V> {
    fn default() -> Self {
        Self::new()
    }
}
