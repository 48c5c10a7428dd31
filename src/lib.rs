//! Keygraph — key-indexed directed graph with unweighted shortest paths.
//!
//! Nodes are identified by a caller-chosen `u64` key and hold a non-owning
//! reference to a caller-supplied value plus an informational [`Owner`] tag.
//! Edges are directed, unweighted, and stored per node in insertion order.
//! Shortest paths are computed on demand with [`bfs`] and reconstructed with
//! [`build_path`].

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{bfs, build_path, BfsTree, DiGraph};
pub use types::{GraphError, GraphResult, InsertOutcome, Node, Owner, DEFAULT_CAPACITY};
