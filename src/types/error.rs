//! Error types for the keygraph library.
//!
//! These cover the recoverable error class only: input that arrives from
//! outside the trusted-caller boundary (CLI specs, route endpoints). Misuse
//! of the core container API itself (edges to absent nodes, lookups of
//! absent keys via [`owner_of`](crate::DiGraph::owner_of) and friends) is a
//! programmer error and panics instead.

use thiserror::Error;

/// All recoverable errors that can occur in the keygraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node not found by key.
    #[error("Node key {0} not found")]
    NodeNotFound(u64),

    /// A node spec did not parse as `KEY:OWNER`.
    #[error("Invalid node spec {0:?} (expected KEY:OWNER)")]
    InvalidNodeSpec(String),

    /// An edge spec did not parse as `SRC,DST`.
    #[error("Invalid edge spec {0:?} (expected SRC,DST)")]
    InvalidEdgeSpec(String),

    /// An owner name was neither `local` nor `remote`.
    #[error("Unknown owner {0:?} (expected local or remote)")]
    UnknownOwner(String),
}

/// Convenience result type for keygraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
