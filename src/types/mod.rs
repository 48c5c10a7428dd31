//! All data types for the keygraph library.

pub mod error;
pub mod node;

pub use error::{GraphError, GraphResult};
pub use node::{InsertOutcome, Node, Owner};

/// Default node-storage capacity when the caller gives no sizing hint.
pub const DEFAULT_CAPACITY: usize = 8;
