//! Node types and the owner tag.

use serde::Serialize;

/// Where a node's value lives. Informational only; no operation in this
/// crate partitions or schedules by owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Owner {
    /// The value belongs to this process.
    Local = 0,
    /// The value is a stand-in for data held elsewhere.
    Remote = 1,
}

impl Owner {
    /// Convert a u8 value to an Owner, returning None for invalid values.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Local),
            1 => Some(Self::Remote),
            _ => None,
        }
    }

    /// Return a human-readable name for this owner tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }

    /// Parse an owner tag from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "local" => Some(Self::Local),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Outcome of [`DiGraph::add_node`](crate::DiGraph::add_node): whether the
/// key was new or an existing node was overwritten in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was new; a node was appended.
    Inserted,
    /// The key already existed; its value and owner were replaced.
    Updated,
}

/// A single graph node: a key, a borrowed value, an owner tag, and the
/// ordered list of outgoing edge targets.
///
/// The value is a non-owning reference: the graph never takes ownership of
/// the pointed-to data, so `V` must outlive the graph (`'a`).
#[derive(Debug, Clone)]
pub struct Node<'a, V> {
    /// Unique key identifying this node.
    pub key: u64,
    /// Borrowed value supplied by the caller.
    pub value: &'a V,
    /// Informational owner tag.
    pub owner: Owner,
    /// Outgoing edge target keys, in insertion order. Duplicates permitted.
    pub(crate) children: Vec<u64>,
}

impl<'a, V> Node<'a, V> {
    pub(crate) fn new(key: u64, value: &'a V, owner: Owner) -> Self {
        Self {
            key,
            value,
            owner,
            children: Vec::new(),
        }
    }

    /// The outgoing edge target keys, in insertion order.
    pub fn children(&self) -> &[u64] {
        &self.children
    }
}
