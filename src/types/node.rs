//! Vertex handles and the vertex struct.

use std::fmt;

/// Stable identity handle for a vertex.
///
/// Handles are assigned sequentially at registration and never reused, so a
/// handle kept across a removal stays dangling instead of aliasing a newer
/// vertex. Two vertices holding equal payloads are still distinct; membership
/// and adjacency are keyed on the handle, never on the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    /// Raw numeric form of this handle.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A vertex: a caller-supplied payload plus its neighbor handles.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Handle assigned when the node is registered with a graph.
    pub(crate) id: NodeId,
    /// Caller payload. Graph operations never touch it.
    pub value: T,
    /// Neighbor handles in insertion order, no duplicates.
    pub(crate) adjacent: Vec<NodeId>,
}

impl<T> Node<T> {
    /// Create an unregistered node with an empty neighbor set.
    pub fn new(value: T) -> Self {
        Self {
            id: NodeId(0),
            value,
            adjacent: Vec::new(),
        }
    }

    /// Create an unregistered node that declares initial neighbors.
    ///
    /// The declared handles are validated and mirrored during registration,
    /// so the edges exist symmetrically once `add_vertex` returns.
    pub fn with_neighbors(value: T, neighbors: Vec<NodeId>) -> Self {
        Self {
            id: NodeId(0),
            value,
            adjacent: neighbors,
        }
    }

    /// Handle of this node. Placeholder until the node is registered.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Neighbor handles in insertion order.
    pub fn neighbors(&self) -> &[NodeId] {
        &self.adjacent
    }

    /// Number of incident edges (a self-loop counts once).
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }
}
