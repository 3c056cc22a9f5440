//! ugraph — in-memory undirected graph with depth-first and breadth-first
//! traversal.
//!
//! Vertices hold caller-supplied payloads and are addressed through stable
//! [`NodeId`] handles. The edge relation is kept symmetric by every mutating
//! operation, and adjacency preserves insertion order, which makes traversal
//! output deterministic.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{bfs_traverse, dfs_traverse, Graph, GraphBuilder};
pub use types::{GraphError, GraphResult, Node, NodeId};
