//! Error types for the ugraph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the ugraph library.
///
/// A handle is the only way to name a vertex, so the one invalid argument an
/// operation can receive is a handle the graph does not track: typically a
/// handle kept across a removal, or one minted by a different graph.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// Operation received a handle that no tracked vertex carries.
    #[error("vertex {0} not found")]
    VertexNotFound(NodeId),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
