//! Fluent API for building Graph instances.

use crate::types::{GraphResult, Node, NodeId};

use super::Graph;

/// Fluent builder for constructing a populated [`Graph`].
pub struct GraphBuilder<T> {
    nodes: Vec<Node<T>>,
    edges: Vec<(NodeId, NodeId)>,
    next_id: u64,
}

impl<T> GraphBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            next_id: 0,
        }
    }

    /// Stage a vertex, returning the handle it carries in the built graph.
    pub fn add(&mut self, value: T) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        let mut node = Node::new(value);
        node.id = id;
        self.nodes.push(node);
        id
    }

    /// Stage an undirected edge between two staged vertices.
    pub fn link(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        self.edges.push((a, b));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<T>> {
        Graph::from_parts(self.nodes, self.edges)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
