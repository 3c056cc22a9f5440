//! Core graph structure — vertices with symmetric adjacency.

use log::debug;

use crate::types::{GraphError, GraphResult, Node, NodeId};

use super::traversal::{bfs_traverse, dfs_traverse};

/// An undirected graph over caller-supplied payloads.
///
/// Vertices are stored in registration order and addressed by [`NodeId`]
/// handles. Every mutating operation keeps the edge relation symmetric, and
/// adjacency preserves insertion order, which fixes the neighbor-visit order
/// of the traversals.
#[derive(Debug)]
pub struct Graph<T> {
    /// All vertices, in registration order.
    nodes: Vec<Node<T>>,
    /// Next handle to assign.
    next_id: u64,
    /// Number of undirected edges (a self-loop counts once).
    edge_count: usize,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            next_id: 0,
            edge_count: 0,
        }
    }

    /// Create from pre-staged parts (used by the builder).
    ///
    /// Nodes keep the handles already assigned to them. Adjacency the nodes
    /// declare and every pair in `edges` is applied symmetrically; a pair
    /// naming an unknown handle fails the whole construction.
    pub fn from_parts(
        mut nodes: Vec<Node<T>>,
        edges: Vec<(NodeId, NodeId)>,
    ) -> GraphResult<Self> {
        let next_id = nodes.iter().map(|n| n.id.0 + 1).max().unwrap_or(0);

        // Declared adjacency is re-applied through add_edge so it is
        // validated, deduplicated, and mirrored like any staged pair.
        let mut staged: Vec<(NodeId, NodeId)> = Vec::new();
        for node in &mut nodes {
            for neighbor in node.adjacent.drain(..) {
                staged.push((node.id, neighbor));
            }
        }
        staged.extend(edges);

        let mut graph = Self {
            nodes,
            next_id,
            edge_count: 0,
        };
        for (a, b) in staged {
            graph.add_edge(a, b)?;
        }

        Ok(graph)
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph tracks this handle.
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Get a vertex by handle (immutable).
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        // Fast path: until a removal, handle n sits at index n
        let idx = id.0 as usize;
        if idx < self.nodes.len() && self.nodes[idx].id == id {
            return Some(&self.nodes[idx]);
        }
        // Fallback: linear scan (needed after remove_vertex)
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get a vertex by handle (mutable).
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        let idx = id.0 as usize;
        if idx < self.nodes.len() && self.nodes[idx].id == id {
            return Some(&mut self.nodes[idx]);
        }
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Neighbor handles of a vertex, in insertion order.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&[NodeId]> {
        self.get(id)
            .map(|n| n.adjacent.as_slice())
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Whether an edge exists between two handles.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.get(a).is_some_and(|n| n.adjacent.contains(&b))
    }

    /// All vertices, in registration order.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }

    /// Iterate over vertices in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        self.nodes.iter()
    }

    /// Register a vertex, returns the assigned handle.
    ///
    /// Neighbors the node declares up front must already be tracked; their
    /// back-references are inserted so the edges are symmetric on return. An
    /// unknown declared neighbor fails before anything is inserted.
    pub fn add_vertex(&mut self, mut node: Node<T>) -> GraphResult<NodeId> {
        for &neighbor in &node.adjacent {
            if !self.contains(neighbor) {
                return Err(GraphError::VertexNotFound(neighbor));
            }
        }

        let id = NodeId(self.next_id);
        node.id = id;
        self.next_id += 1;

        let declared: Vec<NodeId> = node.adjacent.drain(..).collect();
        self.nodes.push(node);
        for neighbor in declared {
            self.add_edge(id, neighbor)?;
        }

        Ok(id)
    }

    /// Register vertices in sequence order, returning their handles.
    ///
    /// Not atomic: vertices registered before a failing element stay
    /// registered.
    pub fn add_vertices(&mut self, nodes: Vec<Node<T>>) -> GraphResult<Vec<NodeId>> {
        let mut ids = Vec::with_capacity(nodes.len());
        for node in nodes {
            ids.push(self.add_vertex(node)?);
        }
        Ok(ids)
    }

    /// Add an undirected edge between two tracked vertices.
    ///
    /// Idempotent. A self-edge is allowed and stored as a single entry.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        if !self.contains(a) {
            return Err(GraphError::VertexNotFound(a));
        }
        if !self.contains(b) {
            return Err(GraphError::VertexNotFound(b));
        }

        let inserted = self.insert_half_edge(a, b);
        if a != b {
            self.insert_half_edge(b, a);
        }
        if inserted {
            self.edge_count += 1;
        }

        Ok(())
    }

    /// Remove the edge between two tracked vertices. No-op if absent.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        if !self.contains(a) {
            return Err(GraphError::VertexNotFound(a));
        }
        if !self.contains(b) {
            return Err(GraphError::VertexNotFound(b));
        }

        let removed = self.remove_half_edge(a, b);
        if a != b {
            self.remove_half_edge(b, a);
        }
        if removed {
            self.edge_count -= 1;
        }

        Ok(())
    }

    /// Remove a vertex and every edge incident to it.
    ///
    /// Returns the removed node, or `None` when the handle is untracked
    /// (removing an absent vertex is a no-op, not an error). Symmetry means
    /// the removed node's own adjacency names exactly the vertices that still
    /// reference it, so only those are swept.
    pub fn remove_vertex(&mut self, id: NodeId) -> Option<Node<T>> {
        let pos = self.nodes.iter().position(|n| n.id == id)?;
        let removed = self.nodes.remove(pos);

        debug!("removing vertex {} with degree {}", id, removed.degree());
        for &neighbor in &removed.adjacent {
            if neighbor != id {
                self.remove_half_edge(neighbor, id);
            }
        }
        self.edge_count -= removed.adjacent.len();

        Some(removed)
    }

    /// Values of the connected component of `start`, in depth-first preorder.
    pub fn depth_first_search(&self, start: NodeId) -> GraphResult<Vec<&T>> {
        let order = dfs_traverse(self, start)?;
        Ok(self.values_of(order))
    }

    /// Values of the connected component of `start`, in breadth-first order.
    pub fn breadth_first_search(&self, start: NodeId) -> GraphResult<Vec<&T>> {
        let order = bfs_traverse(self, start)?;
        Ok(self.values_of(order))
    }

    fn values_of(&self, order: Vec<NodeId>) -> Vec<&T> {
        order
            .into_iter()
            .filter_map(|id| self.get(id))
            .map(|n| &n.value)
            .collect()
    }

    /// Insert `b` into `a`'s adjacency. Returns whether anything changed.
    fn insert_half_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        match self.get_mut(a) {
            Some(node) if !node.adjacent.contains(&b) => {
                node.adjacent.push(b);
                true
            }
            _ => false,
        }
    }

    /// Remove `b` from `a`'s adjacency. Returns whether anything changed.
    fn remove_half_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        match self.get_mut(a) {
            Some(node) => {
                let before = node.adjacent.len();
                node.adjacent.retain(|&n| n != b);
                node.adjacent.len() != before
            }
            None => false,
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
