//! Graph wrapper using petgraph::StableDiGraph with custom NodeId/EdgeId

use crate::model::*;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

/// The file dependency graph: a directed graph with stable indices.
pub struct FileGraph {
    inner: StableDiGraph<FileNode, DependencyEdge>,
}

impl std::fmt::Debug for FileGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileGraph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

/// Owned, serializable view of a graph for the API and `--json` output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphSnapshot {
    pub nodes: Vec<FileNode>,
    pub edges: Vec<DependencyEdge>,
    pub generated_at: String,
}

/// Index for `id`, or `None` when it is outside petgraph's `u32` index range.
fn node_index(id: NodeId) -> Option<NodeIndex> {
    u32::try_from(id.0).ok().map(|i| NodeIndex::new(i as usize))
}

fn edge_index(id: EdgeId) -> Option<EdgeIndex> {
    u32::try_from(id.0).ok().map(|i| EdgeIndex::new(i as usize))
}

impl FileGraph {
    pub fn new() -> Self {
        FileGraph {
            inner: StableDiGraph::new(),
        }
    }

    /// Add a node. The `id` field of `node` is overwritten with the assigned id.
    pub fn add_node(&mut self, node: FileNode) -> NodeId {
        let idx = self.inner.add_node(node);
        let id = NodeId(idx.index() as u64);
        if let Some(weight) = self.inner.node_weight_mut(idx) {
            weight.id = id;
        }
        id
    }

    /// Add an edge between two existing nodes.
    ///
    /// Returns `None` when either endpoint is missing, so edges never dangle.
    pub fn add_edge(&mut self, edge: DependencyEdge) -> Option<EdgeId> {
        let endpoints = node_index(edge.source)
            .zip(node_index(edge.target))
            .filter(|&(s, t)| self.inner.contains_node(s) && self.inner.contains_node(t));
        let Some((source, target)) = endpoints else {
            tracing::warn!(
                "Dropping edge {} -> {}: endpoint not in graph",
                edge.source.0,
                edge.target.0
            );
            return None;
        };
        let idx = self.inner.add_edge(source, target, edge);
        let id = EdgeId(idx.index() as u64);
        if let Some(weight) = self.inner.edge_weight_mut(idx) {
            weight.id = id;
        }
        Some(id)
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&FileNode> {
        self.inner.node_weight(node_index(id)?)
    }

    /// Get a mutable node by ID.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut FileNode> {
        self.inner.node_weight_mut(node_index(id)?)
    }

    /// Get an edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&DependencyEdge> {
        self.inner.edge_weight(edge_index(id)?)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    /// Iterate over all nodes in insertion order.
    pub fn all_nodes(&self) -> impl Iterator<Item = &FileNode> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// Iterate over all edges in insertion order.
    pub fn all_edges(&self) -> impl Iterator<Item = &DependencyEdge> {
        self.inner
            .edge_indices()
            .filter_map(move |idx| self.inner.edge_weight(idx))
    }

    /// Outgoing edges: the files `source` depends on.
    pub fn edges_from(&self, source: NodeId) -> impl Iterator<Item = &DependencyEdge> {
        node_index(source)
            .into_iter()
            .flat_map(move |idx| self.inner.edges_directed(idx, Direction::Outgoing))
            .filter_map(move |edge_ref| self.inner.edge_weight(edge_ref.id()))
    }

    /// Incoming edges: the files that depend on `target`.
    pub fn edges_to(&self, target: NodeId) -> impl Iterator<Item = &DependencyEdge> {
        node_index(target)
            .into_iter()
            .flat_map(move |idx| self.inner.edges_directed(idx, Direction::Incoming))
            .filter_map(move |edge_ref| self.inner.edge_weight(edge_ref.id()))
    }

    pub fn has_edge_between(&self, source: NodeId, target: NodeId) -> bool {
        self.edges_from(source).any(|e| e.target == target)
    }

    /// Find a node by file name (first match).
    pub fn find_node_by_name(&self, name: &str) -> Option<NodeId> {
        self.all_nodes()
            .find(|n| n.file.name == name)
            .map(|n| n.id)
    }

    /// Attach a generated summary to a node. Returns false if the node is gone.
    pub fn set_summary(&mut self, id: NodeId, summary: String) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.file.summary = Some(summary);
                true
            }
            None => false,
        }
    }

    /// Clone the graph into a serializable snapshot.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.all_nodes().cloned().collect(),
            edges: self.all_edges().cloned().collect(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl Default for FileGraph {
    fn default() -> Self {
        Self::new()
    }
}
