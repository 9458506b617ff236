//! Node filtering for the search bar

use crate::graph::FileGraph;
use crate::model::FileNode;

/// Nodes whose name, type or content contains `query`, ignoring case.
///
/// A blank query matches everything.
pub fn search_nodes<'g>(graph: &'g FileGraph, query: &str) -> Vec<&'g FileNode> {
    if query.is_empty() {
        return graph.all_nodes().collect();
    }

    let needle = query.to_lowercase();
    graph
        .all_nodes()
        .filter(|node| {
            node.file.name.to_lowercase().contains(&needle)
                || node.file.kind.display_name().to_lowercase().contains(&needle)
                || node.file.content.to_lowercase().contains(&needle)
        })
        .collect()
}
