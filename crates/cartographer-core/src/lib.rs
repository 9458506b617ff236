//! Cartographer Core: file graph data model, layout and dashboard queries

pub mod graph;
pub mod model;
pub mod layout;
pub mod stats;
pub mod search;


#[cfg(test)]
pub mod test_utils;

pub use model::{
    NodeId, EdgeId, FileKind, FileRecord, FileNode, Position, MatchStrategy, DependencyEdge,
    MAX_COMPLEXITY, file_extension, describe_extension, line_count,
};
pub use graph::{FileGraph, GraphSnapshot};
pub use layout::grid_position;
pub use stats::{ProjectStats, COMPLEXITY_LEVELS, SortKey, ComplexityBand, DependencyEntry, sorted_nodes, dependency_listing};
pub use search::search_nodes;
