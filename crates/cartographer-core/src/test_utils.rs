//! Test utilities for Cartographer

use crate::model::*;

/// A file record with the given name and metrics and no content.
pub fn record(name: &str, lines: u32, complexity: u8) -> FileRecord {
    FileRecord {
        name: name.to_string(),
        path: name.to_string(),
        content: String::new(),
        kind: FileKind::from_file_name(name),
        size: 0,
        lines,
        imports: vec![],
        exports: vec![],
        complexity,
        summary: None,
    }
}

/// Wrap a record in a node at the origin; the graph assigns the id.
pub fn node(file: FileRecord) -> FileNode {
    FileNode {
        id: NodeId::default(),
        file,
        position: Position::default(),
    }
}

pub fn edge(source: NodeId, target: NodeId, import: &str) -> DependencyEdge {
    DependencyEdge {
        id: EdgeId::default(),
        source,
        target,
        import: import.to_string(),
        strategy: MatchStrategy::Exact,
    }
}
