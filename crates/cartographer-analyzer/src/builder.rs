//! Turns a set of source files into the dependency graph

use crate::complexity::complexity_score;
use crate::languages::extract_for;
use crate::resolver::FileIndex;
use crate::source::SourceFile;
use cartographer_core::{
    grid_position, line_count, DependencyEdge, EdgeId, FileGraph, FileKind, FileNode, FileRecord,
    NodeId,
};
use tracing::{debug, info};

/// Derive the full record for one file.
pub fn analyze_file(file: &SourceFile) -> FileRecord {
    let extraction = extract_for(&file.name, &file.content);

    FileRecord {
        name: file.name.clone(),
        path: file.path.clone(),
        content: file.content.clone(),
        kind: FileKind::from_file_name(&file.name),
        size: file.size,
        lines: line_count(&file.content),
        imports: extraction.imports,
        exports: extraction.exports,
        complexity: complexity_score(&file.content),
        summary: None,
    }
}

/// Analyze every file, lay the nodes out and link imports to files.
///
/// Edges are deduplicated per (source, target) pair and a file never links
/// to itself.
pub fn build_graph(files: &[SourceFile]) -> FileGraph {
    let mut graph = FileGraph::new();
    let mut index = FileIndex::new();
    let mut pending: Vec<(NodeId, Vec<String>)> = Vec::with_capacity(files.len());

    for (i, file) in files.iter().enumerate() {
        let record = analyze_file(file);
        let imports = record.imports.clone();
        let id = graph.add_node(FileNode {
            id: NodeId::default(),
            position: grid_position(i, &record.name),
            file: record,
        });
        index.insert(&file.name, id);
        pending.push((id, imports));
    }

    for (source, imports) in pending {
        for import in imports {
            let Some((target, strategy)) = index.resolve(&import) else {
                debug!("Unresolved import '{}' in node {}", import, source.0);
                continue;
            };
            if target == source || graph.has_edge_between(source, target) {
                continue;
            }
            graph.add_edge(DependencyEdge {
                id: EdgeId::default(),
                source,
                target,
                import,
                strategy,
            });
        }
    }

    info!(
        "Analyzed {} files, {} dependencies",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}
