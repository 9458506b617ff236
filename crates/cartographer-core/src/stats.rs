//! Project-level statistics and node ordering for the dashboard

use crate::graph::FileGraph;
use crate::model::{FileNode, MatchStrategy, MAX_COMPLEXITY};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Aggregate numbers shown in the stats panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectStats {
    /// File count per display type.
    pub file_types: BTreeMap<String, usize>,
    pub total_files: usize,
    pub total_dependencies: usize,
    pub total_lines: u64,
    pub total_complexity: u64,
    /// Mean complexity rounded to the nearest integer; 0 for an empty graph.
    pub avg_complexity: u64,
    /// Number of files at each complexity level, 0 through the cap.
    pub complexity_distribution: [usize; COMPLEXITY_LEVELS],
}

pub const COMPLEXITY_LEVELS: usize = MAX_COMPLEXITY as usize + 1;

impl ProjectStats {
    pub fn compute(graph: &FileGraph) -> Self {
        let mut file_types = BTreeMap::new();
        let mut total_lines = 0u64;
        let mut total_complexity = 0u64;
        let mut complexity_distribution = [0; COMPLEXITY_LEVELS];

        for node in graph.all_nodes() {
            *file_types
                .entry(node.file.kind.display_name().to_string())
                .or_insert(0) += 1;
            total_lines += u64::from(node.file.lines);
            total_complexity += u64::from(node.file.complexity);
            let level = usize::from(node.file.complexity).min(COMPLEXITY_LEVELS - 1);
            complexity_distribution[level] += 1;
        }

        let total_files = graph.node_count();
        let avg_complexity = if total_files > 0 {
            (total_complexity as f64 / total_files as f64).round() as u64
        } else {
            0
        };

        ProjectStats {
            file_types,
            total_files,
            total_dependencies: graph.edge_count(),
            total_lines,
            total_complexity,
            avg_complexity,
            complexity_distribution,
        }
    }
}

/// Ordering of the file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Type,
    /// Most complex first.
    Complexity,
    /// Longest first.
    Lines,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "type" => Ok(SortKey::Type),
            "complexity" => Ok(SortKey::Complexity),
            "lines" => Ok(SortKey::Lines),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// All nodes ordered by `key`. Ties keep insertion order.
pub fn sorted_nodes(graph: &FileGraph, key: SortKey) -> Vec<&FileNode> {
    let mut nodes: Vec<&FileNode> = graph.all_nodes().collect();
    nodes.sort_by(|a, b| match key {
        SortKey::Name => compare_text(&a.file.name, &b.file.name),
        SortKey::Type => compare_text(a.file.kind.display_name(), b.file.kind.display_name()),
        SortKey::Complexity => b.file.complexity.cmp(&a.file.complexity),
        SortKey::Lines => b.file.lines.cmp(&a.file.lines),
    });
    nodes
}

/// Coarse bucket used to color complexity values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityBand {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ComplexityBand {
    pub fn of(complexity: u8) -> Self {
        match complexity {
            0..=2 => ComplexityBand::Low,
            3..=5 => ComplexityBand::Medium,
            6..=8 => ComplexityBand::High,
            _ => ComplexityBand::VeryHigh,
        }
    }
}

/// One line of the dependency listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyEntry {
    pub source: String,
    pub target: String,
    pub import: String,
    pub strategy: MatchStrategy,
}

impl std::fmt::Display for DependencyEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.source, self.target)
    }
}

/// Every edge with its endpoints resolved to file names.
pub fn dependency_listing(graph: &FileGraph) -> Vec<DependencyEntry> {
    graph
        .all_edges()
        .filter_map(|edge| {
            let source = graph.node(edge.source)?;
            let target = graph.node(edge.target)?;
            Some(DependencyEntry {
                source: source.file.name.clone(),
                target: target.file.name.clone(),
                import: edge.import.clone(),
                strategy: edge.strategy,
            })
        })
        .collect()
}
