//! REST API handlers for the Cartographer server

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use cartographer_ai::{SummaryOrigin, SummarySections};
use cartographer_analyzer::{build_graph, SourceFile, StagingArea};
use cartographer_core::{
    dependency_listing, search_nodes, sorted_nodes, ComplexityBand, DependencyEdge, FileGraph,
    FileKind, FileNode, MatchStrategy, NodeId, Position, ProjectStats, SortKey,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::websocket::WsMessage;
use crate::ServerState;

/// Response structure for the graph API
#[derive(Debug, Serialize)]
pub struct GraphResponse {
    pub nodes: Vec<NodeResponse>,
    pub edges: Vec<EdgeResponse>,
}

impl GraphResponse {
    pub fn from_graph(graph: &FileGraph) -> Self {
        Self {
            nodes: graph.all_nodes().map(NodeResponse::from).collect(),
            edges: graph.all_edges().map(EdgeResponse::from).collect(),
        }
    }
}

/// Node representation for the API, without the file content
#[derive(Debug, Serialize)]
pub struct NodeResponse {
    pub id: u64,
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    pub color: &'static str,
    pub size: u64,
    pub lines: u32,
    pub imports: Vec<String>,
    pub exports: Vec<String>,
    pub complexity: u8,
    pub complexity_band: ComplexityBand,
    pub has_summary: bool,
    pub position: Position,
}

impl From<&FileNode> for NodeResponse {
    fn from(node: &FileNode) -> Self {
        let file = &node.file;
        Self {
            id: node.id.0,
            name: file.name.clone(),
            path: file.path.clone(),
            kind: file.kind,
            color: file.kind.border_color(),
            size: file.size,
            lines: file.lines,
            imports: file.imports.clone(),
            exports: file.exports.clone(),
            complexity: file.complexity,
            complexity_band: ComplexityBand::of(file.complexity),
            has_summary: file.summary.is_some(),
            position: node.position,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EdgeResponse {
    pub id: u64,
    pub source: u64,
    pub target: u64,
    pub import: String,
    pub strategy: MatchStrategy,
}

impl From<&DependencyEdge> for EdgeResponse {
    fn from(edge: &DependencyEdge) -> Self {
        Self {
            id: edge.id.0,
            source: edge.source.0,
            target: edge.target.0,
            import: edge.import.clone(),
            strategy: edge.strategy,
        }
    }
}

/// Full record of one file, as shown in the side panel
#[derive(Debug, Serialize)]
pub struct FileDetailResponse {
    #[serde(flatten)]
    pub node: NodeResponse,
    pub content: String,
    pub summary: Option<String>,
    /// Names of the files this one imports.
    pub dependencies: Vec<String>,
    /// Names of the files importing this one.
    pub dependents: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub id: u64,
    pub summary: String,
    pub origin: SummaryOrigin,
    pub sections: SummarySections,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub files: usize,
    pub ai_provider: String,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// One dropped file. Only `name` and `content` are required.
#[derive(Debug, Deserialize)]
pub struct UploadFile {
    pub name: String,
    pub path: Option<String>,
    pub content: String,
    pub size: Option<u64>,
    pub modified: Option<u64>,
}

impl From<UploadFile> for SourceFile {
    fn from(upload: UploadFile) -> Self {
        let size = upload.size.unwrap_or(upload.content.len() as u64);
        SourceFile {
            path: upload.path.unwrap_or_else(|| upload.name.clone()),
            name: upload.name,
            content: upload.content,
            size,
            modified: upload.modified,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UploadRequest {
    pub files: Vec<UploadFile>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub accepted: usize,
    pub duplicates: usize,
    pub stats: ProjectStats,
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let files = state.graph.read().await.node_count();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        files,
        ai_provider: state.summarizer.provider_name().to_string(),
    })
}

/// Get the current graph as JSON
pub async fn get_graph(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let graph = state.graph.read().await;
    Json(GraphResponse::from_graph(&graph))
}

pub async fn get_stats(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let graph = state.graph.read().await;
    Json(ProjectStats::compute(&graph))
}

pub async fn list_dependencies(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let graph = state.graph.read().await;
    Json(dependency_listing(&graph))
}

/// List files in dashboard order; `sort` defaults to name.
pub async fn list_files(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let key = match params.sort.as_deref() {
        Some(raw) => raw
            .parse::<SortKey>()
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?,
        None => SortKey::default(),
    };

    let graph = state.graph.read().await;
    let nodes: Vec<NodeResponse> = sorted_nodes(&graph, key)
        .into_iter()
        .map(NodeResponse::from)
        .collect();
    Ok(Json(nodes))
}

pub async fn search_files(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let graph = state.graph.read().await;
    let nodes: Vec<NodeResponse> = search_nodes(&graph, &params.q)
        .into_iter()
        .map(NodeResponse::from)
        .collect();
    Json(nodes)
}

fn file_names(graph: &FileGraph, ids: impl Iterator<Item = NodeId>) -> Vec<String> {
    ids.filter_map(|id| graph.node(id))
        .map(|n| n.file.name.clone())
        .collect()
}

pub async fn get_file(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, StatusCode> {
    let graph = state.graph.read().await;
    let node_id = NodeId(id);
    let node = graph.node(node_id).ok_or(StatusCode::NOT_FOUND)?;

    let dependencies = file_names(&graph, graph.edges_from(node_id).map(|e| e.target));
    let dependents = file_names(&graph, graph.edges_to(node_id).map(|e| e.source));

    Ok(Json(FileDetailResponse {
        node: NodeResponse::from(node),
        content: node.file.content.clone(),
        summary: node.file.summary.clone(),
        dependencies,
        dependents,
    }))
}

/// Summarize one file and remember the text on its node.
pub async fn summarize_file(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, StatusCode> {
    let node_id = NodeId(id);
    let (name, content) = {
        let graph = state.graph.read().await;
        let node = graph.node(node_id).ok_or(StatusCode::NOT_FOUND)?;
        (node.file.name.clone(), node.file.content.clone())
    };

    // The lock is released while the provider is called.
    let summary = state.summarizer.generate_summary(&content, &name).await;

    {
        let mut graph = state.graph.write().await;
        let unchanged = graph
            .node(node_id)
            .is_some_and(|n| n.file.name == name && n.file.content == content);
        if unchanged {
            graph.set_summary(node_id, summary.text.clone());
        } else {
            warn!("Graph was replaced while summarizing {}", name);
        }
    }

    Ok(Json(SummaryResponse {
        id,
        sections: SummarySections::parse(&summary.text),
        summary: summary.text,
        origin: summary.origin,
    }))
}

/// Replace the graph with one built from the uploaded files.
pub async fn upload_files(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<UploadRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if request.files.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "no files uploaded".to_string()));
    }

    let received = request.files.len();
    let mut staging = StagingArea::new();
    let accepted = staging.stage(request.files.into_iter().map(SourceFile::from));
    let files = staging.take();

    let graph = build_graph(&files);
    let stats = ProjectStats::compute(&graph);
    state.replace_graph(graph).await;
    info!(
        "Upload analyzed: {} files, {} dependencies",
        stats.total_files, stats.total_dependencies
    );

    let event = WsMessage::GraphReplaced {
        files: stats.total_files,
        dependencies: stats.total_dependencies,
    };
    match serde_json::to_string(&event) {
        Ok(json) => {
            state.broadcast(json);
        }
        Err(e) => warn!("Failed to serialize graph_replaced event: {}", e),
    }

    Ok(Json(UploadResponse {
        accepted,
        duplicates: received - accepted,
        stats,
    }))
}
