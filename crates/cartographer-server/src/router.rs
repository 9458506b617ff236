//! Axum router setup for the Cartographer server

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    assets::static_handler,
    handlers::{
        get_file, get_graph, get_stats, health_check, list_dependencies, list_files, search_files,
        summarize_file, upload_files,
    },
    websocket::ws_handler,
    ServerState,
};

/// Uploaded projects arrive as one JSON document.
const UPLOAD_LIMIT_BYTES: usize = 64 * 1024 * 1024;

/// Create the axum router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // WebSocket endpoint for graph replacement pushes
        .route("/ws", get(ws_handler))
        // REST API endpoints
        .route("/api/health", get(health_check))
        .route("/api/graph", get(get_graph))
        .route("/api/stats", get(get_stats))
        .route("/api/dependencies", get(list_dependencies))
        .route("/api/files", get(list_files))
        .route("/api/files/:id", get(get_file))
        .route("/api/files/:id/summary", post(summarize_file))
        .route("/api/search", get(search_files))
        .route(
            "/api/upload",
            post(upload_files).layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        // Static file serving
        .route("/", get(static_handler))
        .route("/*path", get(static_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
