//! HTTP + WebSocket server hosting the graph UI

pub mod assets;
pub mod handlers;
pub mod router;
pub mod websocket;


use std::sync::Arc;

use cartographer_ai::Summarizer;
use cartographer_core::FileGraph;
use tokio::sync::{broadcast, RwLock};

/// Capacity of the push channel to WebSocket clients.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Listen address of the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7890,
        }
    }
}

/// State shared by every handler: the current graph and the summarizer.
pub struct ServerState {
    pub graph: RwLock<FileGraph>,
    pub summarizer: Summarizer,
    pub events_tx: broadcast::Sender<String>,
}

impl ServerState {
    pub fn new(graph: FileGraph, summarizer: Summarizer) -> Self {
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            graph: RwLock::new(graph),
            summarizer,
            events_tx,
        }
    }

    /// Push a message to every connected client. Returns how many received it.
    pub fn broadcast(&self, msg: String) -> usize {
        self.events_tx.send(msg).unwrap_or(0)
    }

    /// Swap in a freshly built graph.
    pub async fn replace_graph(&self, graph: FileGraph) {
        *self.graph.write().await = graph;
    }
}

pub struct CartographerServer {
    state: Arc<ServerState>,
    config: ServerConfig,
}

impl CartographerServer {
    pub fn new(graph: FileGraph, summarizer: Summarizer, config: ServerConfig) -> Self {
        Self {
            state: Arc::new(ServerState::new(graph, summarizer)),
            config,
        }
    }

    pub fn state(&self) -> Arc<ServerState> {
        Arc::clone(&self.state)
    }

    pub fn router(&self) -> axum::Router {
        router::create_router(self.state())
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> anyhow::Result<()> {
        let listener =
            tokio::net::TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        tracing::info!("Cartographer listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}
