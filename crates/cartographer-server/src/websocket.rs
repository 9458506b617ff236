//! WebSocket channel: full graph on connect, then replacement notices

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::handlers::GraphResponse;
use crate::ServerState;

/// WebSocket message types for client-server communication
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    /// Client asks for the full graph again
    RequestFullGraph,
    /// Server sends the full graph
    FullGraph { graph: serde_json::Value },
    /// A new upload replaced the graph; clients should refetch
    GraphReplaced { files: usize, dependencies: usize },
    Ping,
    Pong,
    Error { message: String },
}

async fn full_graph_message(state: &ServerState) -> Option<String> {
    let graph = state.graph.read().await;
    let payload = serde_json::to_value(GraphResponse::from_graph(&graph)).ok()?;
    serde_json::to_string(&WsMessage::FullGraph { graph: payload }).ok()
}

/// Reply to a client message, if it needs one.
async fn reply_to(text: &str, state: &ServerState) -> Option<String> {
    match serde_json::from_str::<WsMessage>(text) {
        Ok(WsMessage::RequestFullGraph) => full_graph_message(state).await,
        Ok(WsMessage::Ping) => serde_json::to_string(&WsMessage::Pong).ok(),
        Ok(other) => {
            debug!("Ignoring client message: {:?}", other);
            None
        }
        Err(e) => {
            warn!("Failed to parse WebSocket message: {}", e);
            serde_json::to_string(&WsMessage::Error {
                message: e.to_string(),
            })
            .ok()
        }
    }
}

/// Handle WebSocket upgrade requests
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<ServerState>) {
    info!("New WebSocket connection established");

    let (mut sender, mut receiver) = socket.split();
    let mut rx = state.events_tx.subscribe();

    match full_graph_message(&state).await {
        Some(json) => {
            if sender.send(Message::Text(json)).await.is_err() {
                warn!("Failed to send initial graph to WebSocket client");
                return;
            }
        }
        None => warn!("Failed to serialize full graph message"),
    }

    loop {
        tokio::select! {
            incoming = receiver.next() => {
                let text = match incoming {
                    Some(Ok(Message::Text(text))) => text,
                    Some(Ok(Message::Close(_))) | None | Some(Err(_)) => break,
                    Some(Ok(_)) => continue,
                };
                if let Some(reply) = reply_to(&text, &state).await {
                    if sender.send(Message::Text(reply)).await.is_err() {
                        break;
                    }
                }
            }
            event = rx.recv() => {
                match event {
                    Ok(msg) => {
                        if sender.send(Message::Text(msg)).await.is_err() {
                            debug!("Failed to push event to WebSocket client");
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!("WebSocket client lagged behind by {} events", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        }
    }

    info!("WebSocket connection closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartographer_ai::providers::local::LocalProvider;
    use cartographer_ai::Summarizer;
    use cartographer_core::FileGraph;

    fn state() -> ServerState {
        ServerState::new(
            FileGraph::new(),
            Summarizer::new(Box::new(LocalProvider::new())),
        )
    }

    #[test]
    fn test_ws_message_serialization() {
        let json = serde_json::to_string(&WsMessage::GraphReplaced {
            files: 3,
            dependencies: 2,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"graph_replaced","files":3,"dependencies":2}"#);

        let parsed: WsMessage = serde_json::from_str(r#"{"type":"request_full_graph"}"#).unwrap();
        assert!(matches!(parsed, WsMessage::RequestFullGraph));
    }

    #[tokio::test]
    async fn test_replies() {
        let state = state();
        let pong = reply_to(r#"{"type":"ping"}"#, &state).await.unwrap();
        assert_eq!(pong, r#"{"type":"pong"}"#);

        let graph = reply_to(r#"{"type":"request_full_graph"}"#, &state)
            .await
            .unwrap();
        assert!(graph.starts_with(r#"{"type":"full_graph""#));

        let error = reply_to("not json", &state).await.unwrap();
        assert!(error.contains("\"error\""));
    }

    #[tokio::test]
    async fn test_broadcast() {
        let state = state();
        assert_eq!(state.broadcast("nobody listening".to_string()), 0);

        let mut rx = state.events_tx.subscribe();
        assert_eq!(state.broadcast("hello".to_string()), 1);
        assert_eq!(rx.recv().await.unwrap(), "hello");
    }
}
