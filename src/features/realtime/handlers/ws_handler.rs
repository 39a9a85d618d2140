use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::{IntoResponse, Response},
};
use futures::{SinkExt, StreamExt};

use crate::features::realtime::models::ServerMessage;

/// WebSocket upgrade for the realtime channel
pub async fn realtime_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    upgrade(ws)
}

/// Accept an upgrade on any route and run the realtime session on it
pub fn upgrade(ws: WebSocketUpgrade) -> Response {
    tracing::info!("New realtime connection");
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(socket: WebSocket) {
    let (mut sender, mut receiver) = socket.split();

    let welcome = match serde_json::to_string(&ServerMessage::welcome()) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Failed to encode welcome message: {}", e);
            return;
        }
    };

    if sender.send(Message::Text(welcome.into())).await.is_err() {
        tracing::debug!("Realtime client left before welcome");
        return;
    }

    // Drain until the client goes away
    while let Some(frame) = receiver.next().await {
        match frame {
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Realtime socket error: {}", e);
                break;
            }
        }
    }

    tracing::info!("Realtime connection closed");
}
