//! Lifecycle handling for display WebSocket connections.

use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, StreamExt};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    dto::ws::OutboundMessage,
    services::clock_service,
    state::SharedState,
};

/// Handle the full lifecycle of one display connection: register with the
/// hub, push the catch-up burst, then drain inbound frames until the client
/// goes away.
pub async fn handle_socket(state: SharedState, socket: WebSocket) {
    let (mut sender, mut receiver) = socket.split();
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<Message>();

    // Dedicated writer task keeps outbound messages flowing even while we await inbound frames.
    let writer_task = tokio::spawn(async move {
        while let Some(message) = outbound_rx.recv().await {
            if sender.send(message).await.is_err() {
                break;
            }
        }
    });

    let session_id = Uuid::new_v4();
    let clock = clock_service::current_status(&state).await;
    state.hub().connect(session_id, outbound_tx.clone(), clock).await;
    send_document_snapshots(&state, &outbound_tx).await;

    info!(session = %session_id, "display connected");

    // Display clients send nothing meaningful; drain inbound frames so the
    // connection stays healthy and we notice the close.
    while let Some(message) = receiver.next().await {
        match message {
            Ok(Message::Ping(payload)) => {
                let _ = outbound_tx.send(Message::Pong(payload));
            }
            Ok(Message::Close(frame)) => {
                let _ = outbound_tx.send(Message::Close(frame));
                break;
            }
            Ok(_) => {}
            Err(err) => {
                warn!(session = %session_id, error = %err, "websocket error");
                break;
            }
        }
    }

    state.hub().disconnect(&session_id);
    info!(session = %session_id, "display disconnected");

    finalize(writer_task, outbound_tx).await;
}

/// Push the match and style document snapshots to a freshly connected
/// session. These complete the hub's catch-up burst; the hub cannot send
/// them itself because the documents live in the config store.
async fn send_document_snapshots(state: &SharedState, tx: &mpsc::UnboundedSender<Message>) {
    let config = state.store().match_doc().get().await;
    let style = state.store().style_doc().get().await;

    for message in [
        OutboundMessage::Config { config },
        OutboundMessage::ScoreboardStyle { style },
    ] {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                if tx.send(Message::Text(payload.into())).is_err() {
                    warn!("snapshot send failed; session writer gone");
                    return;
                }
            }
            Err(err) => warn!(error = %err, "failed to serialize document snapshot"),
        }
    }
}

/// Ensure the writer task winds down before we return from the socket handler.
async fn finalize(writer_task: JoinHandle<()>, outbound_tx: mpsc::UnboundedSender<Message>) {
    drop(outbound_tx);
    let _ = writer_task.await;
}
