//! Session registry and fan-out for display clients.
//!
//! The hub owns every connected WebSocket session plus the ephemeral overlay
//! state (visibility flags and the extra-time counter). That state is
//! deliberately not persisted: it describes what is on screen right now and
//! must come back to a known default after a restart instead of resuming a
//! stale on-air state.
//!
//! Delivery is level-triggered: every message carries an absolute value, and
//! a session that joins late receives a catch-up burst of current state
//! instead of a replay of history.

use axum::extract::ws::{Message, Utf8Bytes};
use dashmap::DashMap;
use tokio::sync::{RwLock, mpsc};
use tracing::warn;
use uuid::Uuid;

use crate::dto::ws::{ClockStatus, OutboundMessage};

#[derive(Clone)]
/// Handle used to push messages to one connected display client.
pub struct DisplaySession {
    /// Sender feeding the session's dedicated writer task.
    pub tx: mpsc::UnboundedSender<Message>,
}

/// Extra-time announcement state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtraTimeState {
    /// Announced added minutes.
    pub minutes: u32,
    /// Whether the extra-time box is shown.
    pub visible: bool,
}

/// Ephemeral visibility flags plus the extra-time counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayState {
    /// Scoreboard overlay flag; the only one that starts visible.
    pub scoreboard: bool,
    /// Players list overlay flag.
    pub players_list: bool,
    /// Game report overlay flag.
    pub game_report: bool,
    /// Match info row flag.
    pub match_info: bool,
    /// Extra-time state.
    pub extra_time: ExtraTimeState,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            scoreboard: true,
            players_list: false,
            game_report: false,
            match_info: false,
            extra_time: ExtraTimeState::default(),
        }
    }
}

/// Broadcast hub tracking connected display sessions.
pub struct DisplayHub {
    sessions: DashMap<Uuid, DisplaySession>,
    overlay: RwLock<OverlayState>,
}

impl Default for DisplayHub {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayHub {
    /// Create an empty hub with default overlay state.
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            overlay: RwLock::new(OverlayState::default()),
        }
    }

    /// Number of currently registered sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Register a session and send it the catch-up burst: clock status, then
    /// each visibility flag, then extra-time status. Send failures during
    /// catch-up are logged and do not undo the registration; a dead session
    /// is reaped by its own disconnect event.
    ///
    /// The match and style document snapshots are sent by the caller, which
    /// owns access to the config store.
    pub async fn connect(&self, id: Uuid, tx: mpsc::UnboundedSender<Message>, clock: ClockStatus) {
        self.sessions.insert(id, DisplaySession { tx: tx.clone() });

        let overlay = *self.overlay.read().await;
        let burst = [
            OutboundMessage::from(clock),
            OutboundMessage::ScoreboardVisibility {
                is_visible: overlay.scoreboard,
            },
            OutboundMessage::PlayersListVisibility {
                is_visible: overlay.players_list,
            },
            OutboundMessage::GameReportVisibility {
                is_visible: overlay.game_report,
            },
            OutboundMessage::MatchInfoVisibility {
                is_visible: overlay.match_info,
            },
            OutboundMessage::ExtraTimeStatus {
                minutes: overlay.extra_time.minutes,
                is_visible: overlay.extra_time.visible,
            },
        ];
        for message in &burst {
            send_to(&id, &tx, message);
        }
    }

    /// Remove a session from the active set. Callers invoke this from the
    /// connection-closed path, so a missing entry is not an error.
    pub fn disconnect(&self, id: &Uuid) {
        self.sessions.remove(id);
    }

    /// Deliver one message to every registered session. Each send is
    /// independent: a failed or slow session never blocks the others and no
    /// error reaches the caller.
    pub fn broadcast(&self, message: &OutboundMessage) {
        let payload: Utf8Bytes = match serde_json::to_string(message) {
            Ok(payload) => payload.into(),
            Err(err) => {
                warn!(error = %err, "failed to serialize broadcast message");
                return;
            }
        };

        for session in self.sessions.iter() {
            if session.value().tx.send(Message::Text(payload.clone())).is_err() {
                warn!(session = %session.key(), "broadcast send failed; session writer gone");
            }
        }
    }

    /// Current overlay state snapshot.
    pub async fn overlay(&self) -> OverlayState {
        *self.overlay.read().await
    }

    /// Flip the scoreboard flag, broadcast the new value and return it.
    pub async fn toggle_scoreboard(&self) -> bool {
        let value = {
            let mut overlay = self.overlay.write().await;
            overlay.scoreboard = !overlay.scoreboard;
            overlay.scoreboard
        };
        self.broadcast(&OutboundMessage::ScoreboardVisibility { is_visible: value });
        value
    }

    /// Flip the players list flag, broadcast the new value and return it.
    pub async fn toggle_players_list(&self) -> bool {
        let value = {
            let mut overlay = self.overlay.write().await;
            overlay.players_list = !overlay.players_list;
            overlay.players_list
        };
        self.broadcast(&OutboundMessage::PlayersListVisibility { is_visible: value });
        value
    }

    /// Flip the game report flag, broadcast the new value and return it.
    pub async fn toggle_game_report(&self) -> bool {
        let value = {
            let mut overlay = self.overlay.write().await;
            overlay.game_report = !overlay.game_report;
            overlay.game_report
        };
        self.broadcast(&OutboundMessage::GameReportVisibility { is_visible: value });
        value
    }

    /// Flip the match info flag, broadcast the new value and return it.
    pub async fn toggle_match_info(&self) -> bool {
        let value = {
            let mut overlay = self.overlay.write().await;
            overlay.match_info = !overlay.match_info;
            overlay.match_info
        };
        self.broadcast(&OutboundMessage::MatchInfoVisibility { is_visible: value });
        value
    }

    /// Flip the extra-time visibility, broadcast the full extra-time status
    /// and return it.
    pub async fn toggle_extra_time(&self) -> ExtraTimeState {
        let state = {
            let mut overlay = self.overlay.write().await;
            overlay.extra_time.visible = !overlay.extra_time.visible;
            overlay.extra_time
        };
        self.broadcast_extra_time(state);
        state
    }

    /// Set the announced minutes, clamping negatives to zero, broadcast the
    /// full extra-time status and return it.
    pub async fn set_extra_time(&self, minutes: i64) -> ExtraTimeState {
        let state = {
            let mut overlay = self.overlay.write().await;
            overlay.extra_time.minutes = minutes.max(0) as u32;
            overlay.extra_time
        };
        self.broadcast_extra_time(state);
        state
    }

    fn broadcast_extra_time(&self, state: ExtraTimeState) {
        self.broadcast(&OutboundMessage::ExtraTimeStatus {
            minutes: state.minutes,
            is_visible: state.visible,
        });
    }
}

/// Serialize a message and push it onto one session's writer channel.
fn send_to(id: &Uuid, tx: &mpsc::UnboundedSender<Message>, message: &OutboundMessage) {
    let payload = match serde_json::to_string(message) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(error = %err, "failed to serialize session message");
            return;
        }
    };
    if tx.send(Message::Text(payload.into())).is_err() {
        warn!(session = %id, "catch-up send failed; session writer gone");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn stopped_clock() -> ClockStatus {
        ClockStatus {
            is_running: false,
            seconds: 0,
        }
    }

    fn drain_json(rx: &mut UnboundedReceiver<Message>) -> Vec<serde_json::Value> {
        let mut out = Vec::new();
        while let Ok(message) = rx.try_recv() {
            if let Message::Text(text) = message {
                out.push(serde_json::from_str(text.as_str()).unwrap());
            }
        }
        out
    }

    async fn connect_session(hub: &DisplayHub) -> (Uuid, UnboundedReceiver<Message>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = Uuid::new_v4();
        hub.connect(id, tx, stopped_clock()).await;
        (id, rx)
    }

    #[tokio::test]
    async fn catch_up_burst_covers_all_hub_state_in_order() {
        let hub = DisplayHub::new();
        hub.toggle_game_report().await;
        hub.set_extra_time(3).await;

        let (_, mut rx) = connect_session(&hub).await;
        let burst = drain_json(&mut rx);
        let kinds: Vec<&str> = burst.iter().map(|m| m["type"].as_str().unwrap()).collect();
        assert_eq!(
            kinds,
            [
                "status",
                "scoreboard_visibility",
                "players_list_visibility",
                "game_report_visibility",
                "match_info_visibility",
                "extra_time_status",
            ]
        );
        // Values reflect everything that happened before the connect.
        assert_eq!(burst[1]["isVisible"], true);
        assert_eq!(burst[3]["isVisible"], true);
        assert_eq!(burst[5]["minutes"], 3);
        assert_eq!(burst[5]["isVisible"], false);
    }

    #[tokio::test]
    async fn broadcast_survives_a_broken_session() {
        let hub = DisplayHub::new();
        let (_, mut healthy_rx) = connect_session(&hub).await;

        let (broken_tx, broken_rx) = mpsc::unbounded_channel();
        drop(broken_rx);
        hub.connect(Uuid::new_v4(), broken_tx, stopped_clock()).await;

        drain_json(&mut healthy_rx);
        hub.broadcast(&OutboundMessage::Time { seconds: 42 });

        let received = drain_json(&mut healthy_rx);
        assert_eq!(received.len(), 1);
        assert_eq!(received[0]["seconds"], 42);
        // The broken session stays registered until its disconnect event.
        assert_eq!(hub.session_count(), 2);
    }

    #[tokio::test]
    async fn double_toggle_round_trips_and_broadcasts_both_values() {
        let hub = DisplayHub::new();
        let (_, mut rx) = connect_session(&hub).await;
        drain_json(&mut rx);

        assert!(!hub.toggle_scoreboard().await);
        assert!(hub.toggle_scoreboard().await);

        let messages = drain_json(&mut rx);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["isVisible"], false);
        assert_eq!(messages[1]["isVisible"], true);
    }

    #[tokio::test]
    async fn disconnect_removes_session_from_fanout() {
        let hub = DisplayHub::new();
        let (id, mut rx) = connect_session(&hub).await;
        drain_json(&mut rx);

        hub.disconnect(&id);
        assert_eq!(hub.session_count(), 0);
        hub.broadcast(&OutboundMessage::Time { seconds: 1 });
        assert!(drain_json(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn extra_time_reaches_early_and_late_joiners() {
        let hub = DisplayHub::new();
        let (_, mut rx_a) = connect_session(&hub).await;
        drain_json(&mut rx_a);

        hub.set_extra_time(5).await;

        // B joins after the minutes were set; its catch-up carries them.
        let (_, mut rx_b) = connect_session(&hub).await;

        hub.toggle_extra_time().await;

        let a_extra: Vec<_> = drain_json(&mut rx_a)
            .into_iter()
            .filter(|m| m["type"] == "extra_time_status")
            .collect();
        assert_eq!(a_extra.len(), 2);
        assert_eq!(a_extra[0]["minutes"], 5);
        assert_eq!(a_extra[0]["isVisible"], false);
        assert_eq!(a_extra[1]["minutes"], 5);
        assert_eq!(a_extra[1]["isVisible"], true);

        let b_extra: Vec<_> = drain_json(&mut rx_b)
            .into_iter()
            .filter(|m| m["type"] == "extra_time_status")
            .collect();
        assert_eq!(b_extra.len(), 2);
        assert_eq!(b_extra[0]["minutes"], 5);
        assert_eq!(b_extra[0]["isVisible"], false);
        assert_eq!(b_extra[1]["isVisible"], true);
    }

    #[tokio::test]
    async fn set_extra_time_clamps_negative_minutes() {
        let hub = DisplayHub::new();
        let state = hub.set_extra_time(-4).await;
        assert_eq!(state.minutes, 0);
    }
}
