//! Server-to-client WebSocket messages.
//!
//! Display clients never send structured messages; inbound traffic is
//! drained. Every outbound message carries an absolute state value so a
//! client can rebuild its view from any message, not just from a history.

use serde::Serialize;
use utoipa::ToSchema;

use crate::dao::documents::{MatchDocument, StyleDocument};

/// Clock status as seen by display clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClockStatus {
    /// Whether the advancing task is active.
    pub is_running: bool,
    /// Current elapsed (or remaining, in countdown mode) seconds.
    pub seconds: u64,
}

/// Messages pushed to display sessions, discriminated by `type`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    /// Clock run state and current seconds.
    #[serde(rename = "status", rename_all = "camelCase")]
    Status {
        /// Whether the clock is running.
        is_running: bool,
        /// Current seconds.
        seconds: u64,
    },
    /// Clock seconds only, emitted on every tick.
    #[serde(rename = "time")]
    Time {
        /// Current seconds.
        seconds: u64,
    },
    /// Full match document snapshot.
    #[serde(rename = "config")]
    Config {
        /// The match document.
        config: MatchDocument,
    },
    /// Full style document snapshot.
    #[serde(rename = "scoreboard_style")]
    ScoreboardStyle {
        /// The style document.
        style: StyleDocument,
    },
    /// Scoreboard overlay shown or hidden.
    #[serde(rename = "scoreboard_visibility", rename_all = "camelCase")]
    ScoreboardVisibility {
        /// Current value of the flag.
        is_visible: bool,
    },
    /// Players list overlay shown or hidden.
    #[serde(rename = "players_list_visibility", rename_all = "camelCase")]
    PlayersListVisibility {
        /// Current value of the flag.
        is_visible: bool,
    },
    /// Game report overlay shown or hidden.
    #[serde(rename = "game_report_visibility", rename_all = "camelCase")]
    GameReportVisibility {
        /// Current value of the flag.
        is_visible: bool,
    },
    /// Match info row shown or hidden.
    #[serde(rename = "match_info_visibility", rename_all = "camelCase")]
    MatchInfoVisibility {
        /// Current value of the flag.
        is_visible: bool,
    },
    /// Extra-time minutes and visibility.
    #[serde(rename = "extra_time_status", rename_all = "camelCase")]
    ExtraTimeStatus {
        /// Announced added minutes.
        minutes: u32,
        /// Whether the extra-time box is shown.
        is_visible: bool,
    },
}

impl From<ClockStatus> for OutboundMessage {
    fn from(status: ClockStatus) -> Self {
        OutboundMessage::Status {
            is_running: status.is_running,
            seconds: status.seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_shape() {
        let message = OutboundMessage::Status {
            is_running: true,
            seconds: 90,
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["type"], "status");
        assert_eq!(json["isRunning"], true);
        assert_eq!(json["seconds"], 90);
    }

    #[test]
    fn visibility_wire_shape() {
        let message = OutboundMessage::PlayersListVisibility { is_visible: false };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["type"], "players_list_visibility");
        assert_eq!(json["isVisible"], false);
    }

    #[test]
    fn extra_time_wire_shape() {
        let message = OutboundMessage::ExtraTimeStatus {
            minutes: 5,
            is_visible: true,
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["type"], "extra_time_status");
        assert_eq!(json["minutes"], 5);
        assert_eq!(json["isVisible"], true);
    }

    #[test]
    fn config_wire_shape() {
        let message = OutboundMessage::Config {
            config: MatchDocument::default(),
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["type"], "config");
        assert!(json["config"]["teamA"].is_object());
    }
}
