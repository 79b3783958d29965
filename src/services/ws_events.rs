//! Broadcast helpers pairing each state mutation with its wire message.

use crate::{
    dao::documents::{MatchDocument, StyleDocument},
    dto::ws::{ClockStatus, OutboundMessage},
    state::SharedState,
};

/// Broadcast the clock's run state and current seconds.
pub fn broadcast_status(state: &SharedState, status: ClockStatus) {
    state.hub().broadcast(&OutboundMessage::from(status));
}

/// Broadcast the clock's current seconds.
pub fn broadcast_time(state: &SharedState, seconds: u64) {
    state.hub().broadcast(&OutboundMessage::Time { seconds });
}

/// Broadcast a full match document snapshot.
pub fn broadcast_config(state: &SharedState, config: MatchDocument) {
    state.hub().broadcast(&OutboundMessage::Config { config });
}

/// Broadcast a full style document snapshot.
pub fn broadcast_style(state: &SharedState, style: StyleDocument) {
    state.hub().broadcast(&OutboundMessage::ScoreboardStyle { style });
}
