//! Operator command payloads accepted by the HTTP control surface, plus the
//! small response bodies the surface returns.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::documents::{Goal, Player, TeamColors, TeamSide, TimerPosition},
    dto::validation::validate_hex_color,
};

/// Plain acknowledgement body for commands without a richer response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl ActionResponse {
    /// Build an acknowledgement from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// New value of a visibility flag after a toggle.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityResponse {
    /// Current value of the flag.
    pub is_visible: bool,
}

/// Extra-time state after a mutation.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtraTimeResponse {
    /// Announced added minutes.
    pub minutes: u32,
    /// Whether the extra-time box is shown.
    pub is_visible: bool,
}

/// Set the clock to an absolute number of seconds. Negative values clamp to 0.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetTimeRequest {
    /// Target seconds; clamped to 0 when negative.
    pub seconds: i64,
}

/// Switch the clock between count-up and countdown (futsal) mode.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetModeRequest {
    /// True selects countdown mode.
    pub countdown: bool,
}

/// Set the announced extra-time minutes. Negative values clamp to 0.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetExtraTimeRequest {
    /// Added minutes; clamped to 0 when negative.
    pub minutes: i64,
}

/// Set one team's score to an exact value. Negative values clamp to 0.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetScoreRequest {
    /// Which team to update.
    pub team: TeamSide,
    /// New score; clamped to 0 when negative.
    pub score: i64,
}

/// Partial update of one team's identity fields.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct TeamInfoPatch {
    /// New full name, when present.
    pub name: Option<String>,
    /// New abbreviation, when present.
    pub abbreviation: Option<String>,
}

/// Update both teams' names and abbreviations in one call.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TeamInfoUpdate {
    /// Patch for the home side.
    #[serde(rename = "teamA", default)]
    pub team_a: TeamInfoPatch,
    /// Patch for the away side.
    #[serde(rename = "teamB", default)]
    pub team_b: TeamInfoPatch,
}

/// Replace both teams' strip colors.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CustomizationUpdate {
    /// Colors for the home side.
    #[serde(rename = "teamA")]
    #[validate(nested)]
    pub team_a: ColorsInput,
    /// Colors for the away side.
    #[serde(rename = "teamB")]
    #[validate(nested)]
    pub team_b: ColorsInput,
}

/// Incoming color pair, validated as hex colors.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ColorsInput {
    /// Hex color string.
    #[validate(custom(function = validate_hex_color))]
    pub primary: String,
    /// Hex color string.
    #[validate(custom(function = validate_hex_color))]
    pub secondary: String,
}

impl From<ColorsInput> for TeamColors {
    fn from(input: ColorsInput) -> Self {
        Self {
            primary: input.primary,
            secondary: input.secondary,
        }
    }
}

/// Full player payload used both when adding and when editing/replacing.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpsert {
    /// Shirt number, 0-99, unique within the team.
    #[validate(range(max = 99))]
    pub number: u8,
    /// Display name.
    #[validate(length(min = 1, message = "player name must not be empty"))]
    pub name: String,
    /// Goals scored this match.
    #[serde(default)]
    pub goals: Vec<Goal>,
    /// Minutes at which yellow cards were shown.
    #[serde(default)]
    pub yellow_cards: Vec<u32>,
    /// Minutes at which red cards were shown.
    #[serde(default)]
    pub red_cards: Vec<u32>,
    /// Whether the player starts on the field.
    #[serde(default)]
    pub on_field: bool,
}

impl From<PlayerUpsert> for Player {
    fn from(input: PlayerUpsert) -> Self {
        Self {
            number: input.number,
            name: input.name,
            goals: input.goals,
            yellow_cards: input.yellow_cards,
            red_cards: input.red_cards,
            on_field: input.on_field,
        }
    }
}

/// Record a goal for a player.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddGoalRequest {
    /// Regulation minute, 1-999.
    #[validate(range(min = 1, max = 999))]
    pub reg_minute: u32,
    /// Added-time minute, 0-99.
    #[serde(default)]
    #[validate(range(max = 99))]
    pub add_minute: u32,
}

impl From<AddGoalRequest> for Goal {
    fn from(request: AddGoalRequest) -> Self {
        Self {
            reg_minute: request.reg_minute,
            add_minute: request.add_minute,
        }
    }
}

/// Which card was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// A caution.
    Yellow,
    /// A sending-off.
    Red,
}

/// Record a card for a player.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddCardRequest {
    /// Yellow or red.
    pub kind: CardKind,
    /// Match minute, 1-999.
    #[validate(range(min = 1, max = 999))]
    pub minute: u32,
}

/// Update the scoreboard's visual style (colors, opacity, scale).
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct StyleUpdate {
    /// Box background color.
    #[validate(custom(function = validate_hex_color))]
    pub primary: String,
    /// Main text color.
    #[validate(custom(function = validate_hex_color))]
    pub secondary: String,
    /// Background opacity percentage.
    #[validate(range(min = 50, max = 100))]
    pub opacity: u8,
    /// Overlay scale percentage.
    #[validate(range(min = 50, max = 150))]
    pub scale: u16,
}

/// Replace the free-form match info line.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct MatchInfoUpdate {
    /// New match info text; may be empty to clear the line.
    #[validate(length(max = 200))]
    pub text: String,
}

/// Change the timer placement on the overlay.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutUpdate {
    /// New timer placement.
    pub timer_position: TimerPosition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_upsert_rejects_empty_name() {
        let input = PlayerUpsert {
            number: 10,
            name: String::new(),
            goals: Vec::new(),
            yellow_cards: Vec::new(),
            red_cards: Vec::new(),
            on_field: false,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn customization_rejects_bad_color() {
        let input = CustomizationUpdate {
            team_a: ColorsInput {
                primary: "#fff".into(),
                secondary: "#000".into(),
            },
            team_b: ColorsInput {
                primary: "red".into(),
                secondary: "#000".into(),
            },
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn goal_request_minute_bounds() {
        let valid = AddGoalRequest {
            reg_minute: 45,
            add_minute: 3,
        };
        assert!(valid.validate().is_ok());

        let invalid = AddGoalRequest {
            reg_minute: 0,
            add_minute: 0,
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn team_side_deserializes_wire_names() {
        let side: TeamSide = serde_json::from_str("\"teamA\"").unwrap();
        assert_eq!(side, TeamSide::TeamA);
    }
}
