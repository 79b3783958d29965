//! Persisted JSON documents: the match/roster document and the overlay style
//! document. Both are stored verbatim on disk and serialized into broadcast
//! envelopes, so the serde casing here is the wire casing.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::dto::validation::validate_hex_color;

/// Lowest and highest shirt number accepted for a player.
pub const PLAYER_NUMBER_MAX: u8 = 99;

/// Which of the two teams an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TeamSide {
    /// The home side, serialized as `teamA`.
    #[serde(rename = "teamA")]
    TeamA,
    /// The away side, serialized as `teamB`.
    #[serde(rename = "teamB")]
    TeamB,
}

impl TeamSide {
    /// Wire name of the side, as it appears in documents and paths.
    pub fn as_str(self) -> &'static str {
        match self {
            TeamSide::TeamA => "teamA",
            TeamSide::TeamB => "teamB",
        }
    }
}

/// Primary/secondary color pair used for team strips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamColors {
    /// Hex color string (`#RGB` or `#RRGGBB`).
    pub primary: String,
    /// Hex color string (`#RGB` or `#RRGGBB`).
    pub secondary: String,
}

/// A goal scored by a player, split into regulation and added-time minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Regulation minute the goal was scored in.
    pub reg_minute: u32,
    /// Added-time minute, 0 when scored in regulation.
    #[serde(default)]
    pub add_minute: u32,
}

/// One player on a team roster, identified by shirt number within the team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Shirt number, unique within the team (0-99).
    pub number: u8,
    /// Display name.
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
    /// Whether the player is currently on the field.
    #[serde(default)]
    pub on_field: bool,
}

impl Player {
    /// Clear per-match statistics while keeping identity fields.
    pub fn reset_stats(&mut self) {
        self.goals.clear();
        self.yellow_cards.clear();
        self.red_cards.clear();
    }
}

/// One team's slice of the match document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamConfig {
    /// Full team name shown in the game report.
    pub name: String,
    /// Short form shown on the scoreboard strip.
    pub abbreviation: String,
    /// Current score.
    pub score: u32,
    /// Strip colors.
    pub colors: TeamColors,
    /// Roster.
    #[serde(default)]
    pub players: Vec<Player>,
}

impl TeamConfig {
    /// Look up a player by shirt number.
    pub fn player(&self, number: u8) -> Option<&Player> {
        self.players.iter().find(|p| p.number == number)
    }

    /// Look up a player by shirt number for mutation.
    pub fn player_mut(&mut self, number: u8) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.number == number)
    }
}

/// The whole match/roster document: both teams, their scores and rosters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchDocument {
    /// Home side, serialized as `teamA`.
    #[serde(rename = "teamA")]
    pub team_a: TeamConfig,
    /// Away side, serialized as `teamB`.
    #[serde(rename = "teamB")]
    pub team_b: TeamConfig,
}

impl MatchDocument {
    /// Borrow the team for `side`.
    pub fn team(&self, side: TeamSide) -> &TeamConfig {
        match side {
            TeamSide::TeamA => &self.team_a,
            TeamSide::TeamB => &self.team_b,
        }
    }

    /// Borrow the team for `side` mutably.
    pub fn team_mut(&mut self, side: TeamSide) -> &mut TeamConfig {
        match side {
            TeamSide::TeamA => &mut self.team_a,
            TeamSide::TeamB => &mut self.team_b,
        }
    }
}

impl Default for MatchDocument {
    fn default() -> Self {
        Self {
            team_a: TeamConfig {
                name: "Home".into(),
                abbreviation: "HOM".into(),
                score: 0,
                colors: TeamColors {
                    primary: "#1d4ed8".into(),
                    secondary: "#ffffff".into(),
                },
                players: Vec::new(),
            },
            team_b: TeamConfig {
                name: "Away".into(),
                abbreviation: "AWY".into(),
                score: 0,
                colors: TeamColors {
                    primary: "#b91c1c".into(),
                    secondary: "#ffffff".into(),
                },
                players: Vec::new(),
            },
        }
    }
}

impl Validate for MatchDocument {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_team(&self.team_a) {
            errors.add("teamA", e);
        }
        if let Err(e) = validate_team(&self.team_b) {
            errors.add("teamB", e);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn validate_team(team: &TeamConfig) -> Result<(), ValidationError> {
    validate_hex_color(&team.colors.primary)?;
    validate_hex_color(&team.colors.secondary)?;

    let mut seen = std::collections::HashSet::new();
    for player in &team.players {
        if player.number > PLAYER_NUMBER_MAX {
            let mut err = ValidationError::new("player_number_range");
            err.message = Some(
                format!(
                    "player number {} exceeds the maximum of {PLAYER_NUMBER_MAX}",
                    player.number
                )
                .into(),
            );
            return Err(err);
        }
        if !seen.insert(player.number) {
            let mut err = ValidationError::new("player_number_duplicate");
            err.message = Some(format!("duplicate player number {}", player.number).into());
            return Err(err);
        }
    }
    Ok(())
}

/// Where the timer sits relative to the score row on the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TimerPosition {
    /// Timer rendered below the score row.
    Under,
    /// Timer rendered to the right of the score row.
    Right,
}

/// Persisted visual style of the scoreboard overlay.
///
/// This is preference, not live state: visibility flags are deliberately
/// absent because they reset on every process restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StyleDocument {
    /// Box background color.
    pub primary: String,
    /// Main text color.
    pub secondary: String,
    /// Background opacity percentage (50-100).
    pub opacity: u8,
    /// Overlay scale percentage (50-150).
    pub scale: u16,
    /// Free-form match info line (competition, round, venue).
    #[serde(default)]
    pub match_info: String,
    /// Timer placement.
    pub timer_position: TimerPosition,
}

impl Default for StyleDocument {
    fn default() -> Self {
        Self {
            primary: "#000000".into(),
            secondary: "#ffffff".into(),
            opacity: 75,
            scale: 100,
            match_info: String::new(),
            timer_position: TimerPosition::Under,
        }
    }
}

impl Validate for StyleDocument {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Err(e) = validate_hex_color(&self.primary) {
            errors.add("primary", e);
        }
        if let Err(e) = validate_hex_color(&self.secondary) {
            errors.add("secondary", e);
        }
        if !(50..=100).contains(&self.opacity) {
            let mut err = ValidationError::new("opacity_range");
            err.message = Some("opacity must be between 50 and 100".into());
            errors.add("opacity", err);
        }
        if !(50..=150).contains(&self.scale) {
            let mut err = ValidationError::new("scale_range");
            err.message = Some("scale must be between 50 and 150".into());
            errors.add("scale", err);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(number: u8) -> Player {
        Player {
            number,
            name: format!("Player {number}"),
            goals: Vec::new(),
            yellow_cards: Vec::new(),
            red_cards: Vec::new(),
            on_field: false,
        }
    }

    #[test]
    fn default_match_document_is_valid() {
        assert!(MatchDocument::default().validate().is_ok());
    }

    #[test]
    fn duplicate_player_numbers_rejected() {
        let mut doc = MatchDocument::default();
        doc.team_a.players = vec![player(7), player(7)];
        assert!(doc.validate().is_err());
    }

    #[test]
    fn invalid_team_color_rejected() {
        let mut doc = MatchDocument::default();
        doc.team_b.colors.primary = "blue".into();
        assert!(doc.validate().is_err());
    }

    #[test]
    fn style_ranges_enforced() {
        let mut style = StyleDocument::default();
        assert!(style.validate().is_ok());
        style.opacity = 40;
        assert!(style.validate().is_err());
        style.opacity = 75;
        style.scale = 200;
        assert!(style.validate().is_err());
    }

    #[test]
    fn match_document_wire_casing() {
        let doc = MatchDocument::default();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("teamA").is_some());
        assert!(json.get("teamB").is_some());
    }

    #[test]
    fn player_wire_casing() {
        let mut entry = player(10);
        entry.goals.push(Goal {
            reg_minute: 43,
            add_minute: 2,
        });
        entry.yellow_cards.push(12);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("onField").is_some());
        assert!(json.get("yellowCards").is_some());
        assert_eq!(json["goals"][0]["regMinute"], 43);
        assert_eq!(json["goals"][0]["addMinute"], 2);
    }
}
