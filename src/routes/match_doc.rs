use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use validator::Validate;

use crate::{
    dao::documents::{MatchDocument, TeamSide},
    dto::requests::{
        AddCardRequest, AddGoalRequest, CustomizationUpdate, PlayerUpsert, SetScoreRequest,
        TeamInfoUpdate,
    },
    error::AppError,
    services::match_service,
    state::SharedState,
};

/// Scores, rosters and match events. Every mutation returns the updated
/// match document, which is also broadcast to all display clients.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/api/config", get(get_config))
        .route("/api/score/set", post(set_score))
        .route("/api/team-info", post(update_team_info))
        .route("/api/customization", post(update_customization))
        .route("/api/teams/{team}/players", post(add_player))
        .route(
            "/api/teams/{team}/players/{number}",
            put(edit_player).delete(delete_player),
        )
        .route("/api/teams/{team}/players/{number}/goals", post(add_goal))
        .route("/api/teams/{team}/players/{number}/cards", post(add_card))
        .route(
            "/api/teams/{team}/players/{number}/toggle-field",
            post(toggle_player_field),
        )
        .route("/api/teams/{team}/reset-stats", post(reset_team_stats))
        .route("/api/export/match", get(export_match))
        .route("/api/import/match", post(import_match))
}

#[utoipa::path(
    get,
    path = "/api/config",
    tag = "match",
    responses((status = 200, description = "Current match document", body = MatchDocument))
)]
/// Return the current match document.
pub async fn get_config(State(state): State<SharedState>) -> Json<MatchDocument> {
    Json(match_service::full_document(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/score/set",
    tag = "match",
    request_body = SetScoreRequest,
    responses((status = 200, description = "Score updated", body = MatchDocument))
)]
/// Set one team's score to an exact value.
pub async fn set_score(
    State(state): State<SharedState>,
    Json(payload): Json<SetScoreRequest>,
) -> Result<Json<MatchDocument>, AppError> {
    Ok(Json(match_service::set_score(&state, payload).await?))
}

#[utoipa::path(
    post,
    path = "/api/team-info",
    tag = "match",
    request_body = TeamInfoUpdate,
    responses((status = 200, description = "Team names updated", body = MatchDocument))
)]
/// Update both teams' names and abbreviations.
pub async fn update_team_info(
    State(state): State<SharedState>,
    Json(payload): Json<TeamInfoUpdate>,
) -> Result<Json<MatchDocument>, AppError> {
    Ok(Json(match_service::update_team_info(&state, payload).await?))
}

#[utoipa::path(
    post,
    path = "/api/customization",
    tag = "match",
    request_body = CustomizationUpdate,
    responses(
        (status = 200, description = "Team colors updated", body = MatchDocument),
        (status = 400, description = "Invalid hex color")
    )
)]
/// Replace both teams' strip colors.
pub async fn update_customization(
    State(state): State<SharedState>,
    Json(payload): Json<CustomizationUpdate>,
) -> Result<Json<MatchDocument>, AppError> {
    payload.validate()?;
    Ok(Json(match_service::update_colors(&state, payload).await?))
}

#[utoipa::path(
    post,
    path = "/api/teams/{team}/players",
    tag = "match",
    params(("team" = String, Path, description = "Team side, `teamA` or `teamB`")),
    request_body = PlayerUpsert,
    responses(
        (status = 200, description = "Player added", body = MatchDocument),
        (status = 400, description = "Invalid player or duplicate shirt number")
    )
)]
/// Add a player to a team roster.
pub async fn add_player(
    State(state): State<SharedState>,
    Path(team): Path<TeamSide>,
    Json(payload): Json<PlayerUpsert>,
) -> Result<Json<MatchDocument>, AppError> {
    payload.validate()?;
    Ok(Json(match_service::add_player(&state, team, payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/teams/{team}/players/{number}",
    tag = "match",
    params(
        ("team" = String, Path, description = "Team side, `teamA` or `teamB`"),
        ("number" = u8, Path, description = "Current shirt number of the player")
    ),
    request_body = PlayerUpsert,
    responses(
        (status = 200, description = "Player replaced", body = MatchDocument),
        (status = 404, description = "No player with that shirt number")
    )
)]
/// Replace a player. The payload may carry a new shirt number as long as it
/// is free.
pub async fn edit_player(
    State(state): State<SharedState>,
    Path((team, number)): Path<(TeamSide, u8)>,
    Json(payload): Json<PlayerUpsert>,
) -> Result<Json<MatchDocument>, AppError> {
    payload.validate()?;
    Ok(Json(
        match_service::edit_player(&state, team, number, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/teams/{team}/players/{number}",
    tag = "match",
    params(
        ("team" = String, Path, description = "Team side, `teamA` or `teamB`"),
        ("number" = u8, Path, description = "Shirt number of the player")
    ),
    responses(
        (status = 200, description = "Player removed", body = MatchDocument),
        (status = 404, description = "No player with that shirt number")
    )
)]
/// Remove a player from a team roster.
pub async fn delete_player(
    State(state): State<SharedState>,
    Path((team, number)): Path<(TeamSide, u8)>,
) -> Result<Json<MatchDocument>, AppError> {
    Ok(Json(match_service::delete_player(&state, team, number).await?))
}

#[utoipa::path(
    post,
    path = "/api/teams/{team}/players/{number}/goals",
    tag = "match",
    params(
        ("team" = String, Path, description = "Team side, `teamA` or `teamB`"),
        ("number" = u8, Path, description = "Shirt number of the scorer")
    ),
    request_body = AddGoalRequest,
    responses(
        (status = 200, description = "Goal recorded", body = MatchDocument),
        (status = 404, description = "No player with that shirt number")
    )
)]
/// Record a goal for a player. The team score is set separately.
pub async fn add_goal(
    State(state): State<SharedState>,
    Path((team, number)): Path<(TeamSide, u8)>,
    Json(payload): Json<AddGoalRequest>,
) -> Result<Json<MatchDocument>, AppError> {
    payload.validate()?;
    Ok(Json(
        match_service::add_goal(&state, team, number, payload).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/teams/{team}/players/{number}/cards",
    tag = "match",
    params(
        ("team" = String, Path, description = "Team side, `teamA` or `teamB`"),
        ("number" = u8, Path, description = "Shirt number of the player")
    ),
    request_body = AddCardRequest,
    responses(
        (status = 200, description = "Card recorded", body = MatchDocument),
        (status = 404, description = "No player with that shirt number")
    )
)]
/// Record a yellow or red card for a player.
pub async fn add_card(
    State(state): State<SharedState>,
    Path((team, number)): Path<(TeamSide, u8)>,
    Json(payload): Json<AddCardRequest>,
) -> Result<Json<MatchDocument>, AppError> {
    payload.validate()?;
    Ok(Json(
        match_service::add_card(&state, team, number, payload).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/teams/{team}/players/{number}/toggle-field",
    tag = "match",
    params(
        ("team" = String, Path, description = "Team side, `teamA` or `teamB`"),
        ("number" = u8, Path, description = "Shirt number of the player")
    ),
    responses(
        (status = 200, description = "On-field flag flipped", body = MatchDocument),
        (status = 404, description = "No player with that shirt number")
    )
)]
/// Flip whether a player is on the field.
pub async fn toggle_player_field(
    State(state): State<SharedState>,
    Path((team, number)): Path<(TeamSide, u8)>,
) -> Result<Json<MatchDocument>, AppError> {
    Ok(Json(
        match_service::toggle_on_field(&state, team, number).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/teams/{team}/reset-stats",
    tag = "match",
    params(("team" = String, Path, description = "Team side, `teamA` or `teamB`")),
    responses((status = 200, description = "Player statistics cleared", body = MatchDocument))
)]
/// Clear goals and cards for every player on one team.
pub async fn reset_team_stats(
    State(state): State<SharedState>,
    Path(team): Path<TeamSide>,
) -> Result<Json<MatchDocument>, AppError> {
    Ok(Json(match_service::reset_stats(&state, team).await?))
}

#[utoipa::path(
    get,
    path = "/api/export/match",
    tag = "match",
    responses((status = 200, description = "Match document for backup", body = MatchDocument))
)]
/// Export the match document for backup.
pub async fn export_match(State(state): State<SharedState>) -> Json<MatchDocument> {
    Json(match_service::full_document(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/import/match",
    tag = "match",
    request_body = MatchDocument,
    responses(
        (status = 200, description = "Match document replaced", body = MatchDocument),
        (status = 400, description = "Document fails validation")
    )
)]
/// Replace the whole match document from a backup.
pub async fn import_match(
    State(state): State<SharedState>,
    Json(payload): Json<MatchDocument>,
) -> Result<Json<MatchDocument>, AppError> {
    payload.validate()?;
    Ok(Json(match_service::import_document(&state, payload).await))
}
