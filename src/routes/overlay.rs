use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::requests::{ExtraTimeResponse, SetExtraTimeRequest, VisibilityResponse},
    state::{ExtraTimeState, SharedState},
};

/// Overlay visibility toggles and the extra-time announcement. These touch
/// only ephemeral hub state, so the handlers talk to the hub directly.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/api/extra-time", post(set_extra_time))
        .route("/api/extra-time/toggle", post(toggle_extra_time))
        .route("/api/overlay/scoreboard/toggle", post(toggle_scoreboard))
        .route("/api/overlay/players-list/toggle", post(toggle_players_list))
        .route("/api/overlay/game-report/toggle", post(toggle_game_report))
        .route("/api/overlay/match-info/toggle", post(toggle_match_info))
}

#[utoipa::path(
    post,
    path = "/api/extra-time",
    tag = "overlay",
    request_body = SetExtraTimeRequest,
    responses((status = 200, description = "Extra-time minutes set", body = ExtraTimeResponse))
)]
/// Set the announced extra-time minutes without changing the visibility.
pub async fn set_extra_time(
    State(state): State<SharedState>,
    Json(payload): Json<SetExtraTimeRequest>,
) -> Json<ExtraTimeResponse> {
    let extra = state.hub().set_extra_time(payload.minutes).await;
    Json(extra_time_response(extra))
}

#[utoipa::path(
    post,
    path = "/api/extra-time/toggle",
    tag = "overlay",
    responses((status = 200, description = "Extra-time visibility toggled", body = ExtraTimeResponse))
)]
/// Show or hide the extra-time box, keeping the announced minutes.
pub async fn toggle_extra_time(State(state): State<SharedState>) -> Json<ExtraTimeResponse> {
    let extra = state.hub().toggle_extra_time().await;
    Json(extra_time_response(extra))
}

#[utoipa::path(
    post,
    path = "/api/overlay/scoreboard/toggle",
    tag = "overlay",
    responses((status = 200, description = "Scoreboard visibility toggled", body = VisibilityResponse))
)]
/// Show or hide the scoreboard overlay.
pub async fn toggle_scoreboard(State(state): State<SharedState>) -> Json<VisibilityResponse> {
    let is_visible = state.hub().toggle_scoreboard().await;
    Json(VisibilityResponse { is_visible })
}

#[utoipa::path(
    post,
    path = "/api/overlay/players-list/toggle",
    tag = "overlay",
    responses((status = 200, description = "Players list visibility toggled", body = VisibilityResponse))
)]
/// Show or hide the players list overlay.
pub async fn toggle_players_list(State(state): State<SharedState>) -> Json<VisibilityResponse> {
    let is_visible = state.hub().toggle_players_list().await;
    Json(VisibilityResponse { is_visible })
}

#[utoipa::path(
    post,
    path = "/api/overlay/game-report/toggle",
    tag = "overlay",
    responses((status = 200, description = "Game report visibility toggled", body = VisibilityResponse))
)]
/// Show or hide the game report overlay.
pub async fn toggle_game_report(State(state): State<SharedState>) -> Json<VisibilityResponse> {
    let is_visible = state.hub().toggle_game_report().await;
    Json(VisibilityResponse { is_visible })
}

#[utoipa::path(
    post,
    path = "/api/overlay/match-info/toggle",
    tag = "overlay",
    responses((status = 200, description = "Match info visibility toggled", body = VisibilityResponse))
)]
/// Show or hide the match info row.
pub async fn toggle_match_info(State(state): State<SharedState>) -> Json<VisibilityResponse> {
    let is_visible = state.hub().toggle_match_info().await;
    Json(VisibilityResponse { is_visible })
}

fn extra_time_response(extra: ExtraTimeState) -> ExtraTimeResponse {
    ExtraTimeResponse {
        minutes: extra.minutes,
        is_visible: extra.visible,
    }
}
