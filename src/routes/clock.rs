use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::requests::{ActionResponse, SetModeRequest, SetTimeRequest},
    services::clock_service,
    state::SharedState,
};

/// Match clock control endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/api/timer/start", post(start_timer))
        .route("/api/timer/stop", post(stop_timer))
        .route("/api/timer/reset", post(reset_timer))
        .route("/api/timer/set", post(set_timer))
        .route("/api/timer/mode", post(set_timer_mode))
}

#[utoipa::path(
    post,
    path = "/api/timer/start",
    tag = "timer",
    responses((status = 200, description = "Timer started (no-op when already running)", body = ActionResponse))
)]
/// Start the match clock. Starting an already running clock is a no-op, as
/// is starting a countdown that sits at zero.
pub async fn start_timer(State(state): State<SharedState>) -> Json<ActionResponse> {
    clock_service::start(&state).await;
    Json(ActionResponse::new("timer started"))
}

#[utoipa::path(
    post,
    path = "/api/timer/stop",
    tag = "timer",
    responses((status = 200, description = "Timer stopped (no-op when already stopped)", body = ActionResponse))
)]
/// Stop the match clock, keeping the current seconds.
pub async fn stop_timer(State(state): State<SharedState>) -> Json<ActionResponse> {
    clock_service::stop(&state).await;
    Json(ActionResponse::new("timer stopped"))
}

#[utoipa::path(
    post,
    path = "/api/timer/reset",
    tag = "timer",
    responses((status = 200, description = "Timer stopped and reset", body = ActionResponse))
)]
/// Stop the clock and restore the mode's reset value: zero in count-up mode,
/// the last countdown target in countdown mode.
pub async fn reset_timer(State(state): State<SharedState>) -> Json<ActionResponse> {
    let seconds = clock_service::reset(&state).await;
    Json(ActionResponse::new(format!("timer reset to {seconds} seconds")))
}

#[utoipa::path(
    post,
    path = "/api/timer/set",
    tag = "timer",
    request_body = SetTimeRequest,
    responses((status = 200, description = "Timer set to an absolute value", body = ActionResponse))
)]
/// Set the clock to an absolute number of seconds without touching the run
/// state. Negative values clamp to zero.
pub async fn set_timer(
    State(state): State<SharedState>,
    Json(payload): Json<SetTimeRequest>,
) -> Json<ActionResponse> {
    let seconds = clock_service::set_time(&state, payload.seconds).await;
    Json(ActionResponse::new(format!("timer set to {seconds} seconds")))
}

#[utoipa::path(
    post,
    path = "/api/timer/mode",
    tag = "timer",
    request_body = SetModeRequest,
    responses((status = 200, description = "Timer mode switched; the clock is stopped", body = ActionResponse))
)]
/// Switch between count-up and countdown mode. The clock stops as part of
/// the switch.
pub async fn set_timer_mode(
    State(state): State<SharedState>,
    Json(payload): Json<SetModeRequest>,
) -> Json<ActionResponse> {
    clock_service::set_mode(&state, payload.countdown).await;
    let mode = if payload.countdown { "countdown" } else { "count-up" };
    Json(ActionResponse::new(format!("timer mode set to {mode}")))
}
