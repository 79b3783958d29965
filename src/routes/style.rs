use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dao::documents::StyleDocument,
    dto::requests::{LayoutUpdate, MatchInfoUpdate, StyleUpdate},
    error::AppError,
    services::style_service,
    state::SharedState,
};

/// Overlay styling and layout. Every mutation returns the updated style
/// document, which is also broadcast to all display clients.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/api/style", post(update_style))
        .route("/api/match-info", post(update_match_info))
        .route("/api/layout", post(update_layout))
        .route("/api/export/style", get(export_style))
        .route("/api/import/style", post(import_style))
}

#[utoipa::path(
    post,
    path = "/api/style",
    tag = "style",
    request_body = StyleUpdate,
    responses(
        (status = 200, description = "Style updated", body = StyleDocument),
        (status = 400, description = "Color or range out of bounds")
    )
)]
/// Update the overlay colors, opacity and scale.
pub async fn update_style(
    State(state): State<SharedState>,
    Json(payload): Json<StyleUpdate>,
) -> Result<Json<StyleDocument>, AppError> {
    payload.validate()?;
    Ok(Json(style_service::update_style(&state, payload).await?))
}

#[utoipa::path(
    post,
    path = "/api/match-info",
    tag = "style",
    request_body = MatchInfoUpdate,
    responses((status = 200, description = "Match info line replaced", body = StyleDocument))
)]
/// Replace the free-form match info line.
pub async fn update_match_info(
    State(state): State<SharedState>,
    Json(payload): Json<MatchInfoUpdate>,
) -> Result<Json<StyleDocument>, AppError> {
    payload.validate()?;
    Ok(Json(style_service::update_match_info(&state, payload).await?))
}

#[utoipa::path(
    post,
    path = "/api/layout",
    tag = "style",
    request_body = LayoutUpdate,
    responses((status = 200, description = "Timer placement changed", body = StyleDocument))
)]
/// Move the timer relative to the score row.
pub async fn update_layout(
    State(state): State<SharedState>,
    Json(payload): Json<LayoutUpdate>,
) -> Result<Json<StyleDocument>, AppError> {
    Ok(Json(style_service::update_layout(&state, payload).await?))
}

#[utoipa::path(
    get,
    path = "/api/export/style",
    tag = "style",
    responses((status = 200, description = "Style document for backup", body = StyleDocument))
)]
/// Export the style document for backup.
pub async fn export_style(State(state): State<SharedState>) -> Json<StyleDocument> {
    Json(style_service::style_document(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/import/style",
    tag = "style",
    request_body = StyleDocument,
    responses(
        (status = 200, description = "Style document replaced", body = StyleDocument),
        (status = 400, description = "Document fails validation")
    )
)]
/// Replace the whole style document from a backup.
pub async fn import_style(
    State(state): State<SharedState>,
    Json(payload): Json<StyleDocument>,
) -> Result<Json<StyleDocument>, AppError> {
    payload.validate()?;
    Ok(Json(style_service::import_document(&state, payload).await))
}
