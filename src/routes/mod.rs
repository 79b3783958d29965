use axum::Router;

use crate::state::SharedState;

/// Match clock endpoints.
pub mod clock;
/// Swagger UI and OpenAPI document.
pub mod docs;
/// Health check endpoint.
pub mod health;
/// Score, roster and match event endpoints.
pub mod match_doc;
/// Overlay visibility and extra-time endpoints.
pub mod overlay;
/// Style and layout endpoints.
pub mod style;
/// Display WebSocket endpoint.
pub mod websocket;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(websocket::router())
        .merge(clock::router())
        .merge(overlay::router())
        .merge(match_doc::router())
        .merge(style::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
