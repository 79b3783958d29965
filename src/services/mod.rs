/// Clock operations and the ticker task.
pub mod clock_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Match document mutations.
pub mod match_service;
/// Style document mutations.
pub mod style_service;
/// WebSocket connection handling for display clients.
pub mod websocket_service;
/// Broadcast message helpers.
pub mod ws_events;
