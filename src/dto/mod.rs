//! Request/response bodies and wire message definitions.

/// Health check response body.
pub mod health;
/// HTTP request payloads and shared response bodies.
pub mod requests;
/// Validation helpers shared by DTOs and documents.
pub mod validation;
/// WebSocket messages pushed to display clients.
pub mod ws;
