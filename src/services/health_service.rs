use tracing::warn;

use crate::{config::resolve_data_dir, dto::health::HealthResponse};

/// Respond with a health payload, degrading when the data directory cannot
/// accept writes (documents then live in memory only).
pub async fn health_status() -> HealthResponse {
    let data_dir = resolve_data_dir();
    let probe = data_dir.join(".writecheck");
    match tokio::fs::write(&probe, b"ok").await {
        Ok(()) => {
            let _ = tokio::fs::remove_file(&probe).await;
            HealthResponse::ok()
        }
        Err(err) => {
            warn!(path = %data_dir.display(), error = %err, "data directory is not writable");
            HealthResponse::degraded()
        }
    }
}
