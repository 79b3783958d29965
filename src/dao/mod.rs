//! Persistence layer: document models and the file-backed config store.

/// Persisted match and style document models.
pub mod documents;
/// File-backed store with per-file locking.
pub mod store;
