//! File-backed store for the match and style documents.
//!
//! Each document lives in one JSON file guarded by its own async mutex so
//! concurrent updates cannot interleave partial reads or writes. Updates are
//! applied in memory first and then saved best-effort: a failed save is
//! logged and the in-memory state stands.

use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::dao::documents::{MatchDocument, StyleDocument};

/// File name of the match/roster document inside the data directory.
const MATCH_FILE: &str = "match.json";
/// File name of the style document inside the data directory.
const STYLE_FILE: &str = "style.json";

/// Error raised when a document cannot be written to disk.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Serialization or filesystem failure while saving a document.
    #[error("failed to save `{path}`: {source}")]
    Save {
        /// Path of the document file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
}

/// One JSON document bound to a file, guarded by a per-file mutex.
pub struct DocumentFile<T> {
    path: PathBuf,
    inner: Mutex<T>,
}

impl<T> DocumentFile<T>
where
    T: Serialize + DeserializeOwned + Default + Clone,
{
    /// Load the document from `path`, falling back to the bundled default
    /// when the file is missing or unreadable.
    pub async fn load(path: PathBuf) -> Self {
        let inner = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => match serde_json::from_str::<T>(&contents) {
                Ok(document) => {
                    info!(path = %path.display(), "loaded document");
                    document
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse document; using built-in defaults"
                    );
                    T::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "document not found; using built-in defaults"
                );
                T::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read document; using built-in defaults"
                );
                T::default()
            }
        };

        Self {
            path,
            inner: Mutex::new(inner),
        }
    }

    /// Snapshot the current in-memory document.
    pub async fn get(&self) -> T {
        self.inner.lock().await.clone()
    }

    /// Apply `mutate` to the document under the file lock and persist the
    /// result. When the closure fails, nothing is saved; the closure must not
    /// mutate on its error path.
    ///
    /// A save failure does not fail the update: the in-memory mutation stands
    /// and the error is logged. A crash before the next successful save loses
    /// the last change, which is an accepted limitation of this local tool.
    pub async fn update<F, R, E>(&self, mutate: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E>,
    {
        let mut guard = self.inner.lock().await;
        let result = mutate(&mut guard)?;
        if let Err(err) = write_document(&self.path, &*guard).await {
            warn!(error = %err, "document save failed; keeping in-memory state");
        }
        Ok(result)
    }

    /// Replace the whole document and persist it. Used by raw imports, after
    /// the caller has validated the payload.
    pub async fn replace(&self, document: T) {
        let mut guard = self.inner.lock().await;
        *guard = document;
        if let Err(err) = write_document(&self.path, &*guard).await {
            warn!(error = %err, "document save failed; keeping in-memory state");
        }
    }
}

async fn write_document<T: Serialize>(path: &Path, document: &T) -> Result<(), StorageError> {
    let payload = serde_json::to_string_pretty(document).map_err(|err| StorageError::Save {
        path: path.to_path_buf(),
        source: err.into(),
    })?;
    tokio::fs::write(path, payload)
        .await
        .map_err(|err| StorageError::Save {
            path: path.to_path_buf(),
            source: err,
        })
}

/// Owner of the two persisted documents.
pub struct ConfigStore {
    match_doc: DocumentFile<MatchDocument>,
    style_doc: DocumentFile<StyleDocument>,
}

impl ConfigStore {
    /// Load both documents from `data_dir`, creating the directory when it
    /// does not exist yet so later saves have somewhere to land.
    pub async fn load(data_dir: &Path) -> Self {
        if let Err(err) = tokio::fs::create_dir_all(data_dir).await {
            warn!(
                path = %data_dir.display(),
                error = %err,
                "failed to create data directory; saves will fail"
            );
        }

        Self {
            match_doc: DocumentFile::load(data_dir.join(MATCH_FILE)).await,
            style_doc: DocumentFile::load(data_dir.join(STYLE_FILE)).await,
        }
    }

    /// The match/roster document file.
    pub fn match_doc(&self) -> &DocumentFile<MatchDocument> {
        &self.match_doc
    }

    /// The style document file.
    pub fn style_doc(&self) -> &DocumentFile<StyleDocument> {
        &self.style_doc
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pitchside-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_defaults() {
        let dir = scratch_dir();
        let store = ConfigStore::load(&dir).await;
        assert_eq!(store.match_doc().get().await, MatchDocument::default());
        assert_eq!(store.style_doc().get().await, StyleDocument::default());
    }

    #[tokio::test]
    async fn corrupt_file_falls_back_to_defaults() {
        let dir = scratch_dir();
        std::fs::write(dir.join(MATCH_FILE), "{not json").unwrap();
        let store = ConfigStore::load(&dir).await;
        assert_eq!(store.match_doc().get().await, MatchDocument::default());
    }

    #[tokio::test]
    async fn update_persists_across_reload() {
        let dir = scratch_dir();
        {
            let store = ConfigStore::load(&dir).await;
            store
                .match_doc()
                .update(|doc| {
                    doc.team_a.score = 3;
                    Ok::<_, Infallible>(())
                })
                .await
                .unwrap();
        }

        let reloaded = ConfigStore::load(&dir).await;
        assert_eq!(reloaded.match_doc().get().await.team_a.score, 3);
    }

    #[tokio::test]
    async fn failed_update_leaves_document_untouched() {
        let dir = scratch_dir();
        let store = ConfigStore::load(&dir).await;
        let result = store
            .match_doc()
            .update(|_| Err::<(), _>("rejected"))
            .await;
        assert!(result.is_err());
        assert_eq!(store.match_doc().get().await, MatchDocument::default());
    }
}
