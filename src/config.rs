//! Resolution of the on-disk data directory holding the persisted documents.

use std::{env, path::PathBuf};

/// Default location on disk where the server keeps its JSON documents.
const DEFAULT_DATA_DIR: &str = "data";
/// Environment variable that overrides [`DEFAULT_DATA_DIR`]. Used by the
/// packaged desktop build, which points this at its per-user data folder.
const DATA_DIR_ENV: &str = "PITCHSIDE_BACK_DATA_DIR";

/// Resolve the data directory taking the environment override into account.
pub fn resolve_data_dir() -> PathBuf {
    env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}
