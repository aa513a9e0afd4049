//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name of the metadata snapshot inside the download root.
pub const SNAPSHOT_FILE: &str = "songs.json";

/// Location of the metadata snapshot.
pub fn snapshot_path(root: &Path) -> PathBuf {
    root.join(SNAPSHOT_FILE)
}

/// Ensure a directory exists, creating it and its parents if necessary.
///
/// Safe to call concurrently for the same path.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}
