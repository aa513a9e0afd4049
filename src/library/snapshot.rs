//! On-disk metadata snapshot of the library.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::{ensure_dir, snapshot_path};
use crate::library::collection::Collection;

/// Write the collection as pretty-printed JSON to `<root>/songs.json`.
pub async fn write_snapshot(root: &Path, collection: &Collection) -> Result<PathBuf> {
    ensure_dir(root).await?;

    let path = snapshot_path(root);
    let json = serde_json::to_string_pretty(&collection.songs)?;
    tokio::fs::write(&path, json).await?;

    tracing::debug!("Wrote metadata snapshot to {}", path.display());
    Ok(path)
}
