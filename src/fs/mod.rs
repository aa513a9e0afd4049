//! Filesystem module.
//!
//! Provides:
//! - Destination path and encoding resolution
//! - Directory management

pub mod naming;
pub mod paths;

pub use naming::{choose_encoding, file_extension, resolve_target, DownloadTarget};
pub use paths::{ensure_dir, snapshot_path, SNAPSHOT_FILE};
