//! Library module.
//!
//! Provides:
//! - Full collection enumeration over paged listing calls
//! - The metadata snapshot written before downloading

pub mod collection;
pub mod snapshot;

pub use collection::{fetch_collection, remaining_offsets, Collection};
pub use snapshot::write_snapshot;
