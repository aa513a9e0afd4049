//! Download module for song exporting.
//!
//! This module provides:
//! - Availability and subscription checks
//! - The single song pipeline
//! - Bounded-concurrency download of a collection
//! - Progress tracking and run statistics

pub mod availability;
pub mod orchestrator;
pub mod progress;
pub mod song;

pub use availability::{resolve_availability, PlayableDecision, UnavailableReason};
pub use orchestrator::{download_collection, DownloadOptions};
pub use progress::{DownloadSummary, ProgressCounter, ProgressEvent, SongOutcome};
pub use song::download_song;
