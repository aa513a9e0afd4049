//! Download progress and run statistics.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::download::availability::UnavailableReason;

/// Snapshot of progress after a song reached a counted outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub completed: u64,
    pub total: u64,
    pub percent: u64,
}

/// Counter of finished songs, shared by all download tasks.
#[derive(Debug)]
pub struct ProgressCounter {
    completed: AtomicU64,
    total: u64,
}

impl ProgressCounter {
    pub fn new(total: u64) -> Self {
        Self {
            completed: AtomicU64::new(0),
            total,
        }
    }

    /// Count one more finished song and return the resulting progress.
    pub fn record(&self) -> ProgressEvent {
        let completed = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
        ProgressEvent {
            completed,
            total: self.total,
            percent: percent(completed, self.total),
        }
    }

    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Rounded percentage; an empty run counts as done.
fn percent(completed: u64, total: u64) -> u64 {
    if total == 0 {
        return 100;
    }
    (completed * 100 + total / 2) / total
}

/// Terminal state of one song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongOutcome {
    Downloaded(PathBuf),
    Unavailable(UnavailableReason),
    Failed(String),
}

/// Statistics of one export run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadSummary {
    pub total: u64,
    pub downloaded: u64,
    pub unavailable: u64,
    pub failed: u64,
}

impl DownloadSummary {
    /// Add one song outcome.
    pub fn record(&mut self, outcome: &SongOutcome) {
        match outcome {
            SongOutcome::Downloaded(_) => self.downloaded += 1,
            SongOutcome::Unavailable(_) => self.unavailable += 1,
            SongOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// Songs that reached a counted outcome.
    pub fn completed(&self) -> u64 {
        self.downloaded + self.unavailable
    }
}
