//! Bounded-concurrency download of a whole collection.

use std::path::PathBuf;

use futures::stream::{self, StreamExt};
use tokio::sync::mpsc::UnboundedSender;

use crate::api::{MusicService, Session, SongRecord};
use crate::config::Config;
use crate::download::progress::{DownloadSummary, ProgressCounter, ProgressEvent, SongOutcome};
use crate::download::song::download_song;
use crate::library::Collection;
use crate::output::{print_error, print_success, print_warning};

/// Settings of one download run.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Root of the exported tree.
    pub root: PathBuf,
    /// Encoding tag used when a song offers it.
    pub preferred_format: String,
    /// Songs processed at the same time.
    pub concurrency: usize,
    /// Print a line per download and the running percentage.
    pub show_downloads: bool,
    /// Print songs skipped as unavailable.
    pub show_skipped: bool,
}

impl DownloadOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            root: config.download_directory().to_path_buf(),
            preferred_format: config.options.preferred_format.tag().to_string(),
            concurrency: config.options.concurrency,
            show_downloads: config.options.show_downloads,
            show_skipped: config.options.show_skipped_downloads,
        }
    }
}

/// Download every song of the collection.
///
/// At most `options.concurrency` songs are in flight; a finished song frees
/// its slot for the next one right away. A failing song is logged and
/// counted, never propagated, so this always runs to completion.
/// Progress events are sent for downloads and unavailable songs only.
pub async fn download_collection<S>(
    service: &S,
    session: &Session,
    collection: &Collection,
    options: &DownloadOptions,
    events: Option<&UnboundedSender<ProgressEvent>>,
) -> DownloadSummary
where
    S: MusicService + ?Sized,
{
    let counter = ProgressCounter::new(collection.len() as u64);

    tracing::info!(
        "Downloading {} songs ({} at a time)",
        counter.total(),
        options.concurrency
    );

    let outcomes: Vec<SongOutcome> = stream::iter(&collection.songs)
        .map(|song| process_song(service, session, song, options, &counter, events))
        .buffer_unordered(options.concurrency.max(1))
        .collect()
        .await;

    let mut summary = DownloadSummary {
        total: counter.total(),
        ..Default::default()
    };
    for outcome in &outcomes {
        summary.record(outcome);
    }

    tracing::info!(
        "Download run finished: {} downloaded, {} unavailable, {} failed",
        summary.downloaded,
        summary.unavailable,
        summary.failed
    );

    summary
}

/// Run one song to its terminal state and report it.
async fn process_song<S>(
    service: &S,
    session: &Session,
    song: &SongRecord,
    options: &DownloadOptions,
    counter: &ProgressCounter,
    events: Option<&UnboundedSender<ProgressEvent>>,
) -> SongOutcome
where
    S: MusicService + ?Sized,
{
    let title = song.display_title();

    let outcome = match download_song(service, session, song, options).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::warn!("Failed to download {}: {}", title, e);
            print_error(&format!("{} failed: {}", title, e));
            return SongOutcome::Failed(e.to_string());
        }
    };

    if let SongOutcome::Unavailable(reason) = &outcome {
        tracing::debug!("{} skipped ({})", title, reason);
        if options.show_skipped {
            print_warning(&format!("{} is not available for download", title));
        }
    }

    let event = counter.record();
    if options.show_downloads {
        print_success(&format!(
            "{} / {} done ({}%).",
            event.completed, event.total, event.percent
        ));
    }
    if let Some(events) = events {
        // A dropped receiver only means nobody is watching.
        let _ = events.send(event);
    }

    outcome
}
