//! Single song download pipeline.

use std::path::Path;

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::{ByteStream, MusicService, Session, SongRecord};
use crate::download::availability::{resolve_availability, PlayableDecision};
use crate::download::orchestrator::DownloadOptions;
use crate::download::progress::SongOutcome;
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, resolve_target};
use crate::output::print_info;

/// Take one library song through availability, naming and streaming.
///
/// Returns `Unavailable` for songs the user may not download; every other
/// problem is an error for the caller to isolate.
pub async fn download_song<S>(
    service: &S,
    session: &Session,
    song: &SongRecord,
    options: &DownloadOptions,
) -> Result<SongOutcome>
where
    S: MusicService + ?Sized,
{
    let playable = match resolve_availability(service, song, session).await? {
        PlayableDecision::Playable(playable) => playable,
        PlayableDecision::Unavailable(reason) => return Ok(SongOutcome::Unavailable(reason)),
    };

    let target = resolve_target(&playable, &options.preferred_format, &options.root)?;
    let url = playable
        .stream
        .as_ref()
        .map(|s| s.audio.url.as_str())
        .ok_or(Error::MissingField("stream.audio.url"))?;

    ensure_dir(target.folder()).await?;

    if options.show_downloads {
        print_info(&format!("Downloading {}", target.path.display()));
    }

    let stream = service.open_stream(session, url, &target.encoding).await?;

    match write_stream(stream, &target.path).await {
        Ok(bytes) => {
            tracing::debug!("Wrote {} bytes to {}", bytes, target.path.display());
            Ok(SongOutcome::Downloaded(target.path))
        }
        Err(e) => {
            if let Err(remove_err) = tokio::fs::remove_file(&target.path).await {
                tracing::debug!(
                    "Could not remove partial file {}: {}",
                    target.path.display(),
                    remove_err
                );
            }
            Err(e)
        }
    }
}

/// Stream bytes into a new file at `path`.
async fn write_stream(mut stream: ByteStream, path: &Path) -> Result<u64> {
    let mut file = File::create(path).await?;
    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;

    Ok(written)
}
