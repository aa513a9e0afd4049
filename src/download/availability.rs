//! Per-song playability and subscription checks.

use std::fmt;

use crate::api::{MusicService, Session, SongRecord};
use crate::error::{Error, Result};

/// Why a song is skipped without being an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The catalogue does not know the song in the user's country.
    NotFound,
    /// The user's subscription does not include the song.
    Subscription,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::NotFound => write!(f, "not found"),
            UnavailableReason::Subscription => write!(f, "subscription"),
        }
    }
}

/// Outcome of the availability check.
#[derive(Debug, Clone)]
pub enum PlayableDecision {
    /// Download this record; for catalogue songs it is the hydrated one.
    Playable(SongRecord),
    Unavailable(UnavailableReason),
}

/// Decide whether a library song can be downloaded.
///
/// Uploaded songs are always playable. Catalogue songs are hydrated for the
/// session's country and must list the session's subscription.
pub async fn resolve_availability<S>(
    service: &S,
    song: &SongRecord,
    session: &Session,
) -> Result<PlayableDecision>
where
    S: MusicService + ?Sized,
{
    if song.is_uploaded() {
        return Ok(PlayableDecision::Playable(song.clone()));
    }

    let id = song.id.as_deref().ok_or(Error::MissingField("bbid"))?;

    let hydrated = service
        .hydrate(session, &[id.to_string()])
        .await
        .map_err(|e| match e {
            Error::Hydration(_) => e,
            other => Error::Hydration(other.to_string()),
        })?
        .into_iter()
        .next();

    let Some(mut hydrated) = hydrated else {
        return Ok(PlayableDecision::Unavailable(UnavailableReason::NotFound));
    };

    if !hydrated
        .stream_subscriptions()
        .iter()
        .any(|tier| tier == &session.subscription)
    {
        return Ok(PlayableDecision::Unavailable(
            UnavailableReason::Subscription,
        ));
    }

    backfill_metadata(&mut hydrated, song);
    Ok(PlayableDecision::Playable(hydrated))
}

/// Copy library metadata the hydrated record lacks.
///
/// Availability always comes from the hydrated record. Its stream is
/// preferred, with the library entry's stream as the fallback, and naming
/// fields fall back to the library entry.
fn backfill_metadata(hydrated: &mut SongRecord, library: &SongRecord) {
    if hydrated.stream.is_none() {
        hydrated.stream = library.stream.clone();
    }
    if hydrated.id.is_none() {
        hydrated.id = library.id.clone();
    }
    if hydrated.title.is_none() {
        hydrated.title = library.title.clone();
    }
    if hydrated.display_artist.is_none() {
        hydrated.display_artist = library.display_artist.clone();
    }
    if hydrated.album.is_none() {
        hydrated.album = library.album.clone();
    }
    if hydrated.number.is_none() {
        hydrated.number = library.number;
    }
}
