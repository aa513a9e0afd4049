//! Full library enumeration over the paged listing endpoint.

use std::collections::HashSet;

use futures::future::try_join_all;

use crate::api::{MusicService, Session, SongRecord};
use crate::error::{Error, Result};

/// Every song of the user's library.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub songs: Vec<SongRecord>,
    /// Song count declared by the server.
    pub total: u64,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

/// Offsets of the pages that follow the first one.
pub fn remaining_offsets(total: u64, page_size: u64) -> Vec<u64> {
    if page_size == 0 {
        return Vec::new();
    }

    (1..total.div_ceil(page_size))
        .map(|page| page * page_size)
        .collect()
}

/// Fetch the whole library.
///
/// The first page tells how many songs exist; all remaining pages are then
/// requested at once. Any failed page, or a result that does not add up to
/// the declared total, fails the whole fetch.
pub async fn fetch_collection<S>(service: &S, session: &Session, page_size: u64) -> Result<Collection>
where
    S: MusicService + ?Sized,
{
    if page_size == 0 {
        return Err(Error::ConfigValidation {
            field: "page_size".to_string(),
            message: "Page size must be positive".to_string(),
        });
    }

    let first = fetch_page(service, session, 0, page_size).await?;
    let total = first.meta.total;

    let offsets = remaining_offsets(total, page_size);
    tracing::debug!(
        "Library has {} songs, fetching {} more page(s)",
        total,
        offsets.len()
    );

    let pages = try_join_all(
        offsets
            .iter()
            .map(|&offset| fetch_page(service, session, offset, page_size)),
    )
    .await?;

    let mut songs = first.items;
    for page in pages {
        songs.extend(page.items);
    }

    if songs.len() as u64 != total {
        return Err(Error::CollectionFetch(format!(
            "server declared {} songs but {} were listed",
            total,
            songs.len()
        )));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = songs
        .iter()
        .filter_map(|s| s.id.as_deref())
        .find(|id| !seen.insert(*id))
    {
        return Err(Error::CollectionFetch(format!(
            "song {} was listed twice; the library changed while it was being read",
            dup
        )));
    }

    tracing::info!("{} songs found", songs.len());

    Ok(Collection { songs, total })
}

async fn fetch_page<S>(
    service: &S,
    session: &Session,
    offset: u64,
    limit: u64,
) -> Result<crate::api::SongsPage>
where
    S: MusicService + ?Sized,
{
    service
        .list_songs(session, offset, limit)
        .await
        .map_err(|e| Error::CollectionFetch(format!("page at offset {}: {}", offset, e)))
}
