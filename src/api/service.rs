//! Service abstraction consumed by the library aggregator and the downloader.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::api::auth::Session;
use crate::api::types::{SongRecord, SongsPage};
use crate::error::Result;

/// Raw audio bytes of one song.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

/// Authenticated operations of the streaming service.
#[async_trait]
pub trait MusicService: Send + Sync {
    /// Fetch one page of the user's library.
    async fn list_songs(&self, session: &Session, offset: u64, limit: u64) -> Result<SongsPage>;

    /// Resolve catalogue song ids to playable records for the session's country.
    async fn hydrate(&self, session: &Session, ids: &[String]) -> Result<Vec<SongRecord>>;

    /// Open the audio stream of a song at the given encoding.
    async fn open_stream(&self, session: &Session, url: &str, encoding: &str)
        -> Result<ByteStream>;
}
