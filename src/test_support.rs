//! In-memory service used by unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;

use crate::api::{
    Album, AudioStream, AvailabilityDetails, ByteStream, MusicService, Origin, OriginKind,
    PageMeta, Session, SongRecord, SongsPage, StreamDescriptor,
};
use crate::error::{Error, Result};

pub fn session() -> Session {
    Session {
        access_token: "tok".into(),
        subscription: "premium".into(),
        country: "PT".into(),
    }
}

pub fn stream_url(id: &str) -> String {
    format!("https://cdn.test/{}", id)
}

/// An uploaded song with a complete stream descriptor.
pub fn uploaded_song(id: &str, number: u32) -> SongRecord {
    SongRecord {
        id: Some(id.into()),
        title: Some(format!("Title {}", id)),
        display_artist: Some("Artist".into()),
        number: Some(number),
        album: Some(Album {
            display_artist: Some("Band".into()),
            title: Some("Record".into()),
            ..Default::default()
        }),
        origin: Some(Origin {
            kind: OriginKind::Uploaded,
        }),
        stream: Some(StreamDescriptor {
            audio: AudioStream {
                url: stream_url(id),
                tags: vec!["flac".into(), "mp3_320k".into()],
            },
        }),
        ..Default::default()
    }
}

/// A library reference to a catalogue song.
pub fn catalogue_song(id: &str, number: u32) -> SongRecord {
    SongRecord {
        origin: Some(Origin {
            kind: OriginKind::Catalogue,
        }),
        ..uploaded_song(id, number)
    }
}

/// The hydrated form of a catalogue song, streamable by `subscriptions`.
pub fn hydrated_song(id: &str, subscriptions: &[&str]) -> SongRecord {
    SongRecord {
        id: Some(id.into()),
        title: Some(format!("Title {}", id)),
        stream: Some(StreamDescriptor {
            audio: AudioStream {
                url: stream_url(&format!("{}-hydrated", id)),
                tags: vec!["mp3_320k".into()],
            },
        }),
        availability_details: Some(AvailabilityDetails {
            stream: subscriptions.iter().map(|s| s.to_string()).collect(),
        }),
        ..Default::default()
    }
}

/// Decrements the in-flight stream count when the stream is dropped.
struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct FakeService {
    pub library: Vec<SongRecord>,
    pub declared_total: Option<u64>,
    pub failing_offsets: HashSet<u64>,
    pub catalogue: HashMap<String, SongRecord>,
    pub hydration_fails: bool,
    pub failing_streams: HashSet<String>,
    pub stream_delays: HashMap<String, Duration>,
    pub requested_offsets: Mutex<Vec<u64>>,
    pub hydrated_ids: Mutex<Vec<String>>,
    pub opened_streams: Mutex<Vec<(String, String)>>,
    pub in_flight: Arc<AtomicUsize>,
    pub max_in_flight: Arc<AtomicUsize>,
}

impl FakeService {
    pub fn with_library(library: Vec<SongRecord>) -> Self {
        Self {
            library,
            ..Default::default()
        }
    }

    pub fn offsets(&self) -> Vec<u64> {
        let mut offsets = self.requested_offsets.lock().unwrap().clone();
        offsets.sort_unstable();
        offsets
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MusicService for FakeService {
    async fn list_songs(&self, _session: &Session, offset: u64, limit: u64) -> Result<SongsPage> {
        self.requested_offsets.lock().unwrap().push(offset);

        if self.failing_offsets.contains(&offset) {
            return Err(Error::Api(format!("page {} unavailable", offset)));
        }

        let start = (offset as usize).min(self.library.len());
        let end = (start + limit as usize).min(self.library.len());

        Ok(SongsPage {
            items: self.library[start..end].to_vec(),
            meta: PageMeta {
                total: self
                    .declared_total
                    .unwrap_or(self.library.len() as u64),
            },
        })
    }

    async fn hydrate(&self, _session: &Session, ids: &[String]) -> Result<Vec<SongRecord>> {
        self.hydrated_ids.lock().unwrap().extend(ids.iter().cloned());

        if self.hydration_fails {
            return Err(Error::Hydration("catalogue offline".into()));
        }

        Ok(ids
            .iter()
            .filter_map(|id| self.catalogue.get(id).cloned())
            .collect())
    }

    async fn open_stream(
        &self,
        _session: &Session,
        url: &str,
        encoding: &str,
    ) -> Result<ByteStream> {
        self.opened_streams
            .lock()
            .unwrap()
            .push((url.to_string(), encoding.to_string()));

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        let guard = InFlightGuard(self.in_flight.clone());

        let delay = self.stream_delays.get(url).copied().unwrap_or_default();
        let chunks: Vec<Result<Bytes>> = if self.failing_streams.contains(url) {
            vec![
                Ok(Bytes::from_static(b"partial")),
                Err(Error::Stream("connection reset".into())),
            ]
        } else {
            vec![
                Ok(Bytes::from(format!("audio:{}", url))),
                Ok(Bytes::from_static(b":end")),
            ]
        };

        let stream = stream::unfold(
            (chunks.into_iter(), guard, delay),
            |(mut chunks, guard, delay)| async move {
                tokio::time::sleep(delay).await;
                chunks.next().map(|chunk| (chunk, (chunks, guard, delay)))
            },
        );

        Ok(Box::pin(stream))
    }
}
