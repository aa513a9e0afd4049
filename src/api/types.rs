//! API response type definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generic API response wrapper.
///
/// `data` is kept as raw JSON until `ok` has been checked, since failed
/// responses do not carry the success payload shape.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    pub ok: bool,
    #[serde(default)]
    pub data: Value,
}

/// Login request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub remember_me: bool,
}

/// Payload of a successful login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub user: User,
}

/// Authenticated user as returned by the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub access_token: String,
    pub country: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contexts: UserContexts,
}

/// User contexts; the first entry of `all` carries the subscription.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserContexts {
    #[serde(default)]
    pub all: Vec<UserContext>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserContext {
    pub subject: ContextSubject,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContextSubject {
    pub subscription: String,
}

/// One page of the library listing.
#[derive(Debug, Clone, Deserialize)]
pub struct SongsPage {
    #[serde(default)]
    pub items: Vec<SongRecord>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub total: u64,
}

/// A song from the user's library or from the catalogue.
///
/// Most fields are optional so one malformed record never fails a whole
/// page; missing values are reported per song when the record is used.
/// Fields the exporter does not read are kept in `extra` so the metadata
/// snapshot stays complete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongRecord {
    #[serde(rename = "bbid", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<Album>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<StreamDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_details: Option<AvailabilityDetails>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SongRecord {
    /// Title used in console output, falling back to the id.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("<untitled>")
    }

    /// Whether the user uploaded this song directly.
    pub fn is_uploaded(&self) -> bool {
        matches!(
            self.origin,
            Some(Origin {
                kind: OriginKind::Uploaded
            })
        )
    }

    /// Encoding tags offered by the stream, in server order.
    pub fn stream_tags(&self) -> &[String] {
        self.stream
            .as_ref()
            .map(|s| s.audio.tags.as_slice())
            .unwrap_or(&[])
    }

    /// Subscription tiers allowed to stream this song.
    pub fn stream_subscriptions(&self) -> &[String] {
        self.availability_details
            .as_ref()
            .map(|a| a.stream.as_slice())
            .unwrap_or(&[])
    }
}

/// Album information attached to a song.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Album {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Where a library song comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    #[serde(rename = "type")]
    pub kind: OriginKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginKind {
    Uploaded,
    Catalogue,
    #[serde(other)]
    Unknown,
}

/// Stream descriptor of a playable song.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamDescriptor {
    pub audio: AudioStream,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioStream {
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Availability by subscription for catalogue songs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityDetails {
    #[serde(default)]
    pub stream: Vec<String>,
}
