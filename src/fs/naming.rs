//! Destination path and encoding resolution for songs.

use std::path::{Path, PathBuf};

use crate::api::SongRecord;
use crate::error::{Error, Result};

/// Album artist used when a song has no album.
pub const UNKNOWN_ARTIST: &str = "Unknown";

/// Album title used when a song has no album.
pub const UNTITLED_ALBUM: &str = "Untitled";

/// Where and how a song is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    /// Full path of the audio file.
    pub path: PathBuf,
    /// Encoding tag requested from the stream endpoint.
    pub encoding: String,
}

impl DownloadTarget {
    /// Album folder containing the file.
    pub fn folder(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Map a song to its destination below `root`.
///
/// Layout is `<root>/<album artist>/<album title>/<n> - <artist> - <title>.<ext>`.
/// Does not touch the network or the disk.
pub fn resolve_target(song: &SongRecord, preferred: &str, root: &Path) -> Result<DownloadTarget> {
    let song_artist = song
        .display_artist
        .as_deref()
        .ok_or(Error::MissingField("display_artist"))?;
    let song_title = song.title.as_deref().ok_or(Error::MissingField("title"))?;
    let number = song.number.ok_or(Error::MissingField("number"))?;

    let (album_artist, album_title) = match &song.album {
        Some(album) => (
            album.display_artist.as_deref().unwrap_or(song_artist),
            album.title.as_deref().unwrap_or(UNTITLED_ALBUM),
        ),
        None => (UNKNOWN_ARTIST, UNTITLED_ALBUM),
    };

    let encoding =
        choose_encoding(song.stream_tags(), preferred).ok_or(Error::MissingField("stream.tags"))?;

    let folder = root
        .join(folder_component(album_artist)?)
        .join(folder_component(album_title)?);

    let file_name = format!(
        "{} - {} - {}.{}",
        number,
        replace_separators(song_artist),
        replace_separators(song_title),
        file_extension(encoding)
    );

    Ok(DownloadTarget {
        path: folder.join(file_name),
        encoding: encoding.to_string(),
    })
}

/// Pick the preferred encoding when offered, else the first offered one.
pub fn choose_encoding<'a>(tags: &'a [String], preferred: &str) -> Option<&'a str> {
    tags.iter()
        .find(|tag| tag.as_str() == preferred)
        .or_else(|| tags.first())
        .map(String::as_str)
}

/// File extension of an encoding tag (`mp3_320k` -> `mp3`).
pub fn file_extension(encoding: &str) -> &str {
    encoding.split('_').next().unwrap_or(encoding)
}

/// Replace directory separators so a name stays a single path component.
pub fn replace_separators(name: &str) -> String {
    name.replace('/', "-")
}

/// Turn a metadata value into a folder name.
///
/// Rejects values that would collapse into or climb out of the parent folder.
fn folder_component(name: &str) -> Result<String> {
    let component = replace_separators(name);

    match component.trim() {
        "" => Err(Error::InvalidFilename(
            "Folder name cannot be empty or whitespace-only".to_string(),
        )),
        "." | ".." => Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        ))),
        _ => Ok(component),
    }
}
