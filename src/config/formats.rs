//! Audio encoding definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Encodings the service offers for a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AudioFormat {
    #[serde(rename = "flac")]
    Flac,
    /// MP3 at 320 kbit/s (default).
    #[default]
    #[serde(rename = "mp3_320k")]
    Mp3320k,
    #[serde(rename = "mp3_192k")]
    Mp3192k,
    #[serde(rename = "ogg_vorbis_q9")]
    OggVorbisQ9,
    #[serde(rename = "ogg_vorbis_q5")]
    OggVorbisQ5,
    #[serde(rename = "ogg_vorbis_q2")]
    OggVorbisQ2,
}

impl AudioFormat {
    pub const ALL: [AudioFormat; 6] = [
        AudioFormat::Flac,
        AudioFormat::Mp3320k,
        AudioFormat::Mp3192k,
        AudioFormat::OggVorbisQ9,
        AudioFormat::OggVorbisQ5,
        AudioFormat::OggVorbisQ2,
    ];

    /// Encoding tag as used by the stream endpoint.
    pub fn tag(&self) -> &'static str {
        match self {
            AudioFormat::Flac => "flac",
            AudioFormat::Mp3320k => "mp3_320k",
            AudioFormat::Mp3192k => "mp3_192k",
            AudioFormat::OggVorbisQ9 => "ogg_vorbis_q9",
            AudioFormat::OggVorbisQ5 => "ogg_vorbis_q5",
            AudioFormat::OggVorbisQ2 => "ogg_vorbis_q2",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for AudioFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AudioFormat::ALL
            .into_iter()
            .find(|format| format.tag() == wanted)
            .ok_or_else(|| format!("Unknown audio format: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_roundtrips_tags() {
        for format in AudioFormat::ALL {
            assert_eq!(format.to_string().parse::<AudioFormat>(), Ok(format));
        }
        assert_eq!("MP3_192K".parse::<AudioFormat>(), Ok(AudioFormat::Mp3192k));
    }

    #[test]
    fn test_from_str_unknown() {
        assert!("wav".parse::<AudioFormat>().is_err());
    }

    #[test]
    fn test_serde_uses_tag_spelling() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: AudioFormat,
        }

        let parsed: Wrapper = toml::from_str(r#"format = "ogg_vorbis_q5""#).unwrap();
        assert_eq!(parsed.format, AudioFormat::OggVorbisQ5);
    }
}
