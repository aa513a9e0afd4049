//! Error types for the baboom-exporter application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Failed to fetch song collection: {0}")]
    CollectionFetch(String),

    #[error("Catalogue hydration failed: {0}")]
    Hydration(String),

    // Download errors
    #[error("Stream failed: {0}")]
    Stream(String),

    #[error("Song metadata is missing '{0}'")]
    MissingField(&'static str),

    #[error("{0} song(s) failed to download")]
    SongsFailed(u64),

    // File system errors
    #[error("Invalid path component: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                exit_codes::CONFIG_ERROR
            }
            Error::Authentication(_)
            | Error::Api(_)
            | Error::CollectionFetch(_)
            | Error::Hydration(_) => exit_codes::API_ERROR,
            Error::Stream(_) | Error::Io(_) | Error::SongsFailed(_) => exit_codes::DOWNLOAD_ERROR,
            _ => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_songs_message_is_neutral() {
        let err = Error::SongsFailed(3);
        assert_eq!(err.to_string(), "3 song(s) failed to download");
        assert_eq!(err.exit_code(), exit_codes::DOWNLOAD_ERROR);
    }

    #[test]
    fn test_exit_codes_by_family() {
        assert_eq!(
            Error::MissingConfig("email".into()).exit_code(),
            exit_codes::CONFIG_ERROR
        );
        assert_eq!(
            Error::Authentication("denied".into()).exit_code(),
            exit_codes::API_ERROR
        );
        assert_eq!(
            Error::CollectionFetch("short".into()).exit_code(),
            exit_codes::API_ERROR
        );
        assert_eq!(
            Error::InvalidFilename("..".into()).exit_code(),
            exit_codes::UNEXPECTED_ERROR
        );
    }
}
