//! Baboom Exporter - export a Baboom song library to local files
//!
//! This library logs in to Baboom, lists the account's song library and
//! downloads every song the subscription allows to stream.
//!
//! # Features
//!
//! - Concurrent paginated library listing
//! - JSON metadata snapshot of the whole library
//! - Catalogue availability checks against the account subscription
//! - Bounded-concurrency streaming downloads with progress events
//! - Preferred encoding selection (FLAC, MP3, Ogg Vorbis)
//!
//! # Example
//!
//! ```no_run
//! use baboom_exporter::{api::Credentials, download::DownloadOptions, BaboomApi, Config};
//! use baboom_exporter::{download_collection, fetch_collection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = BaboomApi::new(&config.api.base_url, &config.api.user_agent)?;
//!     let session = api.login(&Credentials::new("me@example.com", "secret")).await?;
//!
//!     let collection = fetch_collection(&api, &session, config.options.page_size).await?;
//!     let options = DownloadOptions::from_config(&config);
//!     let summary = download_collection(&api, &session, &collection, &options, None).await;
//!     println!("{} songs downloaded", summary.downloaded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod library;
pub mod output;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use api::BaboomApi;
pub use config::Config;
pub use download::{download_collection, DownloadSummary};
pub use error::{Error, Result};
pub use library::{fetch_collection, write_snapshot, Collection};
