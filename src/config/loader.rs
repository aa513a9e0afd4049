//! Configuration structures and loading logic.

use crate::api::DEFAULT_API_BASE;
use crate::config::formats::AudioFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

/// Account configuration.
///
/// The password is never read from the config file; it comes from the
/// command line, the environment or an interactive prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Login email.
    #[serde(default)]
    pub email: Option<String>,
}

/// Export options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Root directory of the exported tree and the metadata snapshot.
    #[serde(default = "default_download_directory")]
    pub download_directory: PathBuf,

    /// Songs requested per library page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Songs downloaded at the same time.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Encoding used when the song offers it.
    #[serde(default)]
    pub preferred_format: AudioFormat,

    /// Whether to print a line for every download.
    #[serde(default = "default_true")]
    pub show_downloads: bool,

    /// Whether to print songs skipped as unavailable.
    #[serde(default = "default_true")]
    pub show_skipped_downloads: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: default_download_directory(),
            page_size: default_page_size(),
            concurrency: default_concurrency(),
            preferred_format: AudioFormat::default(),
            show_downloads: true,
            show_skipped_downloads: true,
        }
    }
}

/// Remote service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Service base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP user agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_download_directory() -> PathBuf {
    PathBuf::from("songs")
}

fn default_page_size() -> u64 {
    100
}

fn default_concurrency() -> usize {
    5
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_user_agent() -> String {
    concat!("baboom-exporter/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> &Path {
        &self.options.download_directory
    }
}
