//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{AudioFormat, Config};

/// Baboom library exporter CLI.
#[derive(Parser, Debug)]
#[command(
    name = "baboom-exporter",
    version,
    about = "Export your Baboom song library to disk",
    long_about = "Logs in to Baboom, saves the metadata of every song in your library \
                  and downloads each song your subscription allows into \
                  <directory>/<album artist>/<album>/."
)]
pub struct Args {
    /// Account email.
    #[arg(short, long, env = "BABOOM_EMAIL")]
    pub email: Option<String>,

    /// Account password. Prompted for when omitted.
    #[arg(long, env = "BABOOM_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Root directory for the exported songs.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Preferred encoding (flac, mp3_320k, mp3_192k, ogg_vorbis_q9, ogg_vorbis_q5, ogg_vorbis_q2).
    #[arg(short, long)]
    pub format: Option<AudioFormat>,

    /// Number of songs downloaded at the same time.
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,

    /// Songs requested per library page.
    #[arg(long)]
    pub page_size: Option<u64>,

    /// Service base URL.
    #[arg(long = "api-url", env = "BABOOM_API_URL")]
    pub base_url: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide per-song progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Show songs skipped as unavailable even in quiet mode.
    #[arg(long)]
    pub show_skipped: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    ///
    /// The password is not part of the config and is left on `self`.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(email) = &self.email {
            config.account.email = Some(email.clone());
        }

        if let Some(dir) = &self.download_directory {
            config.options.download_directory = dir.clone();
        }

        if let Some(format) = self.format {
            config.options.preferred_format = format;
        }

        if let Some(concurrency) = self.concurrency {
            config.options.concurrency = concurrency;
        }

        if let Some(page_size) = self.page_size {
            config.options.page_size = page_size;
        }

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }

        // Boolean flags (only override if set to non-default)
        if self.quiet {
            config.options.show_downloads = false;
            config.options.show_skipped_downloads = false;
        }

        if self.show_skipped {
            config.options.show_skipped_downloads = true;
        }
    }
}
