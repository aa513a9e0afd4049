//! Baboom Exporter - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::{fmt, EnvFilter};

use baboom_exporter::{
    api::BaboomApi,
    cli::{prompt_credentials, Args},
    config::{validate_config, Config},
    download::{download_collection, DownloadOptions, ProgressEvent},
    error::{exit_codes, Error, Result},
    library::{fetch_collection, write_snapshot},
    output::{
        create_spinner, print_banner, print_config_summary, print_download_summary, print_error,
        print_info, print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_info(&format!(
            "No configuration file at {}, using defaults",
            config_path.display()
        ));
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;

    let credentials = prompt_credentials(config.account.email.clone(), args.password.clone())?;

    print_config_summary(
        &credentials.email,
        config.download_directory(),
        config.options.preferred_format.tag(),
        config.options.concurrency,
    );

    let api = BaboomApi::new(&config.api.base_url, &config.api.user_agent)?;

    let spinner = create_spinner("Logging in...");
    let session = api.login(&credentials).await;
    spinner.finish_and_clear();
    let session = session?;
    print_success(&format!("Logged in as {}", credentials.email));

    let spinner = create_spinner("Listing library...");
    let collection = fetch_collection(&api, &session, config.options.page_size).await;
    spinner.finish_and_clear();
    let collection = collection?;
    print_info(&format!("Found {} songs in the library", collection.len()));

    let snapshot = write_snapshot(config.download_directory(), &collection).await?;
    print_info(&format!("Saved song metadata to {}", snapshot.display()));

    if collection.is_empty() {
        print_warning("Library is empty, nothing to download");
        return Ok(());
    }

    let options = DownloadOptions::from_config(&config);

    let (tx, mut rx) = mpsc::unbounded_channel::<ProgressEvent>();
    let progress_log = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            tracing::debug!(
                completed = event.completed,
                total = event.total,
                percent = event.percent,
                "progress"
            );
        }
    });

    let summary = download_collection(&api, &session, &collection, &options, Some(&tx)).await;
    drop(tx);
    let _ = progress_log.await;

    print_download_summary(&summary);

    if summary.failed > 0 {
        return Err(Error::SongsFailed(summary.failed));
    }

    Ok(())
}
