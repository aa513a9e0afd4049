//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Largest page the library endpoint is asked for.
const MAX_PAGE_SIZE: u64 = 1000;

/// Upper bound on parallel song downloads.
const MAX_CONCURRENCY: usize = 64;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_page_size(config.options.page_size)?;
    validate_concurrency(config.options.concurrency)?;
    validate_base_url(&config.api.base_url)?;

    if config.download_directory().as_os_str().is_empty() {
        return Err(Error::MissingConfig("download_directory".to_string()));
    }

    if let Some(email) = &config.account.email {
        validate_email(email)?;
    }

    Ok(())
}

/// Validate the library page size.
pub fn validate_page_size(page_size: u64) -> Result<()> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(Error::ConfigValidation {
            field: "page_size".to_string(),
            message: format!(
                "Page size must be between 1 and {} (got {})",
                MAX_PAGE_SIZE, page_size
            ),
        });
    }

    Ok(())
}

/// Validate the download concurrency.
pub fn validate_concurrency(concurrency: usize) -> Result<()> {
    if concurrency == 0 || concurrency > MAX_CONCURRENCY {
        return Err(Error::ConfigValidation {
            field: "concurrency".to_string(),
            message: format!(
                "Concurrency must be between 1 and {} (got {})",
                MAX_CONCURRENCY, concurrency
            ),
        });
    }

    Ok(())
}

/// Validate the service base URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url).map_err(|e| Error::ConfigValidation {
        field: "base_url".to_string(),
        message: format!("'{}' is not a valid URL: {}", base_url, e),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}

/// Validate a login email.
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(Error::MissingConfig("email".to_string()));
    }

    let email_pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    if !email_pattern.is_match(email) {
        return Err(Error::ConfigValidation {
            field: "email".to_string(),
            message: format!("'{}' is not a valid email address", email),
        });
    }

    Ok(())
}
