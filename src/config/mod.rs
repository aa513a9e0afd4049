//! Configuration module for the baboom-exporter.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Audio format selection
//! - Configuration validation

pub mod formats;
pub mod loader;
pub mod validation;

pub use formats::AudioFormat;
pub use loader::{AccountConfig, ApiConfig, Config, OptionsConfig};
pub use validation::validate_config;
