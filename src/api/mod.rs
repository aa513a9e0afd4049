//! Baboom API module.
//!
//! This module provides:
//! - HTTP client for the Baboom REST API
//! - Password hashing and the run's session
//! - The service trait used by the aggregator and downloader
//! - API response types

pub mod auth;
pub mod client;
pub mod service;
pub mod types;

pub use auth::{hash_password, Credentials, Session};
pub use client::{BaboomApi, DEFAULT_API_BASE};
pub use service::{ByteStream, MusicService};
pub use types::*;
