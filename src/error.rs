//! Error types for the xkcd client.
//!
//! Uses `thiserror` for structured error definitions that say which step
//! of a fetch or an image save went wrong.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for client operations.
#[derive(Error, Debug)]
pub enum ComicError {
    /// HTTP request failed (connection, timeout, DNS or body read)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body is not a valid comic JSON document
    #[error("Failed to decode comic JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Image URL cannot be turned into a file name
    #[error("Invalid image URL: {0}")]
    InvalidImageUrl(String),

    /// Target directory could not be made absolute
    #[error("Failed to resolve directory '{}': {source}", .path.display())]
    ResolveDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Image file could not be created
    #[error("Failed to create file '{}': {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing the image body to disk failed
    #[error("Failed to write file '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Client configuration was rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error type for configuration validation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid config value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias using anyhow for application-level error handling.
pub type Result<T> = anyhow::Result<T>;
