//! grab-xkcd - client for the xkcd JSON archive.
//!
//! This library provides functionality for:
//! - Fetching comic metadata by number or as "latest"
//! - Mapping the archive's JSON into a normalized [`Comic`]
//! - Saving comic images to local directories

pub mod client;
pub mod config;
pub mod console;
pub mod error;
pub mod model;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use client::{FetchReport, XkcdClient};
pub use config::ClientConfig;
pub use console::Console;
pub use error::{ComicError, ConfigError};
pub use model::{Comic, ComicId, ComicResponse};
