//! Client configuration.
//!
//! Everything the client can be tuned with lives in [`ClientConfig`]. It is
//! built once, validated when the client is constructed and never mutated
//! afterwards. There is no config file and no environment lookup.

use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

/// Root address of the public xkcd archive.
pub const DEFAULT_BASE_URL: &str = "https://xkcd.com";

/// Default time to wait for a request before giving up.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Archive root, without the trailing slash.
    pub base_url: String,

    /// Timeout for the metadata request.
    pub timeout: Duration,

    /// Timeout for the image download.
    pub image_timeout: Duration,

    /// Directory `fetch` saves images into.
    pub image_dir: PathBuf,

    /// Trace requests and saved files on the console.
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            image_timeout: DEFAULT_TIMEOUT,
            image_dir: PathBuf::from("."),
            debug: false,
        }
    }
}

impl ClientConfig {
    /// Sets the archive root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the metadata request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the image download timeout.
    pub fn with_image_timeout(mut self, timeout: Duration) -> Self {
        self.image_timeout = timeout;
        self
    }

    /// Sets the directory images are saved into by `fetch`.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = dir.into();
        self
    }

    /// Enables or disables the request trace.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validates the configuration and normalizes the base URL.
    ///
    /// A single trailing `/` is stripped so URL building never produces
    /// `//info.0.json`.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.base_url.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
            key: "base_url".to_string(),
            message: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                key: "base_url".to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        self.base_url = trimmed.to_string();

        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "timeout".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.image_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "image_timeout".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(self)
    }
}
