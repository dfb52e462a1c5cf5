//! HTTP client for the xkcd JSON archive.
//!
//! One metadata request per fetch, plus an optional image download that
//! never fails the fetch it belongs to.

use crate::config::ClientConfig;
use crate::console::Console;
use crate::error::ComicError;
use crate::model::{Comic, ComicId, ComicResponse};
use crate::utils::file_name_from_url;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Name of the metadata document under every comic path.
const INFO_DOCUMENT: &str = "info.0.json";

/// Result of a fetch, with image-save failures kept separate.
#[derive(Debug)]
pub struct FetchReport {
    /// The fetched comic.
    pub comic: Comic,

    /// Non-fatal failures, currently only from saving the image.
    pub warnings: Vec<ComicError>,
}

/// Client for the xkcd archive.
#[derive(Debug, Clone)]
pub struct XkcdClient {
    client: reqwest::Client,
    config: ClientConfig,
    console: Console,
}

impl XkcdClient {
    /// Creates a client with the default configuration.
    pub fn new() -> Result<Self, ComicError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client with the given configuration.
    ///
    /// The configuration is validated first; an invalid one is rejected
    /// with `ComicError::Config`.
    pub fn with_config(config: ClientConfig) -> Result<Self, ComicError> {
        let config = config.validate()?;
        let client = create_http_client()?;

        Ok(Self {
            client,
            config,
            console: Console::new(),
        })
    }

    /// Returns the validated configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the metadata URL for a comic.
    pub fn build_url(&self, id: ComicId) -> String {
        match id {
            ComicId::Latest => format!("{}/{}", self.config.base_url, INFO_DOCUMENT),
            ComicId::Number(n) => format!("{}/{}/{}", self.config.base_url, n, INFO_DOCUMENT),
        }
    }

    /// Fetches a comic, optionally saving its image into `image_dir`.
    ///
    /// A failed image save is printed as a warning and does not turn the
    /// call into an error. Use [`XkcdClient::fetch_report`] to receive
    /// those failures instead.
    pub async fn fetch(&self, id: ComicId, save_to_disk: bool) -> Result<Comic, ComicError> {
        let report = self.fetch_report(id, save_to_disk).await?;

        for warning in &report.warnings {
            self.console.warning(&format!(
                "Failed to save image for comic {}: {}",
                report.comic.number, warning
            ));
        }

        Ok(report.comic)
    }

    /// Fetches a comic and returns image-save failures alongside it.
    ///
    /// Only the metadata request and its decoding can make this fail.
    pub async fn fetch_report(
        &self,
        id: ComicId,
        save_to_disk: bool,
    ) -> Result<FetchReport, ComicError> {
        let url = self.build_url(id);
        if self.config.debug {
            self.console.debug(&format!("GET {}", url));
        }

        let response = self
            .client
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await?;
        let body = response.bytes().await?;
        let raw: ComicResponse = serde_json::from_slice(&body)?;

        let mut warnings = Vec::new();
        if save_to_disk {
            if let Err(e) = self.save_to_disk(&raw.img, &self.config.image_dir).await {
                warnings.push(e);
            }
        }

        Ok(FetchReport {
            comic: raw.into_comic(),
            warnings,
        })
    }

    /// Fetches the latest comic without saving its image.
    pub async fn fetch_latest(&self) -> Result<Comic, ComicError> {
        self.fetch(ComicId::Latest, false).await
    }

    /// Fetches a numbered comic without saving its image.
    pub async fn fetch_number(&self, number: i64) -> Result<Comic, ComicError> {
        self.fetch(ComicId::Number(number), false).await
    }

    /// Downloads `url` into `dir`, named after the URL's last path segment.
    ///
    /// The body is written as received, whatever the HTTP status. An empty
    /// `dir` means the working directory. The directory must already exist.
    /// An existing file is truncated. A failed write leaves the partial file
    /// in place.
    ///
    /// # Returns
    /// The absolute path of the written file.
    pub async fn save_to_disk(
        &self,
        url: &str,
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf, ComicError> {
        let path = resolve_dir(dir.as_ref())?.join(file_name_from_url(url)?);

        if self.config.debug {
            self.console.debug(&format!("GET {}", url));
        }
        let response = self
            .client
            .get(url)
            .timeout(self.config.image_timeout)
            .send()
            .await?;

        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|source| ComicError::CreateFile {
                path: path.clone(),
                source,
            })?;

        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await.map_err(|source| ComicError::Write {
                path: path.clone(),
                source,
            })?;
        }
        file.flush().await.map_err(|source| ComicError::Write {
            path: path.clone(),
            source,
        })?;

        if self.config.debug {
            self.console.debug(&format!("Saved {}", path.display()));
        }
        Ok(path)
    }
}

/// Makes `dir` absolute against the working directory. Empty means `.`.
fn resolve_dir(dir: &Path) -> Result<PathBuf, ComicError> {
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    std::path::absolute(dir).map_err(|source| ComicError::ResolveDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// HTTP client shared by all requests. Timeouts are set per request.
pub fn create_http_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
}
