//! Transports for resource-mode captions.
//!
//! A caption named `N` lives at `<base>/<N>.<ext>`. The base is either an
//! HTTP(S) prefix or a local directory.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::CaptionFetchError;

pub const DEFAULT_CAPTION_BASE: &str = "./static/videos/dataset";
pub const DEFAULT_CAPTION_EXTENSION: &str = "txt";

#[async_trait]
pub trait CaptionFetcher: Send + Sync + fmt::Debug {
    /// Load the raw caption body for `name`.
    async fn fetch(&self, name: &str) -> Result<String, CaptionFetchError>;
}

/// Fetches captions over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCaptionFetcher {
    client: Client,
    base_url: String,
    extension: String,
}

impl HttpCaptionFetcher {
    pub fn new(
        base_url: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self::with_client(Client::new(), base_url, extension)
    }

    /// Build with a request timeout. Falls back to a default client when
    /// the builder fails.
    pub fn with_timeout(
        base_url: impl Into<String>,
        extension: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                log::warn!("Falling back to default caption client: {}", err);
                Client::new()
            });
        Self::with_client(client, base_url, extension)
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            extension: extension.into(),
        }
    }

    pub fn url_for(&self, name: &str) -> String {
        format!(
            "{}/{}.{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(name),
            self.extension
        )
    }
}

#[async_trait]
impl CaptionFetcher for HttpCaptionFetcher {
    async fn fetch(&self, name: &str) -> Result<String, CaptionFetchError> {
        let url = self.url_for(name);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CaptionFetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CaptionFetchError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        response
            .text()
            .await
            .map_err(|e| CaptionFetchError::Decode(e.to_string()))
    }
}

/// Reads captions from a directory on disk.
#[derive(Debug, Clone)]
pub struct FileCaptionFetcher {
    root: PathBuf,
    extension: String,
}

impl FileCaptionFetcher {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, self.extension))
    }
}

#[async_trait]
impl CaptionFetcher for FileCaptionFetcher {
    async fn fetch(&self, name: &str) -> Result<String, CaptionFetchError> {
        let bytes = tokio::fs::read(self.path_for(name)).await?;
        String::from_utf8(bytes)
            .map_err(|e| CaptionFetchError::Decode(e.to_string()))
    }
}

/// Pick a transport for `base`: HTTP for `http://`/`https://`, files
/// otherwise.
pub fn caption_fetcher_for(
    base: &str,
    extension: &str,
) -> Box<dyn CaptionFetcher> {
    if base.starts_with("http://") || base.starts_with("https://") {
        Box::new(HttpCaptionFetcher::new(base, extension))
    } else {
        Box::new(FileCaptionFetcher::new(base, extension))
    }
}
