//! Media catalog fetch.
//!
//! The media server publishes its whole library as one JSON document at
//! `<media_source>/media_info`. It is fetched once at startup and loaded
//! into the [`MediaStore`].
//!
//! [`MediaStore`]: crate::catalog::MediaStore

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::MediaInfo;

/// Errors that can occur while fetching the catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not a valid catalog document.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "media server error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Returns the name of the source, for logs and the status line.
    fn name(&self) -> &str;

    /// Fetches the complete catalog.
    async fn fetch(&self) -> Result<MediaInfo, CatalogError>;
}

/// Catalog served over HTTP by the media server.
pub struct HttpCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/media_info", self.base_url)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self) -> Result<MediaInfo, CatalogError> {
        let url = self.endpoint();
        info!("Fetching catalog from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog fetch failed: {} - {}", status, body);
            return Err(CatalogError::Api {
                status,
                message: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let media: MediaInfo =
            serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        info!(
            "Catalog fetched: {} movies, {} shows, {} episodes",
            media.movies.len(),
            media.shows.len(),
            media.episodes.len()
        );
        Ok(media)
    }
}
