//! Public URLs for illustrations stored in the object-storage bucket.

use futures::future::join_all;
use reqwest::Client;
use thiserror::Error;

use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Empty image body: {0}")]
    Empty(String),
}

/// Resolves illustration filenames against a public storage bucket.
#[derive(Debug, Clone)]
pub struct ImageStore {
    storage_url: String,
    bucket: String,
    client: Client,
}

impl ImageStore {
    pub fn new(storage_url: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            storage_url: storage_url.into(),
            bucket: bucket.into(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.storage_url.clone(), config.storage_bucket.clone())
    }

    /// Public URL of an object. Pure string construction, no request is made.
    pub fn public_url(&self, filename: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.storage_url.trim_end_matches('/'),
            self.bucket,
            urlencoding::encode(filename)
        )
    }

    /// Fetch every URL in parallel so later loads hit a warm cache.
    ///
    /// Failures are logged and otherwise ignored. Returns how many loaded.
    pub async fn prefetch(&self, urls: &[String]) -> usize {
        let attempts = urls.iter().map(|url| self.fetch(url));
        let results = join_all(attempts).await;

        let mut loaded = 0;
        for (url, result) in urls.iter().zip(results) {
            match result {
                Ok(()) => loaded += 1,
                Err(e) => tracing::debug!("Prefetch of {} failed: {}", url, e),
            }
        }
        tracing::info!("Prefetched {}/{} illustrations", loaded, urls.len());
        loaded
    }

    async fn fetch(&self, url: &str) -> Result<(), ImageError> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        if bytes.is_empty() {
            return Err(ImageError::Empty(url.to_string()));
        }
        Ok(())
    }
}
