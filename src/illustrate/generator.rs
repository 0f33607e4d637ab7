use std::path::{Path, PathBuf};

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::io::AsyncWriteExt;

use crate::config::AppConfig;
use crate::models::IllustrationJob;

const IMAGE_SIZE: u32 = 512;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(StatusCode),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty file downloaded")]
    Empty,
}

/// Client for the prompt-to-image service.
#[derive(Debug, Clone)]
pub struct ImageGenerator {
    base_url: String,
    client: Client,
}

impl ImageGenerator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.image_url.clone())
    }

    /// `{base}/prompt/{prompt}?width=512&height=512&seed={seed}&nologo=true`
    pub fn request_url(&self, prompt: &str, seed: i64) -> String {
        format!(
            "{}/prompt/{}?width={}&height={}&seed={}&nologo=true",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(prompt),
            IMAGE_SIZE,
            IMAGE_SIZE,
            seed
        )
    }

    /// Request a fresh image for `job` and write it into `out_dir`.
    pub async fn generate(
        &self,
        job: &IllustrationJob,
        out_dir: &Path,
    ) -> Result<PathBuf, DownloadError> {
        let seed = chrono::Utc::now().timestamp_millis();
        let path = out_dir.join(job.output_filename());
        self.download(&self.request_url(job.prompt, seed), &path).await?;
        Ok(path)
    }

    /// Stream `url` into `path`. A failed or empty download leaves no file.
    pub async fn download(&self, url: &str, path: &Path) -> Result<u64, DownloadError> {
        match self.stream_to_file(url, path).await {
            Ok(0) => {
                remove_partial(path).await;
                Err(DownloadError::Empty)
            }
            Ok(written) => Ok(written),
            Err(e) => {
                remove_partial(path).await;
                Err(e)
            }
        }
    }

    async fn stream_to_file(&self, url: &str, path: &Path) -> Result<u64, DownloadError> {
        let mut response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::Status(status));
        }

        let mut file = tokio::fs::File::create(path).await?;
        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;
        Ok(written)
    }
}

async fn remove_partial(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("Could not remove partial file {}: {}", path.display(), e);
        }
    }
}
