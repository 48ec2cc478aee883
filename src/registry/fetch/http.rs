//! HTTP template fetching.
//!
//! Downloads template zip archives over HTTP/HTTPS with a blocking client.

use anyhow::{bail, Context};
use reqwest::blocking::Client;
use reqwest::Url;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::archive::unzip_archive;
use crate::error::{Result, SpecrigError};

use super::TemplateDownloader;

/// Archive name used when the URL path has no usable file name.
const FALLBACK_ARCHIVE_NAME: &str = "template.zip";

/// Fetches template archives over HTTP/HTTPS.
pub struct HttpDownloader {
    client: Client,
    timeout: Duration,
}

impl HttpDownloader {
    /// Create a new downloader with a default 300-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(300))
    }

    /// Create a new downloader with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("specrig/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the raw bytes at `url`.
    pub fn fetch_bytes(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        let bytes = response
            .bytes()
            .with_context(|| format!("Failed to read response from {}", url))?;
        Ok(bytes.to_vec())
    }
}

/// File name for a downloaded archive, taken from the last URL path segment.
pub fn archive_file_name(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .filter(|name| !name.is_empty() && !name.starts_with('.'))
        .map(|name| {
            if name.ends_with(".zip") {
                name
            } else {
                format!("{}.zip", name)
            }
        })
        .unwrap_or_else(|| FALLBACK_ARCHIVE_NAME.to_string())
}

impl TemplateDownloader for HttpDownloader {
    fn download(&self, url: &str, dest_dir: &Path) -> Result<PathBuf> {
        tracing::debug!("Downloading template archive {}", url);

        let bytes = self
            .fetch_bytes(url)
            .map_err(|e| SpecrigError::DownloadOrExtractFailed {
                location: url.to_string(),
                message: format!("{:#}", e),
            })?;

        fs::create_dir_all(dest_dir)?;
        let archive = dest_dir.join(archive_file_name(url));
        fs::write(&archive, &bytes)?;
        tracing::debug!("Saved {} bytes to {}", bytes.len(), archive.display());

        unzip_archive(&archive, dest_dir)
    }
}
