use crate::domain::model::{FetchedResume, ResumeSource};
use crate::utils::error::{MatcherError, Result};
use reqwest::Client;
use std::io::{BufWriter, Write};
use std::path::Path;
use url::Url;

pub const DEFAULT_SUFFIX: &str = ".pdf";
const CHUNK_SIZE: usize = 8192;

/// Resolves a resume reference to a readable local file.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, source: &ResumeSource) -> Result<FetchedResume> {
        match source {
            ResumeSource::Local(path) => {
                tracing::debug!("📄 Using local resume {}", path.display());
                Ok(FetchedResume::local(path.clone()))
            }
            ResumeSource::Remote(url) => self.download(url).await,
        }
    }

    /// Streams the body into a temp file named after the URL's extension.
    pub async fn download(&self, url: &Url) -> Result<FetchedResume> {
        tracing::debug!("🌐 Downloading resume from {}", url);

        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| MatcherError::download(e.to_string()))?;

        tracing::debug!("API response status: {}", response.status());

        let suffix = suffix_for(url);
        let temp_file = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(&suffix)
            .tempfile()?;

        let mut written = 0usize;
        {
            let mut writer = BufWriter::with_capacity(CHUNK_SIZE, temp_file.as_file());
            while let Some(chunk) = response
                .chunk()
                .await
                .map_err(|e| MatcherError::download(e.to_string()))?
            {
                writer.write_all(&chunk)?;
                written += chunk.len();
            }
            writer.flush()?;
        }

        tracing::debug!(
            "💾 Spooled {} bytes to {}",
            written,
            temp_file.path().display()
        );
        Ok(FetchedResume::temporary(temp_file))
    }
}

/// Lower-cased extension of the URL path with its leading dot, `.pdf` if absent.
pub fn suffix_for(url: &Url) -> String {
    Path::new(url.path())
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_else(|| DEFAULT_SUFFIX.to_string())
}
