use crate::utils::error::{MatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use url::Url;

/// Where the resume lives: a local file or an HTTP(S) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeSource {
    Local(PathBuf),
    Remote(Url),
}

impl ResumeSource {
    pub fn parse(reference: &str) -> Result<Self> {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            let url = Url::parse(reference)
                .map_err(|e| MatcherError::download(format!("Invalid URL '{}': {}", reference, e)))?;
            Ok(Self::Remote(url))
        } else {
            Ok(Self::Local(PathBuf::from(reference)))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

/// A resume that can be read from disk. Remote resumes own their temp file.
#[derive(Debug)]
pub struct FetchedResume {
    path: PathBuf,
    temp_file: Option<NamedTempFile>,
}

impl FetchedResume {
    pub fn local(path: PathBuf) -> Self {
        Self {
            path,
            temp_file: None,
        }
    }

    pub fn temporary(temp_file: NamedTempFile) -> Self {
        Self {
            path: temp_file.path().to_path_buf(),
            temp_file: Some(temp_file),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_temporary(&self) -> bool {
        self.temp_file.is_some()
    }

    /// Deletes the spooled download, if any. Failures are logged, never returned.
    pub fn cleanup(self) {
        if let Some(temp_file) = self.temp_file {
            match temp_file.close() {
                Ok(()) => tracing::debug!("🧹 Removed temporary file {}", self.path.display()),
                Err(e) => tracing::warn!(
                    "⚠️ Could not remove temporary file {}: {}",
                    self.path.display(),
                    e
                ),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("docx") => Ok(Self::Docx),
            _ => Err(MatcherError::UnsupportedFileType {
                path: path.display().to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
}

impl ErrorReport {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl From<&MatcherError> for ErrorReport {
    fn from(e: &MatcherError) -> Self {
        Self::new(e.to_string())
    }
}

/// How a skill was found in the resume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    Tokens,
    Substring,
    Fuzzy(f64),
}
