use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("Missing arguments")]
    MissingArguments,

    #[error("Unsupported file type")]
    UnsupportedFileType { path: String },

    #[error("Failed to download file: {message}")]
    DownloadError { message: String },

    #[error("Failed to extract text from PDF: {message}")]
    PdfError { message: String },

    #[error("Failed to extract text from DOCX: {message}")]
    DocxError { message: String },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Network,
    Document,
    System,
}

impl MatcherError {
    pub fn download(message: impl Into<String>) -> Self {
        Self::DownloadError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArguments | Self::InvalidConfigValueError { .. } => ErrorCategory::Usage,
            Self::DownloadError { .. } | Self::HttpError(_) => ErrorCategory::Network,
            Self::UnsupportedFileType { .. }
            | Self::PdfError { .. }
            | Self::DocxError { .. }
            | Self::ZipError(_)
            | Self::XmlError(_) => ErrorCategory::Document,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    /// Every failure ends the process with the same status; stdout carries the detail.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, MatcherError>;
