use crate::core::matcher::DEFAULT_THRESHOLD;
use crate::core::MatcherConfig;
use crate::utils::error::{MatcherError, Result};
use crate::utils::validation::{validate_path, validate_positive_number, validate_range, validate_url, Validate};
use std::time::Duration;

#[cfg(feature = "cli")]
use clap::Parser;

/// Splits the raw skill argument on commas. `""` is one empty skill.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "resume-skill-matcher"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Match a comma-separated skill list against a PDF or DOCX resume")
)]
pub struct CliConfig {
    /// Resume file path or http(s) URL
    pub resume: Option<String>,

    /// Comma-separated skills, e.g. "Python,SQL,Kubernetes"
    #[cfg_attr(feature = "cli", arg(allow_hyphen_values = true))]
    pub skills: Option<String>,

    // 多餘的位置參數直接忽略
    #[cfg_attr(feature = "cli", arg(hide = true))]
    pub extra: Vec<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_THRESHOLD, help = "Fuzzy match threshold (0-100)"))]
    pub threshold: f64,

    #[cfg_attr(feature = "cli", arg(long, help = "HTTP timeout for remote resumes, in seconds"))]
    pub timeout_secs: Option<u64>,

    #[cfg_attr(feature = "cli", arg(long, help = "Pretty-print the JSON result"))]
    pub pretty: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON on stderr"))]
    pub log_json: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Log CPU and memory usage per phase"))]
    pub monitor: bool,
}

impl CliConfig {
    pub fn new(resume: impl Into<String>, skills: impl Into<String>) -> Self {
        Self {
            resume: Some(resume.into()),
            skills: Some(skills.into()),
            extra: Vec::new(),
            threshold: DEFAULT_THRESHOLD,
            timeout_secs: None,
            pretty: false,
            log_json: false,
            verbose: false,
            monitor: false,
        }
    }
}

impl MatcherConfig for CliConfig {
    fn resume_reference(&self) -> &str {
        self.resume.as_deref().unwrap_or_default()
    }

    fn skills(&self) -> Vec<String> {
        self.skills.as_deref().map(parse_skill_list).unwrap_or_default()
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let (Some(resume), Some(_)) = (&self.resume, &self.skills) else {
            return Err(MatcherError::MissingArguments);
        };

        if resume.starts_with("http://") || resume.starts_with("https://") {
            validate_url("resume", resume)?;
        } else {
            validate_path("resume", resume)?;
        }

        validate_range("threshold", self.threshold, 0.0, 100.0)?;
        if let Some(timeout) = self.timeout_secs {
            validate_positive_number("timeout_secs", timeout, 1)?;
        }
        Ok(())
    }
}
