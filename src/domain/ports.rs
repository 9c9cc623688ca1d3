use crate::domain::model::{FetchedResume, MatchReport};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// Turns one document format into plain text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> Result<String>;
}

pub trait MatcherConfig: Send + Sync {
    fn resume_reference(&self) -> &str;
    fn skills(&self) -> Vec<String>;
    fn threshold(&self) -> f64;
    fn timeout(&self) -> Option<Duration>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<FetchedResume>;
    async fn extract(&self, resume: &FetchedResume) -> Result<String>;
    async fn match_skills(&self, resume_text: &str) -> Result<Vec<String>>;
    async fn report(&self, matched: Vec<String>) -> Result<MatchReport>;
}
