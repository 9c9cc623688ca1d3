use crate::core::extractor::extract_text;
use crate::core::fetcher::Fetcher;
use crate::core::matcher::SkillMatcher;
use crate::core::reporter::build_report;
use crate::core::tokenizer::Tokenizer;
use crate::core::{FetchedResume, MatchReport, MatcherConfig, Pipeline, ResumeSource};
use crate::utils::error::Result;
use reqwest::Client;

pub struct SkillPipeline<C: MatcherConfig> {
    config: C,
    fetcher: Fetcher,
    matcher: SkillMatcher,
    tokenizer: &'static Tokenizer,
}

impl<C: MatcherConfig> SkillPipeline<C> {
    pub fn new(config: C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            matcher: SkillMatcher::new(config.threshold()),
            fetcher: Fetcher::new(client),
            tokenizer: Tokenizer::shared(),
            config,
        })
    }
}

#[async_trait::async_trait]
impl<C: MatcherConfig> Pipeline for SkillPipeline<C> {
    async fn fetch(&self) -> Result<FetchedResume> {
        let source = ResumeSource::parse(self.config.resume_reference())?;
        self.fetcher.fetch(&source).await
    }

    async fn extract(&self, resume: &FetchedResume) -> Result<String> {
        tracing::debug!("Extracting text from {}", resume.path().display());
        extract_text(resume.path())
    }

    async fn match_skills(&self, resume_text: &str) -> Result<Vec<String>> {
        let skills = self.config.skills();
        tracing::debug!(
            "Matching {} skills (threshold {})",
            skills.len(),
            self.matcher.threshold()
        );
        Ok(self.matcher.match_skills(resume_text, &skills, self.tokenizer))
    }

    async fn report(&self, matched: Vec<String>) -> Result<MatchReport> {
        Ok(build_report(&self.config.skills(), matched))
    }
}
