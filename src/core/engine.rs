use crate::core::{FetchedResume, MatchReport, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Runs fetch → extract → match → report once, then removes any download.
pub struct MatchEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> MatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, enable_monitoring: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(enable_monitoring),
        }
    }

    pub async fn run(&self) -> Result<MatchReport> {
        tracing::info!("🚀 Starting resume skill match");

        let resume = self.pipeline.fetch().await?;
        self.monitor.log_stats("Fetch");

        let result = self.analyze(&resume).await;

        // 暫存檔清除失敗只記錄，不影響結果
        resume.cleanup();

        if self.monitor.is_enabled() {
            self.monitor.log_final_stats();
        }
        result
    }

    async fn analyze(&self, resume: &FetchedResume) -> Result<MatchReport> {
        let text = self.pipeline.extract(resume).await?;
        tracing::info!("📄 Extracted {} characters of resume text", text.len());
        self.monitor.log_stats("Extract");

        let matched = self.pipeline.match_skills(&text).await?;
        self.monitor.log_stats("Match");

        let report = self.pipeline.report(matched).await?;
        tracing::info!(
            "✅ Matched {} skills, missing {} ({}%)",
            report.matched_skills.len(),
            report.missing_skills.len(),
            report.match_percentage
        );
        Ok(report)
    }
}
