use clap::error::ErrorKind;
use clap::Parser;
use resume_skill_matcher::core::reporter::to_json;
use resume_skill_matcher::utils::{logger, validation::Validate};
use resume_skill_matcher::{CliConfig, ErrorReport, MatchEngine, MatcherError, SkillPipeline};

#[tokio::main]
async fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // clap 的錯誤訊息第一行就夠了
            let message = e.to_string();
            let first_line = message.lines().next().unwrap_or("Invalid arguments");
            print_error(&ErrorReport::new(first_line.trim_start_matches("error: ")), false);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting resume-skill-matcher");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let pretty = config.pretty;
    match run(config).await {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!("❌ Match failed: {} (Category: {:?})", e, e.category());
            print_error(&ErrorReport::from(&e), pretty);
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(config: CliConfig) -> Result<String, MatcherError> {
    // 驗證配置
    config.validate()?;

    let pretty = config.pretty;
    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let pipeline = SkillPipeline::new(config)?;
    let engine = MatchEngine::new_with_monitoring(pipeline, monitor_enabled);
    let report = engine.run().await?;

    to_json(&report, pretty)
}

fn print_error(report: &ErrorReport, pretty: bool) {
    match to_json(report, pretty) {
        Ok(json) => println!("{}", json),
        Err(_) => println!("{{\"error\": \"{}\"}}", report.error.replace('"', "'")),
    }
}
