pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{parse_skill_list, CliConfig};
pub use crate::core::{engine::MatchEngine, pipeline::SkillPipeline};
pub use domain::model::{ErrorReport, MatchReport};
pub use utils::error::{MatcherError, Result};
