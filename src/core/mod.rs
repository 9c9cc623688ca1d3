pub mod engine;
pub mod extractor;
pub mod fetcher;
pub mod fuzzy;
pub mod matcher;
pub mod pipeline;
pub mod reporter;
pub mod stopwords;
pub mod tokenizer;

pub use crate::domain::model::{
    DocumentKind, ErrorReport, FetchedResume, MatchKind, MatchReport, ResumeSource,
};
pub use crate::domain::ports::{MatcherConfig, Pipeline, TextExtractor};
pub use crate::utils::error::Result;
