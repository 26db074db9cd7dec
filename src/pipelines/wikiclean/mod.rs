//! Wikipedia dump to JSONL corpus pipeline.
mod article;
pub mod metadata;
mod pipeline;
mod stats;
mod types;

pub use article::{ArticleProcessor, Outcome, Verdict};
pub use metadata::DEFAULT_SOURCE;
pub use pipeline::{WikiClean, OUTPUT_FILE};
pub use stats::PipelineStats;
pub use types::{Metadata, NormalizedArticle};
