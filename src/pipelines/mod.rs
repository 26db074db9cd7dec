//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! and [wikiclean::WikiClean], which turns a dump into a JSONL corpus.
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod wikiclean;

pub use pipeline::Pipeline;
pub use wikiclean::WikiClean;
