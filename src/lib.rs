//! # wikiclean
//!
//! Streaming pipeline turning a Chinese Wikipedia dump into a JSONL corpus of cleaned articles.
//!
//! The dump is read page by page ([sources::WikiDump]), stripped of its markup
//! ([transformers::Extractor]), filtered ([filtering]) and written out
//! ([io::writer::JsonlWriter]) by the [pipelines::WikiClean] pipeline.
pub mod download;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod sources;
pub mod transformers;
