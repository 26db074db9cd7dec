//! Input sources.
//!
//! [wikidump::WikiDump] implements [Iterator] over the [RawArticle]s of a MediaWiki
//! XML export, decompressing it on the fly.
mod page;
pub mod wikidump;

pub use page::RawArticle;
pub use wikidump::{DecoderStats, WikiDump};
