//! Per-article processing: extraction, article gate, metadata.
use crate::error::Error;
use crate::filtering::{ArticleFilter, Rejection, Thresholds};
use crate::sources::RawArticle;
use crate::transformers::{Extraction, Extractor, Tier};

use super::metadata;
use super::types::NormalizedArticle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(NormalizedArticle),
    Rejected(Rejection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub tier: Tier,
    pub verdict: Verdict,
}

/// Turns a [RawArticle] into a [NormalizedArticle], or tells why it can't.
pub struct ArticleProcessor {
    extractor: Extractor,
    filter: ArticleFilter,
    source: String,
}

impl ArticleProcessor {
    pub fn new(thresholds: &Thresholds, source: String) -> Self {
        Self {
            extractor: Extractor::new(thresholds),
            filter: ArticleFilter::new(thresholds),
            source,
        }
    }

    pub fn process(&self, article: &RawArticle) -> Result<Outcome, Error> {
        let Extraction { text, tier } = self.extractor.extract(article.raw_text())?;

        let verdict = match self.filter.rejection(&text) {
            Some(rejection) => Verdict::Rejected(rejection),
            None => Verdict::Accepted(metadata::assemble(article, text, &self.source)),
        };

        Ok(Outcome { tier, verdict })
    }
}
