//! Fallback extraction tier.
//!
//! Used when [super::MarkupStripper] cannot make sense of an article.
//! Every pass is a flat regular expression, so it always succeeds,
//! at the cost of leaving residue from nested constructs.
//! Inline noise (URLs, emails, navigation words, headings) is removed as in the primary tier.
use crate::error::Error;

use super::patterns::{PatternKind, PATTERNS};
use super::transform::Transform;

const PASSES: [PatternKind; 16] = [
    PatternKind::Comments,
    PatternKind::RefSelfClosing,
    PatternKind::RefBlock,
    PatternKind::MediaLinks,
    PatternKind::NaiveTemplates,
    PatternKind::NaiveTables,
    PatternKind::InternalLinks,
    PatternKind::HtmlTags,
    PatternKind::ExternalLinks,
    PatternKind::Urls,
    PatternKind::Emails,
    PatternKind::EmptyParens,
    PatternKind::CitationMarkers,
    PatternKind::Navigation,
    PatternKind::Headings,
    PatternKind::HorizontalSpace,
];

/// Naive cleaner. Keeps line structure and does no paragraph filtering.
#[derive(Debug, Default)]
pub struct BasicCleaner;

impl BasicCleaner {
    pub fn clean(&self, markup: &str) -> String {
        let text = PATTERNS.replace_all(&PASSES, markup.to_string());
        let text = PATTERNS.replace(PatternKind::MultipleNewlines, text);
        text.trim().to_string()
    }
}

impl Transform for BasicCleaner {
    fn transform(&self, markup: &str) -> Result<String, Error> {
        Ok(self.clean(markup))
    }
}
