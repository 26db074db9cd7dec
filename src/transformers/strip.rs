/*! Markup stripping.

Turns raw wiki markup into plain paragraphs.

Passes run in a fixed order, since later passes rely on earlier ones
(e.g. internal links are unwrapped only once category and media links are gone):

1. comments and references,
2. category/media links, infoboxes, remaining templates and tables (balanced),
3. HTML tags, links, URLs, emails, empty parentheses, citation markers, navigation words,
   emphasis and headings,
4. whitespace normalization and removal of lines without any word character,
5. paragraph filtering.
!*/
use itertools::Itertools;

use crate::error::Error;
use crate::filtering::chars::{is_cjk, is_word};
use crate::filtering::{Filter, ParagraphFilter, Thresholds};

use super::delimiters::{ScanError, LINK, MAX_DEPTH, TABLE, TEMPLATE};
use super::patterns::{PatternKind, PATTERNS};
use super::transform::Transform;

/// Link namespaces whose links are removed with their content.
const MEDIA_NAMESPACES: [&str; 6] = ["category", "分类", "file", "文件", "image", "图像"];

const EARLY_PASSES: [PatternKind; 3] = [
    PatternKind::Comments,
    PatternKind::RefSelfClosing,
    PatternKind::RefBlock,
];

const INLINE_PASSES: [PatternKind; 10] = [
    PatternKind::HtmlTags,
    PatternKind::InternalLinks,
    PatternKind::ExternalLinks,
    PatternKind::Urls,
    PatternKind::Emails,
    PatternKind::EmptyParens,
    PatternKind::CitationMarkers,
    PatternKind::Navigation,
    PatternKind::Emphasis,
    PatternKind::Headings,
];

fn is_media_link(inner: &str) -> bool {
    inner
        .split_once(':')
        .map(|(prefix, _)| {
            let prefix = prefix.trim().to_lowercase();
            MEDIA_NAMESPACES.contains(&prefix.as_str())
        })
        .unwrap_or(false)
}

fn is_infobox(inner: &str) -> bool {
    inner
        .trim_start()
        .get(..7)
        .map(|name| name.eq_ignore_ascii_case("infobox"))
        .unwrap_or(false)
}

/// Collapses runs of spaces into one and runs of three or more newlines into two.
///
/// Applying it twice gives the same result as applying it once.
pub fn normalize_whitespace(text: &str) -> String {
    PATTERNS.replace_all(
        &[PatternKind::MultipleSpaces, PatternKind::MultipleNewlines],
        text.to_string(),
    )
}

/// Removes non-blank lines that hold no word character (leftover bullets, pipes, dashes).
fn drop_symbol_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| line.trim().is_empty() || line.chars().any(|c| is_word(c) || is_cjk(c)))
        .join("\n")
}

/// Primary extraction tier.
pub struct MarkupStripper {
    paragraphs: ParagraphFilter,
    max_depth: usize,
}

impl MarkupStripper {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            paragraphs: ParagraphFilter::new(thresholds),
            max_depth: MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Runs every removal pass and normalizes whitespace, without filtering paragraphs.
    pub fn strip_markup(&self, markup: &str) -> Result<String, ScanError> {
        let text = PATTERNS.replace_all(&EARLY_PASSES, markup.to_string());

        let text = LINK.strip_regions(&text, self.max_depth, is_media_link)?;
        let text = TEMPLATE.strip_regions(&text, self.max_depth, is_infobox)?;
        let text = TEMPLATE.strip_regions(&text, self.max_depth, |_| true)?;
        let text = TABLE.strip_regions(&text, self.max_depth, |_| true)?;

        let text = PATTERNS.replace_all(&INLINE_PASSES, text);
        let text = normalize_whitespace(&text);
        Ok(drop_symbol_lines(&text))
    }

    /// Splits on blank lines and keeps paragraphs that pass the paragraph filter.
    pub fn keep_paragraphs(&self, text: &str) -> String {
        PATTERNS
            .regex(PatternKind::ParagraphBreak)
            .split(text)
            .map(str::trim)
            .filter(|p| self.paragraphs.detect(p))
            .join("\n\n")
    }

    pub fn strip(&self, markup: &str) -> Result<String, ScanError> {
        let text = self.strip_markup(markup)?;
        Ok(self.keep_paragraphs(&text))
    }
}

impl Default for MarkupStripper {
    fn default() -> Self {
        Self::new(&Thresholds::default())
    }
}

impl Transform for MarkupStripper {
    fn transform(&self, markup: &str) -> Result<String, Error> {
        Ok(self.strip(markup)?)
    }
}
