//! Cleaning patterns.
//!
//! The [PATTERNS] set is built once and only ever read afterwards.
use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Process-wide cleaning patterns.
    pub static ref PATTERNS: CleaningPatternSet = CleaningPatternSet::new();
}

/// Names of the cleaning patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Comments,
    RefSelfClosing,
    RefBlock,
    MediaLinks,
    NaiveTemplates,
    NaiveTables,
    HtmlTags,
    InternalLinks,
    ExternalLinks,
    Urls,
    Emails,
    EmptyParens,
    CitationMarkers,
    Navigation,
    Emphasis,
    Headings,
    MultipleSpaces,
    MultipleNewlines,
    HorizontalSpace,
    ParagraphBreak,
    CategoryTargets,
}

impl PatternKind {
    pub const ALL: [PatternKind; 21] = [
        PatternKind::Comments,
        PatternKind::RefSelfClosing,
        PatternKind::RefBlock,
        PatternKind::MediaLinks,
        PatternKind::NaiveTemplates,
        PatternKind::NaiveTables,
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
        PatternKind::MultipleSpaces,
        PatternKind::MultipleNewlines,
        PatternKind::HorizontalSpace,
        PatternKind::ParagraphBreak,
        PatternKind::CategoryTargets,
    ];

    fn pattern(&self) -> &'static str {
        match self {
            PatternKind::Comments => r"(?s)<!--.*?-->",
            PatternKind::RefSelfClosing => r"(?i)<ref\b[^>]*/>",
            PatternKind::RefBlock => r"(?is)<ref\b[^>]*>.*?</ref\s*>",
            PatternKind::MediaLinks => {
                r"(?i)\[\[\s*(?:Category|分类|File|文件|Image|图像)\s*:[^\]]*\]\]"
            }
            PatternKind::NaiveTemplates => r"\{\{[^}]*\}\}",
            PatternKind::NaiveTables => r"(?s)\{\|.*?\|\}",
            PatternKind::HtmlTags => r"</?[a-zA-Z][^>\n]*>",
            PatternKind::InternalLinks => r"\[\[(?:[^\[\]|]*\|)*([^\[\]|]*)\]\]",
            PatternKind::ExternalLinks => r"\[(?:https?:)?//[^\s\]]+\s*([^\]]*)\]",
            PatternKind::Urls => r"(?i)https?://\S+",
            PatternKind::Emails => r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
            PatternKind::EmptyParens => r"[(（][^a-zA-Z\x{4e00}-\x{9fff}()（）\n]*[)）]",
            PatternKind::CitationMarkers => r"\[\s*\d+\s*\]",
            PatternKind::Navigation => r"(?i)上一页|下一页|返回|目录|导航|分类|Category:|Template:",
            PatternKind::Emphasis => r"'{2,}",
            PatternKind::Headings => r"(?m)^[ \t]*=+[ \t]*(.*?)[ \t]*=+[ \t]*$",
            PatternKind::MultipleSpaces => r" {2,}",
            PatternKind::MultipleNewlines => r"\n{3,}",
            PatternKind::HorizontalSpace => r"[ \t]+",
            PatternKind::ParagraphBreak => r"\n\s*\n",
            PatternKind::CategoryTargets => r"(?i)\[\[\s*(?:Category|分类)\s*:([^\]]+)\]\]",
        }
    }

    fn replacement(&self) -> &'static str {
        match self {
            PatternKind::InternalLinks | PatternKind::ExternalLinks | PatternKind::Headings => "$1",
            PatternKind::MultipleSpaces | PatternKind::HorizontalSpace => " ",
            PatternKind::MultipleNewlines | PatternKind::ParagraphBreak => "\n\n",
            _ => "",
        }
    }
}

/// A matcher and what its matches are replaced by.
#[derive(Debug)]
pub struct CleaningRule {
    pattern: Regex,
    replacement: &'static str,
}

impl CleaningRule {
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement)
    }
}

/// Fixed mapping from [PatternKind] to [CleaningRule].
#[derive(Debug)]
pub struct CleaningPatternSet {
    // indexed by `PatternKind as usize`
    rules: Vec<CleaningRule>,
}

impl CleaningPatternSet {
    fn new() -> Self {
        let rules = PatternKind::ALL
            .iter()
            .map(|kind| CleaningRule {
                pattern: Regex::new(kind.pattern()).expect("invalid cleaning pattern"),
                replacement: kind.replacement(),
            })
            .collect();
        Self { rules }
    }

    pub fn rule(&self, kind: PatternKind) -> &CleaningRule {
        &self.rules[kind as usize]
    }

    pub fn regex(&self, kind: PatternKind) -> &Regex {
        self.rule(kind).pattern()
    }

    /// Apply a rule, reusing `text` when nothing matched.
    pub fn replace(&self, kind: PatternKind, text: String) -> String {
        let replaced = match self.rule(kind).apply(&text) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        replaced.unwrap_or(text)
    }

    /// Apply rules in order.
    pub fn replace_all(&self, kinds: &[PatternKind], text: String) -> String {
        kinds
            .iter()
            .fold(text, |text, kind| self.replace(*kind, text))
    }
}
