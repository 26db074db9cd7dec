//! Metadata assembly.
//!
//! Categories and `char_count` are taken from the original markup,
//! since category links are gone once the text is cleaned.
use crate::sources::RawArticle;
use crate::transformers::{PatternKind, PATTERNS};

use super::types::{Metadata, NormalizedArticle};

/// Source tag used when none is provided.
pub const DEFAULT_SOURCE: &str = "zh_wikipedia_20250201";

pub const MAX_CATEGORIES: usize = 5;

/// Returns the first [MAX_CATEGORIES] category targets, in order of appearance.
///
/// Sort keys (`[[分类:中国|zhong]]`) are dropped and targets are trimmed.
pub fn extract_categories(markup: &str) -> Vec<String> {
    PATTERNS
        .regex(PatternKind::CategoryTargets)
        .captures_iter(markup)
        .filter_map(|captures| captures.get(1))
        .map(|target| {
            let target = target.as_str();
            let target = target
                .split_once('|')
                .map(|(name, _)| name)
                .unwrap_or(target);
            target.trim().to_string()
        })
        .filter(|target| !target.is_empty())
        .take(MAX_CATEGORIES)
        .collect()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(String::from)
}

/// Builds the output unit from the page and its cleaned text.
pub fn assemble(article: &RawArticle, text: String, source: &str) -> NormalizedArticle {
    let categories = extract_categories(article.raw_text());
    let categories = if categories.is_empty() {
        None
    } else {
        Some(categories)
    };

    let meta = Metadata::new(
        article.title().to_string(),
        article.raw_text().chars().count(),
        source.to_string(),
        non_empty(article.id()),
        non_empty(article.timestamp()),
        categories,
    );

    NormalizedArticle::new(text, meta)
}

#[cfg(test)]
mod tests {
    use super::{assemble, extract_categories, DEFAULT_SOURCE};
    use crate::sources::RawArticle;

    #[test]
    fn category_cap() {
        let markup: String = (1..=8)
            .map(|i| format!("[[Category:类别{}]]\n", i))
            .collect();
        assert_eq!(
            extract_categories(&markup),
            vec!["类别1", "类别2", "类别3", "类别4", "类别5"]
        );
    }

    #[test]
    fn category_forms() {
        let markup = "[[分类:河流]] [[category: 亚洲 ]] [[Category:中国|zhong]] [[Category: ]] [[File:a.jpg]]";
        assert_eq!(extract_categories(markup), vec!["河流", "亚洲", "中国"]);
    }

    #[test]
    fn char_count_is_original_length() {
        let markup = "'''长江'''<ref>书</ref>是河流。[[Category:河流]]";
        let article = RawArticle::new(
            "长江".to_string(),
            markup.to_string(),
            Some("42".to_string()),
            Some(String::new()),
        );
        let record = assemble(&article, "长江是河流。".to_string(), DEFAULT_SOURCE);

        assert_eq!(record.meta().char_count(), markup.chars().count());
        assert_ne!(record.meta().char_count(), record.text().chars().count());
        assert_eq!(record.meta().page_id(), Some("42"));
        assert_eq!(record.meta().timestamp(), None);
        assert_eq!(record.meta().source(), DEFAULT_SOURCE);
        assert_eq!(record.meta().categories(), Some(&["河流".to_string()][..]));
    }

    #[test]
    fn no_categories() {
        let article = RawArticle::new("长江".to_string(), "长江是河流。".to_string(), None, None);
        let record = assemble(&article, "长江是河流。".to_string(), "other");
        assert_eq!(record.meta().categories(), None);
        assert_eq!(record.meta().page_id(), None);
        assert_eq!(record.meta().source(), "other");
    }
}
