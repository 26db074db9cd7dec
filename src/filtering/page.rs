//! Structural inclusion test for raw pages.
//!
//! This is run by the decoder before any cleaning happens, and only looks at
//! the title and the untouched markup.
use std::collections::HashSet;

use lazy_static::lazy_static;

use super::{Filter, Thresholds};
use crate::sources::RawArticle;

const REDIRECT_MARKERS: [&str; 2] = ["#重定向", "#REDIRECT"];

lazy_static! {
    /// Namespaces whose pages are never articles, localized and latin spellings.
    static ref SKIPPED_NAMESPACES: HashSet<&'static str> = [
        "Wikipedia",
        "维基百科",
        "User",
        "用户",
        "Talk",
        "讨论",
        "File",
        "文件",
        "MediaWiki",
        "Template",
        "模板",
        "Help",
        "帮助",
        "Category",
        "分类",
        "Portal",
        "主题",
    ]
    .into_iter()
    .collect();
}

/// Reason for which a page was excluded by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exclusion {
    Empty,
    Redirect,
    Disambiguation,
    Namespace,
    TooShort,
}

/// Cheap page-level filter.
pub struct PageFilter {
    min_chars: usize,
}

impl PageFilter {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            min_chars: thresholds.page_min_chars,
        }
    }

    /// Returns the first exclusion rule the page hits, if any.
    pub fn exclusion(&self, page: &RawArticle) -> Option<Exclusion> {
        let title = page.title();
        let text = page.raw_text();

        if title.is_empty() || text.is_empty() {
            return Some(Exclusion::Empty);
        }

        let trimmed = text.trim();
        if REDIRECT_MARKERS
            .iter()
            .any(|marker| trimmed.starts_with(marker))
        {
            return Some(Exclusion::Redirect);
        }

        if title.contains("消歧义") || title.to_lowercase().contains("disambiguation") {
            return Some(Exclusion::Disambiguation);
        }

        if let Some(namespace) = namespace(title) {
            if SKIPPED_NAMESPACES.contains(namespace) {
                return Some(Exclusion::Namespace);
            }
        }

        if trimmed.chars().count() < self.min_chars {
            return Some(Exclusion::TooShort);
        }

        None
    }
}

/// Colon-delimited prefix of a title. `None` if there is no colon or the prefix is empty.
fn namespace(title: &str) -> Option<&str> {
    match title.split_once(':') {
        Some((prefix, _)) if !prefix.is_empty() => Some(prefix),
        _ => None,
    }
}

impl Default for PageFilter {
    fn default() -> Self {
        Self::new(&Thresholds::default())
    }
}

impl Filter<&RawArticle> for PageFilter {
    fn detect(&self, page: &RawArticle) -> bool {
        self.exclusion(page).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{Exclusion, PageFilter};
    use crate::filtering::Filter;
    use crate::sources::RawArticle;

    fn long_text() -> String {
        "长江是中国第一长河，".repeat(30)
    }

    fn page(title: &str, text: &str) -> RawArticle {
        RawArticle::new(title.to_string(), text.to_string(), None, None)
    }

    #[test]
    fn keeps_article() {
        let f = PageFilter::default();
        assert!(f.detect(&page("长江", &long_text())));
    }

    #[test]
    fn namespaces() {
        let f = PageFilter::default();
        for title in [
            "Wikipedia:关于",
            "维基百科:方针",
            "User:Foo",
            "用户:某人",
            "Talk:长江",
            "File:Yangtze.jpg",
            "文件:长江.png",
            "MediaWiki:Common.css",
            "Template:Infobox",
            "模板:中国",
            "Help:目录",
            "帮助:编辑",
            "Category:河流",
            "分类:河流",
            "Portal:地理",
            "主题:地理",
        ] {
            assert_eq!(
                f.exclusion(&page(title, &long_text())),
                Some(Exclusion::Namespace),
                "{}",
                title
            );
        }
    }

    #[test]
    fn unknown_namespace_is_kept() {
        let f = PageFilter::default();
        assert!(f.detect(&page("星际迷航:原初", &long_text())));
        assert!(f.detect(&page(":前导冒号", &long_text())));
    }

    #[test]
    fn redirects() {
        let f = PageFilter::default();
        let text = format!("  #重定向 [[长江]]\n{}", long_text());
        assert_eq!(f.exclusion(&page("扬子江", &text)), Some(Exclusion::Redirect));

        let text = format!("#REDIRECT [[长江]]\n{}", long_text());
        assert_eq!(f.exclusion(&page("扬子江", &text)), Some(Exclusion::Redirect));

        // case-sensitive
        let text = format!("#redirect [[长江]]\n{}", long_text());
        assert!(f.detect(&page("扬子江", &text)));
    }

    #[test]
    fn disambiguation() {
        let f = PageFilter::default();
        assert_eq!(
            f.exclusion(&page("长江 (消歧义)", &long_text())),
            Some(Exclusion::Disambiguation)
        );
        assert_eq!(
            f.exclusion(&page("Mercury (Disambiguation)", &long_text())),
            Some(Exclusion::Disambiguation)
        );
    }

    #[test]
    fn empty() {
        let f = PageFilter::default();
        assert_eq!(f.exclusion(&page("", &long_text())), Some(Exclusion::Empty));
        assert_eq!(f.exclusion(&page("长江", "")), Some(Exclusion::Empty));
    }

    #[test]
    fn length_floor_is_trimmed() {
        let f = PageFilter::default();
        let short = format!("   {}   ", "长".repeat(199));
        assert_eq!(f.exclusion(&page("长江", &short)), Some(Exclusion::TooShort));

        let exact = format!("\n{}\n", "长".repeat(200));
        assert!(f.detect(&page("长江", &exact)));
    }
}
