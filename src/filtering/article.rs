//! Article-level filtering.
//!
//! Run once on the cleaned, reassembled article text.
use std::collections::HashSet;
use std::fmt;

use super::chars::count_cjk;
use super::{Filter, Thresholds};

/// Reason for which an article was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rejection {
    TooShort,
    TooFewCjk,
    TooFewLines,
    Repetitive,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::TooShort => "too short",
            Rejection::TooFewCjk => "too few CJK ideographs",
            Rejection::TooFewLines => "too few lines",
            Rejection::Repetitive => "too repetitive",
        };
        write!(f, "{}", reason)
    }
}

pub struct ArticleFilter {
    min_chars: usize,
    min_cjk: usize,
    min_lines: usize,
    min_unique_ratio: f64,
    unique_min_words: usize,
}

impl ArticleFilter {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            min_chars: thresholds.article_min_chars,
            min_cjk: thresholds.article_min_cjk,
            min_lines: thresholds.article_min_lines,
            min_unique_ratio: thresholds.article_min_unique_ratio,
            unique_min_words: thresholds.article_unique_min_words,
        }
    }

    /// Returns the first gate the text fails, if any.
    pub fn rejection(&self, text: &str) -> Option<Rejection> {
        if text.trim().chars().count() < self.min_chars {
            return Some(Rejection::TooShort);
        }

        if count_cjk(text) < self.min_cjk {
            return Some(Rejection::TooFewCjk);
        }

        let lines = text.lines().filter(|line| !line.trim().is_empty()).count();
        if lines < self.min_lines {
            return Some(Rejection::TooFewLines);
        }

        // repeated content (spam, lists of identical entries)
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() > self.unique_min_words {
            let distinct = words.iter().collect::<HashSet<_>>().len();
            if (distinct as f64) < words.len() as f64 * self.min_unique_ratio {
                return Some(Rejection::Repetitive);
            }
        }

        None
    }
}

impl Default for ArticleFilter {
    fn default() -> Self {
        Self::new(&Thresholds::default())
    }
}

impl Filter<&str> for ArticleFilter {
    fn detect(&self, text: &str) -> bool {
        self.rejection(text).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{ArticleFilter, Rejection};
    use crate::filtering::Filter;

    fn valid_article() -> String {
        [
            "长江是亚洲第一长河，也是世界第三长河，全长约六千三百公里。",
            "长江发源于青藏高原的唐古拉山脉，流经十一个省级行政区。",
            "长江流域是中国经济最发达的地区之一，孕育了灿烂的文化。",
            "长江三角洲地区包括上海、江苏和浙江等地，是重要的经济中心。",
        ]
        .join("\n\n")
    }

    #[test]
    fn accepts() {
        let f = ArticleFilter::default();
        assert_eq!(f.rejection(&valid_article()), None);
        assert!(f.detect(&valid_article()));
    }

    #[test]
    fn too_short() {
        let f = ArticleFilter::default();
        let text = "长江是亚洲第一长河。\n\n长江流经中国。\n\n长江很长。";
        assert_eq!(f.rejection(text), Some(Rejection::TooShort));
    }

    #[test]
    fn too_few_cjk() {
        let f = ArticleFilter::default();
        let text = "The Yangtze is the longest river in Asia and the third longest in the world.\n\
            It flows for 6,300 km from the Tibetan Plateau to the East China Sea.\n\
            Its basin is home to one third of the population of 长江.";
        assert_eq!(f.rejection(text), Some(Rejection::TooFewCjk));
    }

    #[test]
    fn too_few_lines() {
        let f = ArticleFilter::default();
        let text = valid_article().replace("\n\n", "");
        assert_eq!(f.rejection(&text), Some(Rejection::TooFewLines));

        let text = valid_article().replacen("\n\n", "", 2);
        assert_eq!(f.rejection(&text), Some(Rejection::TooFewLines));
    }

    #[test]
    fn repetitive_words() {
        let f = ArticleFilter::default();

        // 150 words, 10 distinct
        let line: Vec<String> = (0..50).map(|i| format!("词语{}", i % 10)).collect();
        let line = line.join(" ");
        let text = [line.as_str(), line.as_str(), line.as_str()].join("\n");
        assert_eq!(text.split_whitespace().count(), 150);
        assert_eq!(f.rejection(&text), Some(Rejection::Repetitive));
    }

    #[test]
    fn unique_check_needs_enough_words() {
        let f = ArticleFilter::default();

        // 99 words, 3 distinct: not enough words for the check to apply
        let line: Vec<String> = (0..33).map(|i| format!("词语{}", i % 3)).collect();
        let line = line.join(" ");
        let text = [line.as_str(), line.as_str(), line.as_str()].join("\n");
        assert_eq!(f.rejection(&text), None);
    }

    #[test]
    fn half_distinct_is_enough() {
        let f = ArticleFilter::default();

        // 150 words, 75 distinct
        let mut words: Vec<String> = (0..75).map(|i| format!("词语{}", i)).collect();
        words.extend((0..75).map(|i| format!("词语{}", i % 10)));
        assert_eq!(words.len(), 150);
        let text = words
            .chunks(50)
            .map(|chunk| chunk.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(f.rejection(&text), None);
    }
}
