//! Paragraph-level filtering.
use super::chars::CharProfile;
use super::{Filter, Thresholds};

/// Keeps paragraphs that are long enough, mostly made of words and written in Chinese.
///
/// A paragraph is rejected if:
/// - its trimmed length is under `paragraph_min_chars`,
/// - it has fewer than `paragraph_min_word_chars` word characters,
/// - its CJK/word ratio is under `paragraph_min_cjk_ratio` *and* it has fewer than
///   `paragraph_min_cjk` ideographs,
/// - more than `paragraph_max_noise_ratio` of its characters are punctuation or symbols.
pub struct ParagraphFilter {
    min_chars: usize,
    min_word_chars: usize,
    min_cjk_ratio: f64,
    min_cjk: usize,
    max_noise_ratio: f64,
}

impl ParagraphFilter {
    pub fn new(thresholds: &Thresholds) -> Self {
        Self {
            min_chars: thresholds.paragraph_min_chars,
            min_word_chars: thresholds.paragraph_min_word_chars,
            min_cjk_ratio: thresholds.paragraph_min_cjk_ratio,
            min_cjk: thresholds.paragraph_min_cjk,
            max_noise_ratio: thresholds.paragraph_max_noise_ratio,
        }
    }
}

impl Default for ParagraphFilter {
    fn default() -> Self {
        Self::new(&Thresholds::default())
    }
}

impl Filter<&str> for ParagraphFilter {
    fn detect(&self, paragraph: &str) -> bool {
        let paragraph = paragraph.trim();
        let profile = CharProfile::of(paragraph);

        if profile.chars < self.min_chars {
            return false;
        }

        if profile.word < self.min_word_chars {
            return false;
        }

        if profile.cjk_ratio() < self.min_cjk_ratio && profile.cjk < self.min_cjk {
            return false;
        }

        profile.noise_ratio() <= self.max_noise_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::ParagraphFilter;
    use crate::filtering::Filter;

    #[test]
    fn short_paragraph() {
        let f = ParagraphFilter::default();
        // 18 chars
        assert!(!f.detect("中华人民共和国位于东亚，首都北京市区"));
        assert!(f.detect("中华人民共和国位于东亚，首都是北京，人口众多。"));
    }

    #[test]
    fn length_is_trimmed() {
        let f = ParagraphFilter::default();
        let p = format!("      {}      ", "中".repeat(15));
        assert!(!f.detect(&p));
    }

    #[test]
    fn latin_paragraph_needs_cjk_floor() {
        let f = ParagraphFilter::default();
        assert!(!f.detect("This paragraph is entirely written in English words."));

        // ratio is low, but five ideographs are enough
        assert!(f.detect("This paragraph mentions 中华人民共和 in passing only."));
        assert!(!f.detect("This paragraph mentions 中华人民 in passing only."));
    }

    #[test]
    fn noisy_paragraph() {
        let f = ParagraphFilter::default();
        assert!(!f.detect("中文中文|中文中文|中文中文|！！！！！！！！！！！！！！！！！！"));
        assert!(f.detect("中文中文中文中文，中文中文中文中文。中文中文中文！"));
    }

    #[test]
    fn few_word_chars() {
        let f = ParagraphFilter::default();
        assert!(!f.detect("中国 — — — — — — — — — 美国"));
    }
}
