//! Character classes used by the quality gates.
use unic_ucd::GeneralCategory;

/// CJK unified ideographs block.
const CJK_START: char = '\u{4e00}';
const CJK_END: char = '\u{9fff}';

#[inline]
pub fn is_cjk(c: char) -> bool {
    (CJK_START..=CJK_END).contains(&c)
}

/// Letters, marks, decimal digits and connector punctuation.
///
/// Other numbers (`①`, `²`, roman numerals) are not word characters.
///
/// CJK ideographs are letters, so they are word characters too.
#[inline]
pub fn is_word(c: char) -> bool {
    let gc = GeneralCategory::of(c);
    gc.is_letter() || gc.is_mark()
        || gc == GeneralCategory::DecimalNumber
        || gc == GeneralCategory::ConnectorPunctuation
}

/// Counts of character classes in a piece of text, computed in a single pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CharProfile {
    /// total number of chars
    pub chars: usize,
    /// CJK ideographs
    pub cjk: usize,
    /// word characters, CJK included
    pub word: usize,
    /// neither word, CJK nor whitespace
    pub noise: usize,
}

impl CharProfile {
    pub fn of(text: &str) -> Self {
        let mut profile = Self::default();
        for c in text.chars() {
            profile.chars += 1;
            let cjk = is_cjk(c);
            if cjk {
                profile.cjk += 1;
            }
            if cjk || is_word(c) {
                profile.word += 1;
            } else if !c.is_whitespace() {
                profile.noise += 1;
            }
        }
        profile
    }

    /// CJK share of word characters. `0.0` when there are no word characters.
    pub fn cjk_ratio(&self) -> f64 {
        if self.word == 0 {
            return 0.0;
        }
        self.cjk as f64 / self.word as f64
    }

    /// Noise share of all characters. `0.0` on empty text.
    pub fn noise_ratio(&self) -> f64 {
        if self.chars == 0 {
            return 0.0;
        }
        self.noise as f64 / self.chars as f64
    }
}

/// Number of CJK ideographs in `text`.
pub fn count_cjk(text: &str) -> usize {
    text.chars().filter(|c| is_cjk(*c)).count()
}
