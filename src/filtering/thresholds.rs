//! Numeric gates of the page, paragraph and article filters.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Every tunable threshold of the cleaning pipeline.
///
/// Missing keys in a JSON thresholds file take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// minimum trimmed length of the raw markup, checked by the decoder.
    pub page_min_chars: usize,

    /// minimum trimmed paragraph length.
    pub paragraph_min_chars: usize,
    /// minimum number of word characters in a paragraph.
    pub paragraph_min_word_chars: usize,
    /// paragraphs under this CJK/word ratio need at least `paragraph_min_cjk` ideographs.
    pub paragraph_min_cjk_ratio: f64,
    pub paragraph_min_cjk: usize,
    /// maximum share of characters that are neither word, CJK nor whitespace.
    pub paragraph_max_noise_ratio: f64,

    /// minimum trimmed article length.
    pub article_min_chars: usize,
    pub article_min_cjk: usize,
    pub article_min_lines: usize,
    /// distinct/total word ratio, only checked above `article_unique_min_words` words.
    pub article_min_unique_ratio: f64,
    pub article_unique_min_words: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            page_min_chars: 200,
            paragraph_min_chars: 20,
            paragraph_min_word_chars: 10,
            paragraph_min_cjk_ratio: 0.3,
            paragraph_min_cjk: 5,
            paragraph_max_noise_ratio: 0.5,
            article_min_chars: 100,
            article_min_cjk: 20,
            article_min_lines: 3,
            article_min_unique_ratio: 0.5,
            article_unique_min_words: 100,
        }
    }
}

impl Thresholds {
    /// Load thresholds from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        let thresholds: Self = serde_json::from_reader(BufReader::new(f))?;
        debug!("loaded thresholds from {:?}: {:?}", path, thresholds);
        Ok(thresholds)
    }
}
