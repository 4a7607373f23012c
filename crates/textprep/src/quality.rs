use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::TextStat;

pub const DEFAULT_MIN_WORDS: usize = 3;

/// A document left with too few words after preprocessing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityWarning {
    /// Zero-based position in the input.
    pub document: usize,
    pub final_word_count: usize,
    pub min_words: usize,
}

impl fmt::Display for QualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "document {} has only {} meaningful word(s) left (minimum {})",
            self.document + 1,
            self.final_word_count,
            self.min_words
        )
    }
}

/// Flag every document whose `final_word_count` is below `min_words`.
pub fn check_text_quality(stats: &[TextStat], min_words: usize) -> Vec<QualityWarning> {
    stats
        .iter()
        .enumerate()
        .filter(|(_, s)| s.final_word_count < min_words)
        .map(|(document, s)| QualityWarning {
            document,
            final_word_count: s.final_word_count,
            min_words,
        })
        .collect()
}
