use unicode_segmentation::UnicodeSegmentation;

use crate::normalization::{normalize_text, words};

/// How normalized text is cut into tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Splitter {
    /// Split on whitespace only.
    #[default]
    Whitespace,
    /// Unicode word segmentation (UAX #29).
    Words,
}

impl Splitter {
    pub fn split(&self, normalized: &str) -> Vec<String> {
        match self {
            Splitter::Whitespace => split_whitespace(normalized),
            Splitter::Words => split_words(normalized),
        }
    }
}

/// Split on whitespace into non-empty tokens.
pub fn split_whitespace(text: &str) -> Vec<String> {
    words(text).map(str::to_string).collect()
}

/// Split on Unicode word boundaries. Ideographic runs come out one character per token.
pub fn split_words(text: &str) -> Vec<String> {
    text.unicode_words().map(str::to_string).collect()
}

/// Normalize then split on whitespace. Stopwords are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    split_whitespace(&normalize_text(text))
}
