use std::collections::HashSet;

use crate::types::Language;

/// English stop words list.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "am", "an", "and", "are", "as", "at", "be", "been", "being", "but", "by", "call", "can",
    "come", "could", "day", "did", "do", "does", "down", "each", "find", "first", "for", "from",
    "get", "go", "had", "has", "have", "he", "her", "him", "how", "i", "if", "in", "into", "is",
    "it", "its", "like", "made", "make", "many", "may", "might", "more", "must", "my", "no", "now",
    "of", "oil", "on", "out", "part", "said", "she", "should", "sit", "so", "some", "than",
    "that", "the", "their", "them", "then", "these", "they", "this", "time", "to", "two", "up",
    "was", "way", "were", "what", "which", "who", "will", "with", "would",
];

/// Turkish stop words list.
pub const TURKISH_STOP_WORDS: &[&str] = &[
    "acaba", "ama", "aslında", "az", "bazı", "belki", "biri", "birkaç", "birşey", "biz", "bu",
    "çok", "çünkü", "da", "daha", "de", "defa", "diye", "eğer", "en", "gibi", "hem", "hep",
    "hepsi", "her", "hiç", "için", "ile", "ise", "kez", "ki", "kim", "mı", "mu", "mü", "nasıl",
    "ne", "neden", "nerde", "nerede", "nereye", "niçin", "niye", "o", "sanki", "şey", "siz", "şu",
    "tüm", "ve", "veya", "ya", "yani",
];

/// The fixed list for a language. Empty for [`Language::Other`].
pub fn stop_words(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => ENGLISH_STOP_WORDS,
        Language::Turkish => TURKISH_STOP_WORDS,
        Language::Other => &[],
    }
}

/// Check if a word is a stop word in the given language.
pub fn is_stop_word(word: &str, language: Language) -> bool {
    stop_words(language).contains(&word)
}

/// Set lookup over one language's stop words, built once per pipeline.
#[derive(Clone, Debug, Default)]
pub struct StopWordFilter {
    words: HashSet<&'static str>,
}

impl StopWordFilter {
    pub fn for_language(language: Language) -> Self {
        Self {
            words: stop_words(language).iter().copied().collect(),
        }
    }

    /// A filter that removes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop stop words, keeping order. Returns the survivors and how many were removed.
    pub fn filter(&self, tokens: Vec<String>) -> (Vec<String>, usize) {
        let before = tokens.len();
        let kept: Vec<String> = tokens
            .into_iter()
            .filter(|t| !self.contains(t))
            .collect();
        let removed = before - kept.len();
        (kept, removed)
    }
}
