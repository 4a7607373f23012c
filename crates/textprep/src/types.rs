use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Language selector for stopword lists and lemmatization.
///
/// Unrecognised names map to [`Language::Other`], which has an empty stopword
/// list. That is a supported configuration, not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    English,
    Turkish,
    Other,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Turkish => "turkish",
            Language::Other => "other",
        }
    }
}

impl FromStr for Language {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "english" | "en" => Language::English,
            "turkish" | "tr" => Language::Turkish,
            _ => Language::Other,
        })
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(language) => language,
            Err(never) => match never {},
        }
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Language::from(s.as_str())
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.as_str().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-document counts recorded while preprocessing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStat {
    /// Whitespace-separated words in the raw document.
    pub original_word_count: usize,
    pub stopwords_removed: usize,
    /// Tokens left after lemmatization.
    pub final_word_count: usize,
}
