//! Per-document preprocessing.
//!
//! Each document goes through normalize → split → stopword filter → lemmatize
//! on its own; the only shared state is the read-only configuration. The
//! vectorizer runs afterwards over the whole processed corpus.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::lemmatization::{LemmaModel, LemmaStrategy, Lemmatizer};
use crate::normalization::{normalize_with, raw_word_count};
use crate::stopwords::StopWordFilter;
use crate::tokenization::Splitter;
use crate::types::{Language, TextStat};

/// Which preprocessing steps run, and how.
///
/// The default is the plain variant: whitespace splitting and rule-based
/// lemmatization for English. [`PipelineConfig::full`] turns on the word
/// tokenizer and POS-aware dictionary lemmatization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Use the Unicode word tokenizer instead of a whitespace split.
    pub tokenize: bool,
    pub lowercase: bool,
    pub remove_stopwords: bool,
    pub lemmatize: bool,
    pub use_pos_tagging: bool,
    pub language: Language,
    pub lemma_strategy: LemmaStrategy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tokenize: false,
            lowercase: true,
            remove_stopwords: true,
            lemmatize: true,
            use_pos_tagging: false,
            language: Language::English,
            lemma_strategy: LemmaStrategy::RuleBased,
        }
    }
}

impl PipelineConfig {
    /// Every step on, with POS-aware dictionary lemmatization.
    pub fn full(language: Language) -> Self {
        Self {
            tokenize: true,
            lowercase: true,
            remove_stopwords: true,
            lemmatize: true,
            use_pos_tagging: true,
            language,
            lemma_strategy: LemmaStrategy::Dictionary,
        }
    }

    pub fn tokenize(mut self, enable: bool) -> Self {
        self.tokenize = enable;
        self
    }

    pub fn lowercase(mut self, enable: bool) -> Self {
        self.lowercase = enable;
        self
    }

    pub fn remove_stopwords(mut self, enable: bool) -> Self {
        self.remove_stopwords = enable;
        self
    }

    pub fn lemmatize(mut self, enable: bool) -> Self {
        self.lemmatize = enable;
        self
    }

    pub fn use_pos_tagging(mut self, enable: bool) -> Self {
        self.use_pos_tagging = enable;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn lemma_strategy(mut self, strategy: LemmaStrategy) -> Self {
        self.lemma_strategy = strategy;
        self
    }

    fn splitter(&self) -> Splitter {
        if self.tokenize {
            Splitter::Words
        } else {
            Splitter::Whitespace
        }
    }
}

/// Processed strings and per-document stats, index-aligned with the input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preprocessed {
    pub processed: Vec<String>,
    pub stats: Vec<TextStat>,
}

/// A configured preprocessing pipeline.
#[derive(Clone, Debug)]
pub struct Pipeline {
    config: PipelineConfig,
    splitter: Splitter,
    stop_words: StopWordFilter,
    lemmatizer: Option<Lemmatizer>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_model(config, None)
    }

    /// Build with an optional external lemma model. The model is only used
    /// when the config asks for [`LemmaStrategy::External`].
    pub fn with_model(config: PipelineConfig, model: Option<Arc<dyn LemmaModel>>) -> Self {
        let stop_words = if config.remove_stopwords {
            StopWordFilter::for_language(config.language)
        } else {
            StopWordFilter::empty()
        };
        let lemmatizer = config.lemmatize.then(|| {
            Lemmatizer::resolve(
                config.lemma_strategy,
                config.language,
                config.use_pos_tagging,
                model,
            )
        });
        Self {
            splitter: config.splitter(),
            config,
            stop_words,
            lemmatizer,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Strategy that will actually run, `None` when lemmatization is off.
    pub fn lemma_strategy(&self) -> Option<LemmaStrategy> {
        self.lemmatizer.as_ref().map(Lemmatizer::strategy)
    }

    /// Tokens of one document after every enabled step.
    pub fn tokens(&self, text: &str) -> (Vec<String>, TextStat) {
        let original_word_count = raw_word_count(text);
        let normalized = normalize_with(text, self.config.lowercase);
        let tokens = self.splitter.split(&normalized);
        let (tokens, stopwords_removed) = self.stop_words.filter(tokens);
        let tokens = match &self.lemmatizer {
            Some(lemmatizer) => lemmatizer.lemmatize_all(tokens),
            None => tokens,
        };
        let stat = TextStat {
            original_word_count,
            stopwords_removed,
            final_word_count: tokens.len(),
        };
        (tokens, stat)
    }

    /// Process one document into its space-joined form.
    pub fn process_document(&self, text: &str) -> (String, TextStat) {
        let (tokens, stat) = self.tokens(text);
        (tokens.join(" "), stat)
    }

    pub fn preprocess<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Preprocessed {
        tracing::debug!(
            documents = documents.len(),
            language = %self.config.language,
            lemma_strategy = ?self.lemma_strategy(),
            "preprocessing documents"
        );
        #[cfg(feature = "parallel")]
        let results: Vec<(String, TextStat)> = documents
            .par_iter()
            .map(|doc| self.process_document(doc.as_ref()))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let results: Vec<(String, TextStat)> = documents
            .iter()
            .map(|doc| self.process_document(doc.as_ref()))
            .collect();
        let (processed, stats) = results.into_iter().unzip();
        Preprocessed { processed, stats }
    }
}

/// Preprocess with the default steps for `language`.
pub fn preprocess<S: AsRef<str> + Sync>(documents: &[S], language: Language) -> Preprocessed {
    Pipeline::new(PipelineConfig::default().language(language)).preprocess(documents)
}
