//! Text normalization and frequency vectorization.
//!
//! Documents flow through a fixed sequence of steps: lowercase, strip
//! punctuation and digits, split into tokens, drop stopwords, lemmatize, then
//! vectorize the processed corpus into a bag-of-words or TF-IDF matrix. Every
//! step is pure; nothing is cached between runs.

pub mod error;
pub mod lemmatization;
pub mod normalization;
pub mod pipeline;
pub mod quality;
pub mod request;
pub mod stopwords;
pub mod tokenization;
pub mod types;
pub mod vectorizer;

pub use error::{Result, TextprepError};
pub use pipeline::{preprocess, Pipeline, PipelineConfig, Preprocessed};
pub use request::{run, PipelineRequest, PipelineResponse};
pub use types::{Language, TextStat};
pub use vectorizer::{tfidf, vectorize, TermMatrix, Vectorization};
