//! Request/response data for front ends.
//!
//! A front end builds a [`PipelineRequest`] (or parses one from JSON), hands
//! it to [`run`] and renders the returned [`PipelineResponse`]. Nothing is
//! kept between calls, so independent requests can run concurrently.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::error::{Result, TextprepError};
use crate::lemmatization::{LemmaModel, LemmaStrategy};
use crate::pipeline::{Pipeline, PipelineConfig};
use crate::quality::{check_text_quality, QualityWarning, DEFAULT_MIN_WORDS};
use crate::types::TextStat;
use crate::vectorizer::{Vectorization, VectorizerConfig};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineRequest {
    pub documents: Vec<String>,
    pub pipeline: PipelineConfig,
    pub vectorizer: VectorizerConfig,
    /// Documents with fewer final words than this get a warning.
    pub min_words: usize,
}

impl Default for PipelineRequest {
    fn default() -> Self {
        Self {
            documents: Vec::new(),
            pipeline: PipelineConfig::default(),
            vectorizer: VectorizerConfig::default(),
            min_words: DEFAULT_MIN_WORDS,
        }
    }
}

impl PipelineRequest {
    pub fn new(documents: Vec<String>) -> Self {
        Self {
            documents,
            ..Self::default()
        }
    }

    /// Parse a JSON request object. Every entry of `documents` must be a string.
    pub fn from_json(input: &str) -> Result<Self> {
        let mut value: Value = serde_json::from_str(input)?;
        let documents = match value.as_object_mut().and_then(|o| o.remove("documents")) {
            Some(documents) => documents_from_value(documents)?,
            None => Vec::new(),
        };
        let mut request: PipelineRequest = serde_json::from_value(value)?;
        request.documents = documents;
        Ok(request)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PipelineResponse {
    pub processed: Vec<String>,
    pub stats: Vec<TextStat>,
    pub vectorization: Vectorization,
    pub warnings: Vec<QualityWarning>,
    /// Strategy that ran after fallback, `None` when lemmatization was off.
    pub lemma_strategy: Option<LemmaStrategy>,
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn documents_from_value(value: Value) -> Result<Vec<String>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(TextprepError::InvalidInput {
                index: None,
                reason: format!("documents must be an array, got {}", kind_of(&other)),
            })
        }
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s),
            other => Err(TextprepError::InvalidInput {
                index: Some(index),
                reason: format!("document {index} is {}, expected a string", kind_of(&other)),
            }),
        })
        .collect()
}

/// Parse a JSON array of documents.
pub fn parse_documents_json(input: &str) -> Result<Vec<String>> {
    documents_from_value(serde_json::from_str(input)?)
}

/// Preprocess, vectorize and quality-check one request.
pub fn run(request: &PipelineRequest) -> Result<PipelineResponse> {
    run_with_model(request, None)
}

/// [`run`] with an external lemma model available to the pipeline.
pub fn run_with_model(
    request: &PipelineRequest,
    model: Option<Arc<dyn LemmaModel>>,
) -> Result<PipelineResponse> {
    if request.documents.is_empty() {
        return Err(TextprepError::InvalidInput {
            index: None,
            reason: "request contains no documents".to_string(),
        });
    }
    let pipeline = Pipeline::with_model(request.pipeline.clone(), model);
    let preprocessed = pipeline.preprocess(&request.documents);
    let vectorization = request.vectorizer.apply(&preprocessed.processed);
    let warnings = check_text_quality(&preprocessed.stats, request.min_words);
    tracing::debug!(
        documents = request.documents.len(),
        method = %request.vectorizer.method,
        terms = vectorization.vocabulary().len(),
        warnings = warnings.len(),
        "request processed"
    );
    Ok(PipelineResponse {
        processed: preprocessed.processed,
        stats: preprocessed.stats,
        vectorization,
        warnings,
        lemma_strategy: pipeline.lemma_strategy(),
    })
}
