mod fixtures;

use fixtures::AI_CORPUS;
use textprep::lemmatization::LemmaStrategy;
use textprep::request::*;
use textprep::vectorizer::{Vectorization, VectorizerMethod};
use textprep::{Language, TextprepError};

fn corpus() -> Vec<String> {
    AI_CORPUS.iter().map(|s| s.to_string()).collect()
}

#[test]
fn run_default_request() {
    let response = run(&PipelineRequest::new(corpus())).unwrap();
    assert_eq!(response.processed.len(), AI_CORPUS.len());
    assert_eq!(response.stats.len(), AI_CORPUS.len());
    assert_eq!(response.lemma_strategy, Some(LemmaStrategy::RuleBased));
    let Vectorization::Count(matrix) = &response.vectorization else {
        panic!("expected count matrix");
    };
    assert_eq!(matrix.shape().0, AI_CORPUS.len());
    assert_eq!(matrix.vocabulary.len(), 20);
}

#[test]
fn run_reports_short_documents() {
    let request = PipelineRequest::new(vec![
        "Ethics matter!".to_string(),
        "Deep learning enables powerful AI applications.".to_string(),
    ]);
    let response = run(&request).unwrap();
    assert_eq!(response.warnings.len(), 1);
    assert_eq!(response.warnings[0].document, 0);
}

#[test]
fn run_rejects_empty_request() {
    let err = run(&PipelineRequest::default()).unwrap_err();
    assert!(matches!(err, TextprepError::InvalidInput { index: None, .. }));
}

#[test]
fn from_json_full_request() {
    let json = r#"{
        "documents": ["AI is changing the world.", "AI systems learn from data."],
        "pipeline": {"language": "english", "use_pos_tagging": true, "lemma_strategy": "dictionary"},
        "vectorizer": {"method": "tfidf", "max_features": 3},
        "min_words": 1
    }"#;
    let request = PipelineRequest::from_json(json).unwrap();
    assert_eq!(request.documents.len(), 2);
    assert_eq!(request.pipeline.language, Language::English);
    assert_eq!(request.vectorizer.method, VectorizerMethod::TfIdf);
    assert_eq!(request.min_words, 1);

    let response = run(&request).unwrap();
    assert_eq!(response.vectorization.method(), VectorizerMethod::TfIdf);
    assert_eq!(response.vectorization.shape(), (2, 3));
    assert!(response.warnings.is_empty());
}

#[test]
fn from_json_defaults() {
    let request = PipelineRequest::from_json(r#"{"documents": ["hello"]}"#).unwrap();
    assert_eq!(request.vectorizer.max_features, 20);
    assert_eq!(request.min_words, 3);
    assert_eq!(request.pipeline.language, Language::English);
}

#[test]
fn from_json_rejects_null_document() {
    let err = PipelineRequest::from_json(r#"{"documents": ["ok", null]}"#).unwrap_err();
    match &err {
        TextprepError::InvalidInput { index: Some(1), reason } => {
            assert!(reason.contains("document 1 is null"), "{}", reason)
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.to_string(),
        "invalid input at document 1: document 1 is null, expected a string"
    );
}

#[test]
fn from_json_rejects_non_string_document() {
    let err = PipelineRequest::from_json(r#"{"documents": ["a", "b", 42]}"#).unwrap_err();
    assert!(matches!(err, TextprepError::InvalidInput { index: Some(2), .. }));
}

#[test]
fn from_json_rejects_malformed_json() {
    let err = PipelineRequest::from_json("{not json").unwrap_err();
    assert!(matches!(err, TextprepError::Json(_)));
}

#[test]
fn parse_documents_json_array() {
    let docs = parse_documents_json(r#"["a", "b"]"#).unwrap();
    assert_eq!(docs, vec!["a", "b"]);
    let err = parse_documents_json(r#"{"a": 1}"#).unwrap_err();
    assert!(matches!(err, TextprepError::InvalidInput { index: None, .. }));
    assert_eq!(
        err.to_string(),
        "invalid input: documents must be an array, got an object"
    );
}

#[test]
fn unknown_language_is_not_an_error() {
    let request =
        PipelineRequest::from_json(r#"{"documents": ["the cat"], "pipeline": {"language": "xx"}}"#)
            .unwrap();
    assert_eq!(request.pipeline.language, Language::Other);
    let response = run(&request).unwrap();
    assert_eq!(response.stats[0].stopwords_removed, 0);
}

#[test]
fn response_survives_cbor() {
    let response = run(&PipelineRequest::new(corpus())).unwrap();
    let mut buf = Vec::new();
    ciborium::ser::into_writer(&response, &mut buf).unwrap();
    let decoded: PipelineResponse = ciborium::de::from_reader(buf.as_slice()).unwrap();
    assert_eq!(decoded, response);
}
