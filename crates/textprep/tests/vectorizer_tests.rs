use textprep::vectorizer::*;

#[test]
fn vectorize_two_documents() {
    let matrix = vectorize(&["ai chang world", "ai learn data"], 3);
    assert_eq!(matrix.vocabulary, vec!["ai", "chang", "world"]);
    assert_eq!(matrix.rows, vec![vec![1, 1, 1], vec![1, 0, 0]]);
}

#[test]
fn vocabulary_orders_by_frequency_then_first_seen() {
    let docs = ["b a c", "c c a", "d"];
    // c=3, a=2, b=1 (seen before d), d=1
    assert_eq!(select_vocabulary(&docs, 10), vec!["c", "a", "b", "d"]);
    assert_eq!(select_vocabulary(&docs, 3), vec!["c", "a", "b"]);
}

#[test]
fn vocabulary_smaller_than_max_features() {
    let matrix = vectorize(&["one two", "two"], 20);
    assert_eq!(matrix.vocabulary, vec!["two", "one"]);
    assert_eq!(matrix.shape(), (2, 2));
}

#[test]
fn zero_max_features_gives_zero_width_rows() {
    let matrix = vectorize(&["a b", "c"], 0);
    assert!(matrix.vocabulary.is_empty());
    assert_eq!(matrix.rows, vec![Vec::<u32>::new(), Vec::new()]);
}

#[test]
fn counts_are_per_document() {
    let matrix = vectorize(&["ai ai ai data", "data"], 2);
    assert_eq!(matrix.vocabulary, vec!["ai", "data"]);
    assert_eq!(matrix.get(0, "ai"), Some(3));
    assert_eq!(matrix.get(1, "ai"), Some(0));
    assert_eq!(matrix.get(1, "data"), Some(1));
    assert_eq!(matrix.get(1, "missing"), None);
}

#[test]
fn empty_documents_still_get_rows() {
    let matrix = vectorize(&["", "ai", ""], 5);
    assert_eq!(matrix.shape(), (3, 1));
    assert_eq!(matrix.row(0), Some(&[0u32][..]));
}

#[test]
fn empty_corpus() {
    let docs: [&str; 0] = [];
    let matrix = vectorize(&docs, 5);
    assert_eq!(matrix.shape(), (0, 0));
}

#[test]
fn term_frequencies_first_seen_order() {
    let freqs = term_frequencies(&["x y", "y z"]);
    assert_eq!(
        freqs,
        vec![
            ("x".to_string(), 1),
            ("y".to_string(), 2),
            ("z".to_string(), 1)
        ]
    );
}

#[test]
fn tfidf_rows_are_unit_length() {
    let matrix = tfidf(&["ai chang world", "ai learn data", "data data"], 5);
    for row in &matrix.rows {
        let norm: f64 = row.iter().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12, "norm was {}", norm);
    }
}

#[test]
fn tfidf_shares_vocabulary_with_counts() {
    let docs = ["ai chang world", "ai learn data"];
    assert_eq!(tfidf(&docs, 3).vocabulary, vectorize(&docs, 3).vocabulary);
}

#[test]
fn tfidf_weighs_rare_terms_higher() {
    let matrix = tfidf(&["ai chang world", "ai learn data"], 3);
    let row = matrix.row(0).unwrap();
    // ai appears everywhere, chang only here.
    assert!(row[1] > row[0]);
    assert_eq!(matrix.row(1).unwrap(), &[1.0, 0.0, 0.0]);
}

#[test]
fn tfidf_zero_row_stays_zero() {
    let matrix = tfidf(&["ai", ""], 5);
    assert_eq!(matrix.row(1).unwrap(), &[0.0]);
}

#[test]
fn smooth_idf_baseline() {
    assert_eq!(smooth_idf(4, 4), 1.0);
    assert!(smooth_idf(4, 1) > 1.0);
}

#[test]
fn column_totals_and_top_terms() {
    let matrix = vectorize(&["a b b", "b c", "c"], 3);
    assert_eq!(matrix.vocabulary, vec!["b", "c", "a"]);
    assert_eq!(matrix.column_totals(), vec![3.0, 2.0, 1.0]);
    let top = matrix.top_terms(2);
    assert_eq!(top, vec![("b".to_string(), 3.0), ("c".to_string(), 2.0)]);
}

#[test]
fn method_parses_known_names() {
    assert_eq!("count".parse::<VectorizerMethod>().unwrap(), VectorizerMethod::Count);
    assert_eq!("TF-IDF".parse::<VectorizerMethod>().unwrap(), VectorizerMethod::TfIdf);
    assert!("word2vec".parse::<VectorizerMethod>().is_err());
}

#[test]
fn config_apply_picks_method() {
    let docs = ["ai data", "ai"];
    let config = VectorizerConfig {
        method: VectorizerMethod::TfIdf,
        max_features: 1,
    };
    let result = config.apply(&docs);
    assert_eq!(result.method(), VectorizerMethod::TfIdf);
    assert_eq!(result.vocabulary(), &["ai".to_string()]);
    assert_eq!(result.shape(), (2, 1));
}

#[test]
fn vectorization_serializes_with_method_tag() {
    let result = VectorizerConfig::default().apply(&["ai"]);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["method"], "count");
    assert_eq!(json["vocabulary"][0], "ai");
}
