use textprep::tokenization::*;

#[test]
fn tokenize_splits_words() {
    assert_eq!(tokenize("hello world"), vec!["hello", "world"]);
}

#[test]
fn tokenize_lowercases_and_strips() {
    assert_eq!(tokenize("Hello, WORLD!"), vec!["hello", "world"]);
}

#[test]
fn tokenize_keeps_stop_words() {
    assert_eq!(tokenize("the quick fox"), vec!["the", "quick", "fox"]);
}

#[test]
fn tokenize_drops_numbers() {
    assert_eq!(tokenize("top 10 models"), vec!["top", "models"]);
}

#[test]
fn tokenize_empty_string() {
    assert!(tokenize("").is_empty());
}

#[test]
fn tokenize_only_punctuation() {
    assert!(tokenize("?!... --").is_empty());
}

#[test]
fn split_whitespace_skips_runs() {
    assert_eq!(split_whitespace("  a \t b  "), vec!["a", "b"]);
}

#[test]
fn word_splitter_matches_whitespace_on_clean_ascii() {
    let text = "ai is changing the world";
    assert_eq!(split_words(text), split_whitespace(text));
}

#[test]
fn word_splitter_separates_ideographs() {
    let tokens = Splitter::Words.split("\u{4F60}\u{597D}");
    assert_eq!(tokens.len(), 2);
    let tokens = Splitter::Whitespace.split("\u{4F60}\u{597D}");
    assert_eq!(tokens.len(), 1);
}
