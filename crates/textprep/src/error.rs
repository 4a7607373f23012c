use thiserror::Error;

pub type Result<T> = std::result::Result<T, TextprepError>;

#[derive(Error, Debug)]
pub enum TextprepError {
    /// A document is missing, null or not a string. `index` is the zero-based
    /// position of the offending document, `None` when the request as a whole
    /// is wrong.
    #[error("invalid input{}: {reason}", at_document(.index))]
    InvalidInput { index: Option<usize>, reason: String },

    /// Vectorizer method name not recognised.
    #[error("unknown vectorizer method: {0} (expected \"count\" or \"tfidf\")")]
    UnknownMethod(String),

    /// Malformed JSON request.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn at_document(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at document {i}"),
        None => String::new(),
    }
}
