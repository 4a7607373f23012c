//! Bag-of-words and TF-IDF vectorization over processed documents.
//!
//! Both vectorizers share one vocabulary rule: the `max_features` most
//! frequent terms across the whole corpus, ordered by descending frequency,
//! ties broken by first appearance. Documents are split on whitespace
//! ([`crate::normalization::words`]).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::TextprepError;
use crate::normalization::words;

pub const DEFAULT_MAX_FEATURES: usize = 20;

/// Weighting applied to the term matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VectorizerMethod {
    #[default]
    Count,
    TfIdf,
}

impl FromStr for VectorizerMethod {
    type Err = TextprepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "count" | "bow" => Ok(VectorizerMethod::Count),
            "tfidf" | "tf-idf" => Ok(VectorizerMethod::TfIdf),
            other => Err(TextprepError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for VectorizerMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VectorizerMethod::Count => "count",
            VectorizerMethod::TfIdf => "tfidf",
        })
    }
}

/// Vectorizer settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    pub method: VectorizerMethod,
    pub max_features: usize,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            method: VectorizerMethod::Count,
            max_features: DEFAULT_MAX_FEATURES,
        }
    }
}

impl VectorizerConfig {
    pub fn apply<S: AsRef<str> + Sync>(&self, processed: &[S]) -> Vectorization {
        match self.method {
            VectorizerMethod::Count => Vectorization::Count(vectorize(processed, self.max_features)),
            VectorizerMethod::TfIdf => Vectorization::TfIdf(tfidf(processed, self.max_features)),
        }
    }
}

/// Document-by-term grid. `rows.len()` is the document count and every row
/// has `vocabulary.len()` cells.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TermMatrix<T> {
    pub vocabulary: Vec<String>,
    pub rows: Vec<Vec<T>>,
}

impl<T> TermMatrix<T> {
    /// (documents, terms)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.vocabulary.len())
    }

    pub fn row(&self, document: usize) -> Option<&[T]> {
        self.rows.get(document).map(Vec::as_slice)
    }

    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.iter().position(|t| t == term)
    }
}

impl<T: Copy> TermMatrix<T> {
    pub fn get(&self, document: usize, term: &str) -> Option<T> {
        let col = self.term_index(term)?;
        self.rows.get(document).and_then(|row| row.get(col)).copied()
    }
}

impl<T: Copy + Into<f64>> TermMatrix<T> {
    /// Sum of each column across all documents.
    pub fn column_totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.vocabulary.len()];
        for row in &self.rows {
            for (total, &cell) in totals.iter_mut().zip(row) {
                *total += cell.into();
            }
        }
        totals
    }

    /// The `n` terms with the highest column totals, highest first.
    /// Equal totals keep vocabulary order.
    pub fn top_terms(&self, n: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .vocabulary
            .iter()
            .cloned()
            .zip(self.column_totals())
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Output of either vectorizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum Vectorization {
    Count(TermMatrix<u32>),
    TfIdf(TermMatrix<f64>),
}

impl Vectorization {
    pub fn method(&self) -> VectorizerMethod {
        match self {
            Vectorization::Count(_) => VectorizerMethod::Count,
            Vectorization::TfIdf(_) => VectorizerMethod::TfIdf,
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        match self {
            Vectorization::Count(m) => &m.vocabulary,
            Vectorization::TfIdf(m) => &m.vocabulary,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        match self {
            Vectorization::Count(m) => m.shape(),
            Vectorization::TfIdf(m) => m.shape(),
        }
    }

    pub fn top_terms(&self, n: usize) -> Vec<(String, f64)> {
        match self {
            Vectorization::Count(m) => m.top_terms(n),
            Vectorization::TfIdf(m) => m.top_terms(n),
        }
    }
}

/// Global term counts in first-seen order.
pub fn term_frequencies<S: AsRef<str>>(documents: &[S]) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for doc in documents {
        for term in words(doc.as_ref()) {
            match index.get(term) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(term, counts.len());
                    counts.push((term.to_string(), 1));
                }
            }
        }
    }
    counts
}

/// The `max_features` most frequent terms. Fewer when the corpus has fewer distinct terms.
pub fn select_vocabulary<S: AsRef<str>>(documents: &[S], max_features: usize) -> Vec<String> {
    let mut counts = term_frequencies(documents);
    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(max_features);
    counts.into_iter().map(|(term, _)| term).collect()
}

fn vocabulary_index(vocabulary: &[String]) -> HashMap<&str, usize> {
    vocabulary
        .iter()
        .enumerate()
        .map(|(i, term)| (term.as_str(), i))
        .collect()
}

/// Raw counts of each vocabulary term within one document.
pub fn count_row(document: &str, index: &HashMap<&str, usize>) -> Vec<u32> {
    let mut row = vec![0u32; index.len()];
    for term in words(document) {
        if let Some(&col) = index.get(term) {
            row[col] += 1;
        }
    }
    row
}

fn count_rows<S: AsRef<str> + Sync>(documents: &[S], vocabulary: &[String]) -> Vec<Vec<u32>> {
    let index = vocabulary_index(vocabulary);
    #[cfg(feature = "parallel")]
    let rows = documents
        .par_iter()
        .map(|doc| count_row(doc.as_ref(), &index))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let rows = documents
        .iter()
        .map(|doc| count_row(doc.as_ref(), &index))
        .collect();
    rows
}

/// Bag-of-words matrix over the top `max_features` terms.
pub fn vectorize<S: AsRef<str> + Sync>(processed: &[S], max_features: usize) -> TermMatrix<u32> {
    let vocabulary = select_vocabulary(processed, max_features);
    let rows = count_rows(processed, &vocabulary);
    tracing::debug!(
        documents = rows.len(),
        terms = vocabulary.len(),
        "built count matrix"
    );
    TermMatrix { vocabulary, rows }
}

/// Smooth inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
pub fn smooth_idf(documents: usize, document_frequency: usize) -> f64 {
    ((1.0 + documents as f64) / (1.0 + document_frequency as f64)).ln() + 1.0
}

/// TF-IDF matrix over the same vocabulary as [`vectorize`]. Rows are
/// L2-normalized; a row with no vocabulary terms stays all zero.
pub fn tfidf<S: AsRef<str> + Sync>(processed: &[S], max_features: usize) -> TermMatrix<f64> {
    let counts = vectorize(processed, max_features);
    let n = counts.rows.len();
    let idf: Vec<f64> = (0..counts.vocabulary.len())
        .map(|col| {
            let df = counts.rows.iter().filter(|row| row[col] > 0).count();
            smooth_idf(n, df)
        })
        .collect();

    let rows = counts
        .rows
        .iter()
        .map(|row| {
            let mut weights: Vec<f64> = row
                .iter()
                .zip(&idf)
                .map(|(&count, &idf)| count as f64 * idf)
                .collect();
            let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for w in &mut weights {
                    *w /= norm;
                }
            }
            weights
        })
        .collect();

    TermMatrix {
        vocabulary: counts.vocabulary,
        rows,
    }
}
