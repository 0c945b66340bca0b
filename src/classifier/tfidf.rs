//! TF-IDF text vectorizer.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};

use super::options::ClassifierOptions;

/// Sparse feature vector: `(feature index, value)` pairs sorted by index.
pub type SparseVector = Vec<(usize, f64)>;

/// Tokens of two or more word characters.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Maps text to L2-normalized TF-IDF vectors over a learned vocabulary.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Term → feature index; indices follow lexicographic term order.
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
    lowercase: bool,
    sublinear_tf: bool,
}

impl TfidfVectorizer {
    /// Learn the vocabulary and IDF weights from `documents`.
    pub fn fit<S: AsRef<str>>(documents: &[S], options: &ClassifierOptions) -> Result<Self> {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let mut terms = tokenize(doc.as_ref(), options.lowercase);
            terms.sort_unstable();
            terms.dedup();
            for term in terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(Error::TrainingData(
                "empty vocabulary: training texts contain no tokens".into(),
            ));
        }

        let n_docs = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (index, (term, df)) in document_frequency.into_iter().enumerate() {
            let df = df as f64;
            let weight = if options.smooth_idf {
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            } else {
                (n_docs / df).ln() + 1.0
            };
            idf.push(weight);
            vocabulary.insert(term, index);
        }

        Ok(Self {
            vocabulary,
            idf,
            lowercase: options.lowercase,
            sublinear_tf: options.sublinear_tf,
        })
    }

    /// Vectorize a text. Terms outside the vocabulary are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in tokenize(text, self.lowercase) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(index, count)| {
                let tf = if self.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                (index, tf * self.idf[index])
            })
            .collect();
        vector.sort_unstable_by_key(|&(index, _)| index);

        let norm = vector.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, value) in vector.iter_mut() {
                *value /= norm;
            }
        }
        vector
    }

    /// Number of features.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature index of a term, if known.
    pub fn feature_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of a term, if known.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.feature_index(term).map(|index| self.idf[index])
    }
}

fn tokenize(text: &str, lowercase: bool) -> Vec<String> {
    if lowercase {
        let lowered = text.to_lowercase();
        TOKEN_RE
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    } else {
        TOKEN_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
