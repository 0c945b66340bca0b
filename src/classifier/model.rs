//! Trained role models and the session classifier.

use once_cell::sync::OnceCell;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::model::RoleLabel;

use super::corpus::Corpus;
use super::naive_bayes::MultinomialNb;
use super::options::ClassifierOptions;
use super::tfidf::{SparseVector, TfidfVectorizer};

/// A TF-IDF vectorizer paired with a multinomial naive Bayes classifier.
///
/// Immutable once trained; prediction never refits anything and is safe to
/// call from several threads at once.
#[derive(Debug, Clone)]
pub struct RoleModel {
    vectorizer: TfidfVectorizer,
    classifier: MultinomialNb,
}

impl RoleModel {
    /// Train on every example in `corpus`.
    ///
    /// Fails with [`Error::TrainingData`] when the corpus is empty, carries
    /// fewer than two distinct labels, or yields no vocabulary.
    pub fn train(corpus: &Corpus, options: &ClassifierOptions) -> Result<Self> {
        options.validate()?;

        if corpus.is_empty() {
            return Err(Error::TrainingData("training corpus is empty".into()));
        }
        let labels = corpus.labels();
        if labels.len() < 2 {
            return Err(Error::TrainingData(format!(
                "need at least 2 distinct labels to train, found {}",
                labels.len()
            )));
        }

        let texts: Vec<&str> = corpus.iter().map(|e| e.text.as_str()).collect();
        let vectorizer = TfidfVectorizer::fit(&texts, options)?;

        let rows: Vec<SparseVector> = texts.iter().map(|t| vectorizer.transform(t)).collect();
        let targets: Vec<RoleLabel> = corpus.iter().map(|e| e.label.clone()).collect();
        let classifier =
            MultinomialNb::fit(&rows, &targets, vectorizer.vocabulary_len(), options)?;

        log::info!(
            "Trained role classifier on {} examples: {} labels, {} terms",
            corpus.len(),
            classifier.classes().len(),
            vectorizer.vocabulary_len()
        );

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Predict the role for a text.
    pub fn predict(&self, text: &str) -> RoleLabel {
        let row = self.vectorizer.transform(text);
        self.classifier.predict(&row).clone()
    }

    /// Joint log-likelihood for every label, in label order.
    pub fn predict_scores(&self, text: &str) -> Vec<(RoleLabel, f64)> {
        let row = self.vectorizer.transform(text);
        self.classifier
            .classes()
            .iter()
            .cloned()
            .zip(self.classifier.joint_log_likelihood(&row))
            .collect()
    }

    /// Labels this model can emit, sorted.
    pub fn labels(&self) -> &[RoleLabel] {
        self.classifier.classes()
    }

    /// Number of TF-IDF features.
    pub fn vocabulary_len(&self) -> usize {
        self.vectorizer.vocabulary_len()
    }

    /// Fraction of `corpus` examples whose label is predicted correctly.
    ///
    /// Returns `None` for an empty corpus.
    pub fn accuracy(&self, corpus: &Corpus) -> Option<f64> {
        if corpus.is_empty() {
            return None;
        }
        let correct = corpus
            .iter()
            .filter(|e| self.predict(&e.text) == e.label)
            .count();
        Some(correct as f64 / corpus.len() as f64)
    }
}

/// Session-wide classifier: trained once, then read-only.
///
/// Training is serialized behind a lock and happens at most once; calling
/// [`predict`](Self::predict) before training fails with
/// [`Error::ModelNotReady`].
#[derive(Debug, Default)]
pub struct RoleClassifier {
    options: ClassifierOptions,
    model: OnceCell<RoleModel>,
    training: Mutex<()>,
}

impl RoleClassifier {
    /// Create an untrained classifier with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an untrained classifier with custom options.
    pub fn with_options(options: ClassifierOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Train on `corpus` unless a model already exists.
    ///
    /// A second call returns the existing model without retraining.
    pub fn train(&self, corpus: &Corpus) -> Result<&RoleModel> {
        let _guard = self.training.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(model) = self.model.get() {
            log::debug!("Role classifier already trained, ignoring retrain request");
            return Ok(model);
        }

        let model = RoleModel::train(corpus, &self.options)?;
        Ok(self.model.get_or_init(|| model))
    }

    /// Check if a model has been trained.
    pub fn is_ready(&self) -> bool {
        self.model.get().is_some()
    }

    /// The trained model.
    pub fn model(&self) -> Result<&RoleModel> {
        self.model.get().ok_or(Error::ModelNotReady)
    }

    /// Predict the role for a text.
    pub fn predict(&self, text: &str) -> Result<RoleLabel> {
        Ok(self.model()?.predict(text))
    }
}
