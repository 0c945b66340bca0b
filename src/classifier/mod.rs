//! Supervised job-role classification.
//!
//! A [`RoleModel`] is a TF-IDF vectorizer feeding a multinomial naive Bayes
//! classifier. [`RoleClassifier`] wraps one model for a whole session: it is
//! trained once at startup from the embedded [`Corpus::reference`] and only
//! read afterwards. Models are rebuilt each run and never persisted.

mod corpus;
mod model;
mod naive_bayes;
mod options;
mod tfidf;

pub use corpus::{Corpus, LabeledExample};
pub use model::{RoleClassifier, RoleModel};
pub use naive_bayes::MultinomialNb;
pub use options::ClassifierOptions;
pub use tfidf::{SparseVector, TfidfVectorizer};

use crate::error::Result;
use crate::model::RoleLabel;

/// Train a model on `corpus` with default options.
pub fn train(corpus: &Corpus) -> Result<RoleModel> {
    RoleModel::train(corpus, &ClassifierOptions::default())
}

/// Predict the role for `text` with a trained model.
pub fn predict(model: &RoleModel, text: &str) -> RoleLabel {
    model.predict(text)
}
