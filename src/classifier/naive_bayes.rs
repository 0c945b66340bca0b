//! Multinomial naive Bayes over TF-IDF features.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::model::RoleLabel;

use super::options::ClassifierOptions;
use super::tfidf::SparseVector;

/// A fitted multinomial naive Bayes classifier.
///
/// Classes are stored in sorted order; ties in the joint log-likelihood go
/// to the first class in that order.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    classes: Vec<RoleLabel>,
    class_log_prior: Vec<f64>,
    /// `feature_log_prob[class][feature]`
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNb {
    /// Fit on feature rows and their labels.
    pub fn fit(
        rows: &[SparseVector],
        labels: &[RoleLabel],
        n_features: usize,
        options: &ClassifierOptions,
    ) -> Result<Self> {
        if rows.len() != labels.len() {
            return Err(Error::TrainingData(format!(
                "{} feature rows but {} labels",
                rows.len(),
                labels.len()
            )));
        }

        let mut class_index: BTreeMap<&RoleLabel, usize> = BTreeMap::new();
        for label in labels {
            class_index.entry(label).or_insert(0);
        }
        if class_index.len() < 2 {
            return Err(Error::TrainingData(format!(
                "need at least 2 distinct labels to train, found {}",
                class_index.len()
            )));
        }
        for (index, slot) in class_index.values_mut().enumerate() {
            *slot = index;
        }
        let classes: Vec<RoleLabel> = class_index.keys().map(|l| (*l).clone()).collect();
        let n_classes = classes.len();

        let mut class_count = vec![0.0f64; n_classes];
        let mut feature_count = vec![vec![0.0f64; n_features]; n_classes];
        for (row, label) in rows.iter().zip(labels) {
            let c = class_index[label];
            class_count[c] += 1.0;
            for &(feature, value) in row {
                feature_count[c][feature] += value;
            }
        }

        let class_log_prior = if options.fit_prior {
            let total: f64 = class_count.iter().sum();
            class_count.iter().map(|n| (n / total).ln()).collect()
        } else {
            vec![-(n_classes as f64).ln(); n_classes]
        };

        let alpha = options.alpha;
        let feature_log_prob = feature_count
            .into_iter()
            .map(|counts| {
                let denominator = (counts.iter().sum::<f64>() + alpha * n_features as f64).ln();
                counts
                    .into_iter()
                    .map(|count| (count + alpha).ln() - denominator)
                    .collect()
            })
            .collect();

        Ok(Self {
            classes,
            class_log_prior,
            feature_log_prob,
        })
    }

    /// Trained classes, sorted.
    pub fn classes(&self) -> &[RoleLabel] {
        &self.classes
    }

    /// Unnormalized log posterior for each class, in [`classes`](Self::classes) order.
    pub fn joint_log_likelihood(&self, row: &SparseVector) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_prob)| {
                prior
                    + row
                        .iter()
                        .map(|&(feature, value)| value * log_prob[feature])
                        .sum::<f64>()
            })
            .collect()
    }

    /// Most likely class for a feature row.
    pub fn predict(&self, row: &SparseVector) -> &RoleLabel {
        let scores = self.joint_log_likelihood(row);
        let mut best = 0;
        for (index, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = index;
            }
        }
        &self.classes[best]
    }
}
