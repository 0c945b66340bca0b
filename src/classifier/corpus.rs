//! Labeled training corpora.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::RoleLabel;

/// A résumé text with its role label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledExample {
    pub text: String,
    pub label: RoleLabel,
}

impl LabeledExample {
    pub fn new(text: impl Into<String>, label: impl Into<RoleLabel>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// An ordered collection of labeled examples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    examples: Vec<LabeledExample>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// The embedded corpus the session classifier is trained on.
    ///
    /// One example per role; every example is used for training.
    pub fn reference() -> Self {
        let mut corpus = Self::new();
        corpus.push(
            "Experienced in Python and data analysis. Looking for a Data Scientist role. \
             Contact: john.doe@example.com, Phone: 123-456-7890",
            "Data Scientist",
        );
        corpus.push(
            "Skilled in Java and software development. Seeking a Java Developer position. \
             Email: jane.smith@example.com, Phone: +1-987-654-3210",
            "Java Developer",
        );
        corpus.push(
            "Proficient in HTML, CSS, and JavaScript. Available for Web Developer jobs. \
             You can reach me at contact@webdev.com.",
            "Web Developer",
        );
        corpus
    }

    /// Append an example.
    pub fn push(&mut self, text: impl Into<String>, label: impl Into<RoleLabel>) {
        self.examples.push(LabeledExample::new(text, label));
    }

    /// Builder-style append.
    pub fn with_example(mut self, text: impl Into<String>, label: impl Into<RoleLabel>) -> Self {
        self.push(text, label);
        self
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn examples(&self) -> &[LabeledExample] {
        &self.examples
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabeledExample> {
        self.examples.iter()
    }

    /// Distinct labels, sorted.
    pub fn labels(&self) -> BTreeSet<RoleLabel> {
        self.examples.iter().map(|e| e.label.clone()).collect()
    }
}

impl FromIterator<LabeledExample> for Corpus {
    fn from_iter<I: IntoIterator<Item = LabeledExample>>(iter: I) -> Self {
        Self {
            examples: iter.into_iter().collect(),
        }
    }
}
