//! Deduplicated skill sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of recognized skill terms.
///
/// Backed by a `BTreeSet` so iteration order is stable (lexicographic)
/// regardless of where the skills appeared in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// Create an empty skill set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a skill. Returns false if it was already present.
    pub fn insert(&mut self, skill: impl Into<String>) -> bool {
        self.0.insert(skill.into())
    }

    /// Check membership by exact string equality.
    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(skill)
    }

    /// Number of distinct skills.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no skills were found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate skills in stable order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Collect into a vector, in stable order.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
