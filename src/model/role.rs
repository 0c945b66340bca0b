//! Job-role labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A job-role category known to the classifier.
///
/// The label set is closed per trained model: a model only ever emits
/// labels it saw during training.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleLabel(String);

impl RoleLabel {
    /// Create a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoleLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for RoleLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for RoleLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_label_display() {
        let role = RoleLabel::from("Java Developer");
        assert_eq!(role.to_string(), "Java Developer");
        assert_eq!(role.as_str(), "Java Developer");
    }

    #[test]
    fn test_role_label_serializes_as_string() {
        let role = RoleLabel::new("Web Developer");
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"Web Developer\"");
    }
}
