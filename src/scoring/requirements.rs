//! Required-keyword tables per role.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::model::RoleLabel;

/// Role → required keywords.
///
/// Keyword order is kept for presentation (matched and missing lists follow
/// it) but does not affect the score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementTable {
    roles: BTreeMap<RoleLabel, Vec<String>>,
}

impl RequirementTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table for the reference role set.
    pub fn reference() -> Self {
        Self::new()
            .with_role(
                "Data Scientist",
                ["Python", "Data Analysis", "Machine Learning", "Statistics"],
            )
            .with_role(
                "Java Developer",
                ["Java", "Spring", "Hibernate", "Software Development"],
            )
            .with_role(
                "Web Developer",
                ["HTML", "CSS", "JavaScript", "React", "Web Development"],
            )
    }

    /// Set the keywords for a role, replacing any previous entry.
    pub fn insert<I, S>(&mut self, role: impl Into<RoleLabel>, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles
            .insert(role.into(), keywords.into_iter().map(Into::into).collect());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_role<I, S>(mut self, role: impl Into<RoleLabel>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(role, keywords);
        self
    }

    /// Required keywords for a role, if configured.
    pub fn get(&self, role: &RoleLabel) -> Option<&[String]> {
        self.roles.get(role).map(Vec::as_slice)
    }

    /// Iterate roles and their keywords, sorted by role.
    pub fn iter(&self) -> impl Iterator<Item = (&RoleLabel, &[String])> {
        self.roles.iter().map(|(role, kw)| (role, kw.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Reject entries that cannot be scored.
    pub fn validate(&self) -> Result<()> {
        for (role, keywords) in &self.roles {
            ensure_scorable(role, keywords)?;
        }
        Ok(())
    }
}

pub(crate) fn ensure_scorable(role: &RoleLabel, keywords: &[String]) -> Result<()> {
    if keywords.is_empty() {
        return Err(Error::Config(format!(
            "role '{}' has an empty required-keyword list",
            role
        )));
    }
    Ok(())
}
