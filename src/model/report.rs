//! The full analysis report handed to the presentation layer.

use serde::Serialize;

use crate::entities::Entities;
use crate::knowledge::{self, SkillResource};
use crate::scoring::{AtsResult, ScoreBand};

use super::{ContactInfo, RoleLabel, SkillSet};

/// Every output of one analysis, with "not found" sentinels resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeReport {
    /// Extracted plain text
    pub text: String,
    /// Candidate name or "Name not found"
    pub name: String,
    /// Email or "Email not found"
    pub email: String,
    /// Phone or "Phone not found"
    pub phone: String,
    pub skills: SkillSet,
    /// Predicted job role
    pub role: RoleLabel,
    pub ats: AtsResult,
    pub band: ScoreBand,
    /// Learning resources for skills covered by the knowledge base
    pub suggestions: Vec<SkillResource>,
}

impl ResumeReport {
    /// Assemble a report from the individual pipeline outputs.
    pub fn new(
        text: String,
        entities: Entities,
        contact: ContactInfo,
        role: RoleLabel,
        ats: AtsResult,
    ) -> Self {
        let suggestions = knowledge::suggestions(&entities.skills)
            .into_iter()
            .copied()
            .collect();
        Self {
            name: entities.name_or_sentinel().to_string(),
            email: contact.email_or_sentinel().to_string(),
            phone: contact.phone_or_sentinel().to_string(),
            band: ats.band(),
            skills: entities.skills,
            text,
            role,
            ats,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_resolves_sentinels() {
        let report = ResumeReport::new(
            "text".into(),
            Entities::default(),
            ContactInfo::default(),
            "Web Developer".into(),
            AtsResult::unscored(),
        );
        assert_eq!(report.name, "Name not found");
        assert_eq!(report.email, "Email not found");
        assert_eq!(report.phone, "Phone not found");
        assert!(report.suggestions.is_empty());
        assert_eq!(report.band, ScoreBand::Low);
    }

    #[test]
    fn test_report_collects_suggestions() {
        let entities = Entities {
            name: Some("Jane Smith".into()),
            skills: ["Java", "Spring"].into_iter().collect(),
        };
        let report = ResumeReport::new(
            String::new(),
            entities,
            ContactInfo::default(),
            "Java Developer".into(),
            AtsResult::unscored(),
        );
        assert_eq!(report.name, "Jane Smith");
        assert_eq!(report.suggestions.len(), 1);
        assert_eq!(report.suggestions[0].skill, "Java");
    }
}
