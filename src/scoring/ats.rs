//! ATS keyword scoring.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{RoleLabel, SkillSet};

use super::requirements::{ensure_scorable, RequirementTable};

/// Score bands used to colour the score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Below 50
    Low,
    /// 50 up to 75
    Moderate,
    /// 75 and above
    Strong,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            ScoreBand::Strong
        } else if score >= 50.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Low
        }
    }
}

/// Outcome of scoring a skill set against a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsResult {
    /// Percentage of required keywords present, rounded to 2 decimals
    pub score: f64,
    /// Required keywords present in the skill set, in table order
    pub matched: Vec<String>,
    /// Required keywords absent from the skill set, in table order
    pub missing: Vec<String>,
}

impl AtsResult {
    /// Result for a role with no configured requirements.
    pub fn unscored() -> Self {
        Self {
            score: 0.0,
            matched: Vec::new(),
            missing: Vec::new(),
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Score `skills` against the required keywords for `role`.
///
/// A role missing from `table` scores 0 with nothing matched. A role whose
/// keyword list is empty is a [`crate::Error::Config`].
pub fn score(skills: &SkillSet, role: &RoleLabel, table: &RequirementTable) -> Result<AtsResult> {
    let Some(required) = table.get(role) else {
        log::debug!("No requirement list for role '{}'", role);
        return Ok(AtsResult::unscored());
    };
    ensure_scorable(role, required)?;

    let (matched, missing): (Vec<String>, Vec<String>) = required
        .iter()
        .cloned()
        .partition(|keyword| skills.contains(keyword));

    let ratio = matched.len() as f64 / required.len() as f64;
    let score = round2(100.0 * ratio);

    Ok(AtsResult {
        score,
        matched,
        missing,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
