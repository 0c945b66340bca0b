//! ATS scoring against role requirement tables.

mod ats;
mod requirements;

pub use ats::{score, AtsResult, ScoreBand};
pub use requirements::RequirementTable;
