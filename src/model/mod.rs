//! Shared data types produced by the analysis pipeline.

mod contact;
mod report;
mod role;
mod skill_set;

pub use contact::{ContactInfo, EMAIL_NOT_FOUND, NAME_NOT_FOUND, PHONE_NOT_FOUND};
pub use report::ResumeReport;
pub use role::RoleLabel;
pub use skill_set::SkillSet;
