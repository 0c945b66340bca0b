//! Plain-text summary of an analysis report.

use std::fmt::Write;

use crate::model::ResumeReport;

/// Render a report as a plain-text summary.
///
/// The extracted text itself is included only when `include_text` is set.
pub fn to_text(report: &ResumeReport, include_text: bool) -> String {
    let mut out = String::new();

    if include_text {
        let _ = writeln!(out, "Extracted Text:");
        let _ = writeln!(out, "{}", report.text.trim_end());
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Name: {}", report.name);
    let _ = writeln!(out, "Email: {}", report.email);
    let _ = writeln!(out, "Phone: {}", report.phone);
    let _ = writeln!(out);
    let _ = writeln!(out, "Predicted Job Role: {}", report.role);
    let _ = writeln!(out, "ATS Score: {:.2}", report.ats.score);

    if !report.ats.matched.is_empty() {
        let _ = writeln!(
            out,
            "Matched Keywords for ATS Score: {}",
            report.ats.matched.join(", ")
        );
    }

    if !report.skills.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Skills:");
        for skill in report.skills.iter() {
            let _ = writeln!(out, "- {}", skill);
        }
    }

    if !report.suggestions.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Suggestions for Skill Improvement:");
        for resource in &report.suggestions {
            let _ = writeln!(out, "- {}: {}", resource.title, resource.url);
        }
    }

    out
}
