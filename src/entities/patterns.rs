//! Compiled extraction patterns.
//!
//! Each pattern is a deliberately loose heuristic. Alternation order and the
//! first-match rule are part of the observable behavior and must not be
//! tightened: callers pin the exact strings these produce.

use once_cell::sync::Lazy;
use regex::Regex;

/// Recognized skill terms, in match-priority order.
pub const SKILL_VOCABULARY: [&str; 12] = [
    "Python",
    "Java",
    "JavaScript",
    "C++",
    "HTML",
    "CSS",
    "Machine Learning",
    "Data Science",
    "Data Analyst",
    "Software Engineer",
    "Web Developer",
    "Deep Learning",
];

/// A run of Capitalized Words, or else a run of uppercase letters and
/// whitespace. Matches the first such phrase whether or not it is a name.
pub(crate) static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?: [A-Z][a-z]+)*|[A-Z\s]+)").expect("name pattern is valid")
});

/// Case-sensitive, word-bounded alternation over [`SKILL_VOCABULARY`].
///
/// `\b` after a term ending in a non-word character (`C++`) only holds when a
/// word character follows, so a bare "C++" before a space or comma is not
/// matched.
pub(crate) static SKILL_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = SKILL_VOCABULARY
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).expect("skill pattern is valid")
});

/// Local part, `@`, domain, then a TLD of two or more characters.
/// The TLD class `[A-Z|a-z]` also admits a literal `|`; extracted emails
/// depend on that, so it stays.
pub(crate) static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b")
        .expect("email pattern is valid")
});

/// Optional `+`, a digit, eight or more digits/spaces/hyphens, a digit.
/// Also swallows long ID numbers and adjacent numeric runs.
pub(crate) static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d -]{8,}\d").expect("phone pattern is valid"));
