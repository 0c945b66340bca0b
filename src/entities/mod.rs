//! Rule-based entity extraction.
//!
//! Every function here is a pure function of the input text. Patterns are
//! heuristics, not language understanding:
//!
//! - the name is simply the first capitalized phrase (or uppercase run) in
//!   the text, which is often a heading such as "Curriculum Vitae", and text
//!   that opens with a lowercase word yields the following whitespace;
//! - the phone pattern absorbs any long run of digits, spaces and hyphens.
//!
//! "Not found" is a normal outcome and is reported as `None`.

mod patterns;

pub use patterns::SKILL_VOCABULARY;

use serde::{Deserialize, Serialize};

use crate::model::{ContactInfo, SkillSet, NAME_NOT_FOUND};
use patterns::{EMAIL_RE, NAME_RE, PHONE_RE, SKILL_RE};

/// Candidate name and recognized skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    pub name: Option<String>,
    pub skills: SkillSet,
}

impl Entities {
    /// Candidate name, or the "Name not found" sentinel.
    pub fn name_or_sentinel(&self) -> &str {
        self.name.as_deref().unwrap_or(NAME_NOT_FOUND)
    }
}

/// Extract the candidate name and skill set.
pub fn extract_entities(text: &str) -> Entities {
    Entities {
        name: extract_name(text),
        skills: extract_skills(text),
    }
}

/// Extract the first email address and phone number.
pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        email: extract_email(text),
        phone: extract_phone(text),
    }
}

/// First capitalized phrase or uppercase run, scanning left to right.
pub fn extract_name(text: &str) -> Option<String> {
    NAME_RE.find(text).map(|m| m.as_str().to_string())
}

/// Every vocabulary term that occurs in the text, deduplicated.
pub fn extract_skills(text: &str) -> SkillSet {
    SKILL_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Leftmost email-like substring.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Leftmost phone-like substring.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAVA_RESUME: &str = "Skilled in Java and software development. Seeking a Java \
        Developer position. Email: jane.smith@example.com, Phone: +1-987-654-3210";

    #[test]
    fn test_name_capitalized_words() {
        let text = "John Doe\nPython developer";
        assert_eq!(extract_name(text).as_deref(), Some("John Doe"));
    }

    #[test]
    fn test_name_whitespace_after_lowercase_word() {
        // The uppercase-run alternative also accepts bare whitespace.
        assert_eq!(extract_name("hello world").as_deref(), Some(" "));
    }

    #[test]
    fn test_name_uppercase_run() {
        assert_eq!(
            extract_name("JOHN DOE, engineer").as_deref(),
            Some("JOHN DOE")
        );
    }

    #[test]
    fn test_name_first_phrase_wins_even_if_not_a_name() {
        assert_eq!(extract_name(JAVA_RESUME).as_deref(), Some("Skilled"));
    }

    #[test]
    fn test_name_not_found() {
        let entities = extract_entities("n/a;42;lowercase_only");
        assert_eq!(entities.name, None);
        assert_eq!(entities.name_or_sentinel(), "Name not found");
    }

    #[test]
    fn test_skills_deduplicated() {
        let skills = extract_skills("Python, Python and more Python. Also CSS.");
        assert_eq!(skills.to_vec(), vec!["CSS", "Python"]);
    }

    #[test]
    fn test_skills_multi_word_terms() {
        let skills = extract_skills("Interested in Machine Learning and Deep Learning.");
        assert!(skills.contains("Machine Learning"));
        assert!(skills.contains("Deep Learning"));
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_skills_idempotent() {
        assert_eq!(extract_skills(JAVA_RESUME), extract_skills(JAVA_RESUME));
    }

    #[test]
    fn test_skills_order_independent() {
        let a = extract_skills("HTML then CSS then JavaScript then Python");
        let b = extract_skills("Python, JavaScript, CSS, HTML");
        assert_eq!(a, b);
    }

    #[test]
    fn test_skills_require_word_boundary() {
        assert!(extract_skills("Javanese Pythonic HTML5").is_empty());
    }

    #[test]
    fn test_contact_first_email_wins() {
        let contact = extract_contact("first@one.com then second@two.org");
        assert_eq!(contact.email.as_deref(), Some("first@one.com"));
    }

    #[test]
    fn test_contact_first_phone_wins() {
        let contact = extract_contact("Home 555-123-4567, Work 555-765-4321");
        assert_eq!(contact.phone.as_deref(), Some("555-123-4567"));
    }

    #[test]
    fn test_email_with_pipe_in_tld() {
        assert_eq!(extract_email("mail x@y.c|now").as_deref(), Some("x@y.c|now"));
    }

    #[test]
    fn test_contact_not_found() {
        let contact = extract_contact("No way to reach me.");
        assert_eq!(contact.email_or_sentinel(), "Email not found");
        assert_eq!(contact.phone_or_sentinel(), "Phone not found");
    }

    #[test]
    fn test_reference_resume_entities() {
        let entities = extract_entities(JAVA_RESUME);
        assert!(entities.skills.contains("Java"));

        let contact = extract_contact(JAVA_RESUME);
        assert_eq!(contact.email.as_deref(), Some("jane.smith@example.com"));
        assert_eq!(contact.phone.as_deref(), Some("+1-987-654-3210"));
    }
}
