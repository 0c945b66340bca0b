//! Static skill knowledge base.
//!
//! Maps a recognized skill to a learning resource and a logo asset path for
//! the presentation layer. A missing entry just means no suggestion exists.

use serde::Serialize;

use crate::model::SkillSet;

/// Improvement resource for one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillResource {
    pub skill: &'static str,
    /// Resource title
    pub title: &'static str,
    /// Resource link
    pub url: &'static str,
    /// Logo asset, relative to the presentation layer's asset root
    pub logo: &'static str,
}

const fn entry(
    skill: &'static str,
    title: &'static str,
    url: &'static str,
    logo: &'static str,
) -> SkillResource {
    SkillResource {
        skill,
        title,
        url,
        logo,
    }
}

static RESOURCES: [SkillResource; 12] = [
    entry(
        "Python",
        "Advanced Python Concepts",
        "https://realpython.com/",
        "images/python_logo.png",
    ),
    entry(
        "Java",
        "Java Programming Basics",
        "https://www.codecademy.com/learn/learn-java",
        "images/java_logo.png",
    ),
    entry(
        "JavaScript",
        "JavaScript Fundamentals",
        "https://developer.mozilla.org/en-US/docs/Learn/JavaScript",
        "images/javascript_logo.png",
    ),
    entry(
        "C++",
        "C++ Programming Guide",
        "https://www.learncpp.com/",
        "images/cplusplus_logo.png",
    ),
    entry(
        "HTML",
        "HTML & CSS Basics",
        "https://www.freecodecamp.org/learn/responsive-web-design/basic-html-and-html5/",
        "images/html_logo.png",
    ),
    entry(
        "CSS",
        "CSS Flexbox and Grid",
        "https://css-tricks.com/snippets/css/complete-guide-grid/",
        "images/css_logo.png",
    ),
    entry(
        "Machine Learning",
        "Introduction to Machine Learning",
        "https://www.coursera.org/learn/machine-learning",
        "images/machine_learning_logo.png",
    ),
    entry(
        "Data Science",
        "Data Science Specialization",
        "https://www.coursera.org/specializations/jhu-data-science",
        "images/data_science_logo.png",
    ),
    entry(
        "Data Analyst",
        "Data Analysis with Python",
        "https://www.freecodecamp.org/learn/data-analysis-with-python/",
        "images/data_analyst_logo.png",
    ),
    entry(
        "Software Engineer",
        "Software Engineering Principles",
        "https://www.udacity.com/course/software-development-process--nd9990",
        "images/software_engineer_logo.png",
    ),
    entry(
        "Web Developer",
        "Full-Stack Web Development",
        "https://www.freecodecamp.org/learn/front-end-development-libraries/",
        "images/web_developer_logo.png",
    ),
    entry(
        "Deep Learning",
        "Deep Learning Specialization",
        "https://www.coursera.org/specializations/deep-learning",
        "images/deep_learning_logo.png",
    ),
];

/// Look up the resource for a skill (exact, case-sensitive).
pub fn lookup(skill: &str) -> Option<&'static SkillResource> {
    RESOURCES.iter().find(|r| r.skill == skill)
}

/// Every entry in the knowledge base.
pub fn all() -> &'static [SkillResource] {
    &RESOURCES
}

/// Resources for every covered skill in `skills`, in the set's order.
pub fn suggestions(skills: &SkillSet) -> Vec<&'static SkillResource> {
    skills.iter().filter_map(lookup).collect()
}
