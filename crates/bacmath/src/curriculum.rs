//! The official BAC PROGRAM: which lessons each section studies.
//!
//! The table is static data compiled into the binary. Lookups are exact and
//! case-sensitive; lesson order is the teaching order and is preserved in
//! every response.

use crate::error::TutorError;

/// Section name → ordered lesson names.
pub const BAC_PROGRAM: &[(&str, &[&str])] = &[
    (
        "Mathematics",
        &[
            "Limits",
            "Derivatives",
            "Integrals",
            "Complex Numbers",
            "Sequences",
            "Probability",
            "Differential Equations",
        ],
    ),
    (
        "Science",
        &[
            "Limits",
            "Derivatives",
            "Integrals",
            "Probability",
            "Sequences",
        ],
    ),
    (
        "Economics",
        &["Functions", "Derivatives", "Probability", "Statistics"],
    ),
    (
        "Technical",
        &["Functions", "Integrals", "Complex Numbers", "Statistics"],
    ),
    (
        "Informatique",
        &["Functions", "Probability", "Matrices", "Complex Numbers"],
    ),
];

/// Section names in table order.
pub fn sections() -> impl Iterator<Item = &'static str> {
    BAC_PROGRAM.iter().map(|(section, _)| *section)
}

/// Lessons of `section`, or `None` if the section is not in the program.
pub fn lessons(section: &str) -> Option<&'static [&'static str]> {
    BAC_PROGRAM
        .iter()
        .find(|(name, _)| *name == section)
        .map(|(_, lessons)| *lessons)
}

/// Check that `lesson` belongs to `section`.
pub fn validate(section: &str, lesson: &str) -> Result<(), TutorError> {
    let lessons = lessons(section).ok_or_else(|| TutorError::InvalidSection(section.into()))?;
    if lessons.contains(&lesson) {
        Ok(())
    } else {
        Err(TutorError::InvalidLesson {
            section: section.into(),
            lesson: lesson.into(),
        })
    }
}
