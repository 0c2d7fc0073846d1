//! Error taxonomy shared by the tutor library and the web layer.
//!
//! Every variant maps to exactly one HTTP status in `bacmath-web`. Client
//! mistakes (missing fields, unknown curriculum entries) are detected before
//! the completion service is contacted; the remaining variants can only occur
//! after a completion has been requested.

use thiserror::Error;

/// Errors produced while serving a tutoring request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TutorError {
    /// A required request field was absent or empty. Carries the
    /// user-facing message for the endpoint that rejected the request.
    #[error("{0}")]
    MissingField(String),

    /// The section is not part of the curriculum table.
    #[error("Section invalide")]
    InvalidSection(String),

    /// The section exists but does not list the lesson.
    #[error("{lesson} ne fait pas partie du programme de {section}.")]
    InvalidLesson { section: String, lesson: String },

    /// The generated exercise text did not split into exactly three questions.
    #[error("Erreur génération IA")]
    GenerationMismatch { found: usize },

    /// The completion service failed. The message is passed through verbatim.
    #[error("{0}")]
    Upstream(String),
}

impl TutorError {
    pub fn missing(message: impl Into<String>) -> Self {
        TutorError::MissingField(message.into())
    }

    /// Whether the error was caused by the caller (rejected before any
    /// completion request was made).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            TutorError::MissingField(_)
                | TutorError::InvalidSection(_)
                | TutorError::InvalidLesson { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lesson_names_section_and_lesson() {
        let err = TutorError::InvalidLesson {
            section: "Economics".into(),
            lesson: "Matrices".into(),
        };
        assert_eq!(
            err.to_string(),
            "Matrices ne fait pas partie du programme de Economics."
        );
    }

    #[test]
    fn upstream_message_is_verbatim() {
        let err = TutorError::Upstream("completion API HTTP 401: invalid key".into());
        assert_eq!(err.to_string(), "completion API HTTP 401: invalid key");
    }

    #[test]
    fn generation_mismatch_hides_details() {
        let err = TutorError::GenerationMismatch { found: 2 };
        assert_eq!(err.to_string(), "Erreur génération IA");
    }

    #[test]
    fn client_errors_classified() {
        assert!(TutorError::missing("Message requis").is_client_error());
        assert!(TutorError::InvalidSection("Latin".into()).is_client_error());
        assert!(!TutorError::GenerationMismatch { found: 4 }.is_client_error());
        assert!(!TutorError::Upstream("boom".into()).is_client_error());
    }
}
