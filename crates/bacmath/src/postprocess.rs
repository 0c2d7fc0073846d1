//! Cleanup applied to completion text before it is returned.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::TutorError;

/// Number of exercises the generation endpoint must return.
pub const EXERCISE_COUNT: usize = 3;

static QUESTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)question\s*\d+\s*:").expect("valid question marker regex"));

/// Collapse accidental runs of three or more `$` into `$$` and trim outer
/// whitespace.
pub fn clean_latex(text: &str) -> String {
    let mut cleaned = text.replace("$$$", "$$");
    while cleaned.contains("$$$") {
        cleaned = cleaned.replace("$$$", "$$");
    }
    cleaned.trim().to_string()
}

/// Split generated text on `Question N:` markers (any case) into exactly
/// [`EXERCISE_COUNT`] non-empty, trimmed statements.
pub fn split_questions(text: &str) -> Result<[String; EXERCISE_COUNT], TutorError> {
    let questions: Vec<String> = QUESTION_MARKER
        .split(text)
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect();

    let found = questions.len();
    questions
        .try_into()
        .map_err(|_| TutorError::GenerationMismatch { found })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_latex_collapses_triple_dollars() {
        assert_eq!(clean_latex("a $$$ b"), "a $$ b");
        assert_eq!(clean_latex("  $$$x$$$\n"), "$$x$$");
    }

    #[test]
    fn clean_latex_is_idempotent() {
        for input in ["  a $$$ b  ", "$$$$", "$x$$$y$$", "a $$$$$$ b"] {
            let once = clean_latex(input);
            assert_eq!(clean_latex(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn clean_latex_collapses_long_runs() {
        assert_eq!(clean_latex("$$$$"), "$$");
        assert_eq!(clean_latex("a $$$$$$ b"), "a $$ b");
    }

    #[test]
    fn clean_latex_keeps_regular_delimiters() {
        assert_eq!(clean_latex("$x$ et $$y$$"), "$x$ et $$y$$");
        assert_eq!(clean_latex(""), "");
    }

    #[test]
    fn split_questions_on_markers() {
        let text = "Question 1:\nA\n\nQuestion 2:\nB\n\nQuestion 3:\nC";
        assert_eq!(split_questions(text).unwrap(), ["A", "B", "C"]);
    }

    #[test]
    fn split_questions_ignores_case_and_spacing() {
        let text = "QUESTION 1 :\nA\nquestion2:\nB\nQuestion  3:C";
        assert_eq!(split_questions(text).unwrap(), ["A", "B", "C"]);
    }

    #[test]
    fn split_questions_keeps_preamble_as_segment() {
        // Text before the first marker counts as a segment.
        let text = "Voici:\nQuestion 1:\nA\nQuestion 2:\nB";
        assert_eq!(split_questions(text).unwrap(), ["Voici:", "A", "B"]);
    }

    #[test]
    fn split_questions_rejects_too_few() {
        let text = "Question 1:\nA\nQuestion 2:\nB\nQuestion 3:\n   ";
        assert_eq!(
            split_questions(text),
            Err(TutorError::GenerationMismatch { found: 2 })
        );
    }

    #[test]
    fn split_questions_rejects_too_many() {
        let text = "Question 1: A Question 2: B Question 3: C Question 4: D";
        assert_eq!(
            split_questions(text),
            Err(TutorError::GenerationMismatch { found: 4 })
        );
    }
}
