//! Convenience re-exports for common `bacmath` types.
//!
//! ```ignore
//! use bacmath::prelude::*;
//! ```

// ── Core types ──────────────────────────────────────────────────────
pub use crate::{
    ChatRequest, CompletionClient, CompletionFuture, CompletionService, DEFAULT_MODEL,
    DEFAULT_TIMEOUT, GROQ_URL, Message, MessageRole, TutorError,
};

// ── Tutoring ────────────────────────────────────────────────────────
pub use crate::config::{Sampling, TutorConfig};
pub use crate::curriculum;
pub use crate::postprocess::{EXERCISE_COUNT, clean_latex, split_questions};
pub use crate::prompt::{Difficulty, TutorContext};
