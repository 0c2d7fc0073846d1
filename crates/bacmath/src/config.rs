//! Model and sampling settings for each tutoring endpoint.
//!
//! [`TutorConfig`] turns validated endpoint inputs into a ready-to-send
//! [`ChatRequest`] via [`exercise_request`](TutorConfig::exercise_request),
//! [`solution_request`](TutorConfig::solution_request),
//! [`chat_request`](TutorConfig::chat_request) and
//! [`lesson_request`](TutorConfig::lesson_request).

use crate::prompt::{self, TutorContext};
use crate::{ChatRequest, DEFAULT_MODEL, Message};

/// Sampling parameters for one endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    pub temperature: f32,
    /// Upper bound on completion tokens. `None` leaves it to the provider.
    pub max_tokens: Option<u32>,
}

impl Sampling {
    pub const fn new(temperature: f32, max_tokens: Option<u32>) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// Tutor configuration: one model shared by all endpoints, with
/// per-endpoint sampling.
#[derive(Debug, Clone)]
pub struct TutorConfig {
    /// Model identifier. Default: `"llama-3.1-8b-instant"`.
    pub model: String,
    /// Exercise generation. Default: temperature `0.6`, no token limit.
    pub generate: Sampling,
    /// Step-by-step solving. Default: temperature `0.4`, no token limit.
    pub solve: Sampling,
    /// Interactive tutoring. Default: temperature `0.5`, `1024` tokens.
    pub chat: Sampling,
    /// Lesson exposition. Default: temperature `0.5`, `2048` tokens.
    pub lesson: Sampling,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            generate: Sampling::new(0.6, None),
            solve: Sampling::new(0.4, None),
            chat: Sampling::new(0.5, Some(1024)),
            lesson: Sampling::new(0.5, Some(2048)),
        }
    }
}

impl TutorConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn request(&self, sampling: Sampling, messages: Vec<Message>) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages,
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
        }
    }

    /// Three exercises on `lesson` at difficulty `level`.
    pub fn exercise_request(&self, section: &str, lesson: &str, level: &str) -> ChatRequest {
        self.request(
            self.generate,
            vec![Message::system(prompt::exercise_prompt(section, lesson, level))],
        )
    }

    /// Step-by-step correction of `question_text`.
    pub fn solution_request(&self, question_text: &str) -> ChatRequest {
        self.request(
            self.solve,
            vec![
                Message::system(prompt::solution_prompt()),
                Message::user(question_text),
            ],
        )
    }

    /// Tutor reply: system prompt, then `history` verbatim, then `message`.
    pub fn chat_request(
        &self,
        ctx: &TutorContext<'_>,
        history: &[Message],
        message: &str,
    ) -> ChatRequest {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::system(prompt::tutor_prompt(ctx)));
        messages.extend_from_slice(history);
        messages.push(Message::user(message));
        self.request(self.chat, messages)
    }

    /// Full course on `lesson`.
    pub fn lesson_request(&self, section: &str, lesson: &str) -> ChatRequest {
        self.request(
            self.lesson,
            vec![
                Message::system(prompt::lesson_prompt(section, lesson)),
                Message::user(format!("Cours : {lesson}")),
            ],
        )
    }
}
