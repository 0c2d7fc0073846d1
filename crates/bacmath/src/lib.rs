//! Baccalauréat mathematics tutor: curriculum, prompts and completion relay.
//!
//! `bacmath` holds everything a tutoring endpoint needs apart from HTTP
//! plumbing. A request is validated against the static
//! [`BAC_PROGRAM`](curriculum::BAC_PROGRAM), turned into a French
//! instruction prompt by [`prompt`], sent to an OpenAI-compatible chat
//! completions endpoint through a [`CompletionService`], and the returned
//! text is cleaned by [`postprocess`].
//!
//! ```ignore
//! use bacmath::prelude::*;
//!
//! let client = CompletionClient::new(std::env::var("GROQ_API_KEY")?)?;
//! let config = TutorConfig::default();
//!
//! curriculum::validate("Mathematics", "Limits")?;
//! let request = config.exercise_request("Mathematics", "Limits", "hard");
//! let text = clean_latex(&client.complete(&request).await?);
//! let [q1, q2, q3] = split_questions(&text)?;
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`curriculum`] | Section → lesson table and membership validation |
//! | [`prompt`] | Difficulty levels and the four instruction templates |
//! | [`postprocess`] | LaTeX artifact cleanup and the three-way question split |
//! | [`config`] | [`TutorConfig`](config::TutorConfig): model and sampling per endpoint |
//! | [`error`] | [`TutorError`] taxonomy |

pub mod config;
pub mod curriculum;
pub mod error;
pub mod postprocess;
pub mod prelude;
pub mod prompt;

pub use error::TutorError;

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

// ── Constants ──────────────────────────────────────────────────────

pub const GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model for all completions.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Default HTTP timeout for a single completion request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

// ── Message types ──────────────────────────────────────────────────

/// Role of a message in the conversation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A message in the conversation. Caller-supplied chat history
/// deserializes directly into this type.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

// ── Request types ──────────────────────────────────────────────────

/// Chat completion request body (OpenAI-compatible).
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

// ── Response types ─────────────────────────────────────────────────

/// Raw API response (internal deserialization target).
#[derive(Deserialize, Debug)]
struct RawChatResponse {
    choices: Option<Vec<RawChoice>>,
    error: Option<ApiErrorResponse>,
    #[serde(default)]
    usage: Option<UsageInfo>,
}

#[derive(Deserialize, Debug)]
struct RawChoice {
    message: RawResponseMessage,
}

#[derive(Deserialize, Debug)]
struct RawResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorResponse {
    message: String,
}

#[derive(Deserialize, Debug)]
struct UsageInfo {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
    total_tokens: Option<u32>,
}

/// Extract the text of the first choice from a raw response body.
pub fn parse_completion(body: &str) -> Result<String, TutorError> {
    let parsed: RawChatResponse = serde_json::from_str(body)
        .map_err(|e| TutorError::Upstream(format!("failed to parse response: {e}")))?;

    if let Some(err) = parsed.error {
        return Err(TutorError::Upstream(format!(
            "completion API error: {}",
            err.message
        )));
    }

    if let Some(ref usage) = parsed.usage {
        debug!(
            "Token usage: prompt={}, completion={}, total={}",
            usage.prompt_tokens.unwrap_or(0),
            usage.completion_tokens.unwrap_or(0),
            usage.total_tokens.unwrap_or(0),
        );
    }

    parsed
        .choices
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.message.content)
        .ok_or_else(|| TutorError::Upstream("empty completion (no choices)".to_string()))
}

// ── Completion service ─────────────────────────────────────────────

/// Boxed future returned by [`CompletionService::complete`].
pub type CompletionFuture<'a> =
    Pin<Box<dyn Future<Output = Result<String, TutorError>> + Send + 'a>>;

/// Anything that can turn a chat request into the text of one completion.
///
/// Handlers hold a single shared `Arc<dyn CompletionService>`; the HTTP
/// client is the production implementation and tests substitute a scripted
/// one.
pub trait CompletionService: Send + Sync {
    fn complete<'a>(&'a self, request: &'a ChatRequest) -> CompletionFuture<'a>;
}

// ── Client ─────────────────────────────────────────────────────────

/// Async HTTP client for an OpenAI-compatible chat completions API.
pub struct CompletionClient {
    client: reqwest::Client,
    api_key: String,
    url: String,
}

impl CompletionClient {
    /// Create a client for the Groq endpoint with the default timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, String> {
        Self::with_endpoint(api_key, GROQ_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client for a custom endpoint URL and request timeout.
    pub fn with_endpoint(
        api_key: impl Into<String>,
        url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("bacmath/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| format!("failed to build HTTP client: {e}"))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send a chat completion request and return the first choice's text.
    pub async fn chat(&self, body: &ChatRequest) -> Result<String, TutorError> {
        debug!(
            "LLM request: model={}, messages={}, max_tokens={:?}, temp={}",
            body.model,
            body.messages.len(),
            body.max_tokens,
            body.temperature,
        );
        trace!(
            "Request payload size: {} bytes",
            serde_json::to_string(body).map_or(0, |s| s.len())
        );

        let start = Instant::now();

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| TutorError::Upstream(format!("request failed: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| TutorError::Upstream(format!("failed to read response: {e}")))?;

        debug!(
            "LLM response: HTTP {} in {:.1}s ({} bytes)",
            status,
            start.elapsed().as_secs_f64(),
            text.len()
        );

        if !status.is_success() {
            return Err(TutorError::Upstream(format!(
                "completion API HTTP {status}: {text}"
            )));
        }

        let content = parse_completion(&text)?;
        debug!("LLM output: {} chars text", content.len());
        Ok(content)
    }
}

impl CompletionService for CompletionClient {
    fn complete<'a>(&'a self, request: &'a ChatRequest) -> CompletionFuture<'a> {
        Box::pin(self.chat(request))
    }
}
