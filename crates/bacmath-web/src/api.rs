//! HTTP endpoint handlers.
//!
//! Each tutoring handler follows the same line: parse the JSON body, check
//! required fields and curriculum membership, build the request through
//! [`TutorConfig`], call the completion service once, clean the text and
//! answer. Every failure becomes an [`ApiError`].

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Html;
use bacmath::prelude::{
    CompletionService, Difficulty, EXERCISE_COUNT, Message, TutorConfig, TutorContext,
    TutorError, clean_latex, curriculum, split_questions,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Shared application state passed to all handlers via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionService>,
    pub tutor: Arc<TutorConfig>,
}

impl AppState {
    async fn complete(&self, request: &bacmath::ChatRequest) -> Result<String, TutorError> {
        let text = self.completion.complete(request).await?;
        Ok(clean_latex(&text))
    }
}

/// Unwrap a JSON body, turning extractor rejections (bad content type,
/// malformed JSON, wrong field types) into a 400.
fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        debug!("JSON body rejected: {rejection}");
        ApiError(TutorError::missing(format!(
            "Requête invalide : {}",
            rejection.body_text()
        )))
    })
}

/// Keep a field only if it is present and non-empty.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// GET /: Single-page tutor UI.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[derive(Serialize)]
pub struct SectionsResponse {
    pub sections: Vec<&'static str>,
}

/// GET /sections: Section names in curriculum order.
pub async fn get_sections() -> Json<SectionsResponse> {
    Json(SectionsResponse {
        sections: curriculum::sections().collect(),
    })
}

#[derive(Serialize)]
pub struct LessonsResponse {
    pub lessons: &'static [&'static str],
}

/// GET /lessons/{section}: Ordered lessons of one section.
pub async fn get_lessons(Path(section): Path<String>) -> Result<Json<LessonsResponse>, ApiError> {
    let lessons =
        curriculum::lessons(&section).ok_or(ApiError(TutorError::InvalidSection(section)))?;
    Ok(Json(LessonsResponse { lessons }))
}

/// Request body for POST /generate.
#[derive(Deserialize, Default)]
pub struct GenerateRequest {
    pub section: Option<String>,
    pub lesson: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub questions: [String; EXERCISE_COUNT],
}

/// POST /generate: Three exercises on one lesson.
///
/// Rejects unknown (section, lesson) pairs with 400 before contacting the
/// completion service. Returns 500 if the model output does not split into
/// exactly three questions.
pub async fn post_generate(
    State(app): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let body = parse_body(payload)?;
    let (Some(section), Some(lesson)) = (non_empty(body.section), non_empty(body.lesson)) else {
        return Err(TutorError::missing("Section et leçon obligatoires").into());
    };
    curriculum::validate(&section, &lesson)?;

    let difficulty = body
        .difficulty
        .unwrap_or_else(|| Difficulty::default().as_str().to_string());
    info!(%section, %lesson, %difficulty, "generating exercises");

    let request = app.tutor.exercise_request(&section, &lesson, &difficulty);
    let text = app.complete(&request).await?;
    let questions = split_questions(&text)?;
    Ok(Json(GenerateResponse { questions }))
}

/// Request body for POST /solve.
#[derive(Deserialize, Default)]
pub struct SolveRequest {
    pub question_text: Option<String>,
}

#[derive(Serialize)]
pub struct SolveResponse {
    pub solution: String,
}

/// POST /solve: Step-by-step correction of an exercise statement.
pub async fn post_solve(
    State(app): State<AppState>,
    payload: Result<Json<SolveRequest>, JsonRejection>,
) -> Result<Json<SolveResponse>, ApiError> {
    let body = parse_body(payload)?;
    let question_text = non_empty(body.question_text)
        .ok_or_else(|| TutorError::missing("Texte de la question requis"))?;
    info!("solving exercise ({} chars)", question_text.len());

    let request = app.tutor.solution_request(&question_text);
    let solution = app.complete(&request).await?;
    Ok(Json(SolveResponse { solution }))
}

/// Request body for POST /chat.
#[derive(Deserialize, Default)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub section: Option<String>,
    pub lesson: Option<String>,
    pub difficulty: Option<String>,
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub history: Vec<Message>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /chat: One tutoring turn.
///
/// The conversation history is supplied by the caller and forwarded as-is;
/// nothing is stored between requests.
pub async fn post_chat(
    State(app): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let body = parse_body(payload)?;
    let message = non_empty(body.message).ok_or_else(|| TutorError::missing("Message requis"))?;
    let section = non_empty(body.section);
    let lesson = non_empty(body.lesson);
    let difficulty = non_empty(body.difficulty);

    match (&section, &lesson) {
        (Some(section), Some(lesson)) => curriculum::validate(section, lesson)?,
        (Some(section), None) if curriculum::lessons(section).is_none() => {
            return Err(TutorError::InvalidSection(section.clone()).into());
        }
        _ => {}
    }

    info!(
        section = section.as_deref().unwrap_or("-"),
        lesson = lesson.as_deref().unwrap_or("-"),
        "tutor turn: {} history message(s), {} question(s)",
        body.history.len(),
        body.questions.len()
    );

    let ctx = TutorContext {
        section: section.as_deref(),
        lesson: lesson.as_deref(),
        difficulty: difficulty.as_deref(),
        questions: &body.questions,
    };
    let request = app.tutor.chat_request(&ctx, &body.history, &message);
    let reply = app.complete(&request).await?;
    Ok(Json(ChatResponse { reply }))
}

/// Request body for POST /lesson_content.
#[derive(Deserialize, Default)]
pub struct LessonRequest {
    pub section: Option<String>,
    pub lesson: Option<String>,
}

#[derive(Serialize)]
pub struct LessonResponse {
    pub lesson: String,
}

/// POST /lesson_content: Full course text for one lesson.
pub async fn post_lesson_content(
    State(app): State<AppState>,
    payload: Result<Json<LessonRequest>, JsonRejection>,
) -> Result<Json<LessonResponse>, ApiError> {
    let body = parse_body(payload)?;
    let (Some(section), Some(lesson)) = (non_empty(body.section), non_empty(body.lesson)) else {
        return Err(TutorError::missing("Section et leçon obligatoires").into());
    };
    curriculum::validate(&section, &lesson)?;
    info!(%section, %lesson, "writing lesson");

    let request = app.tutor.lesson_request(&section, &lesson);
    let content = app.complete(&request).await?;
    Ok(Json(LessonResponse { lesson: content }))
}
