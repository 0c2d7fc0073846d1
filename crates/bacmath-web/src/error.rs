//! JSON error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bacmath::TutorError;
use bacmath::postprocess::EXERCISE_COUNT;
use tracing::{debug, warn};

/// Handler error: a [`TutorError`] rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(pub TutorError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<TutorError> for ApiError {
    fn from(err: TutorError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self.0 {
            TutorError::GenerationMismatch { found } => {
                warn!("exercise generation returned {found} question(s), expected {EXERCISE_COUNT}");
            }
            TutorError::Upstream(msg) => warn!("completion failed: {msg}"),
            err => debug!("rejected request: {err}"),
        }

        let body = Json(serde_json::json!({
            "error": self.0.to_string()
        }));

        (status, body).into_response()
    }
}
