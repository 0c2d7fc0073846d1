//! HTTP backend for the Baccalauréat maths tutor.
//!
//! `bacmath-web` exposes the [`bacmath`] tutoring operations as a small JSON
//! API served by axum. Every request is independent: the curriculum table is
//! static, conversation history travels with each `/chat` request, and the
//! only shared resource is one read-only [`CompletionService`] handle.
//!
//! # Quick start
//!
//! ```ignore
//! use std::sync::Arc;
//! use bacmath::{CompletionClient, config::TutorConfig};
//! use bacmath_web::{WebConfig, spawn_web};
//!
//! let client = Arc::new(CompletionClient::new(api_key)?);
//! let addr = spawn_web(client, TutorConfig::default(), WebConfig::default()).await?;
//! println!("Tutor: http://{addr}");
//! ```
//!
//! # Endpoints
//!
//! | Method/Path | Body | Success |
//! |---|---|---|
//! | `GET /` | | HTML page |
//! | `GET /sections` | | `{"sections": [...]}` |
//! | `GET /lessons/{section}` | | `{"lessons": [...]}` |
//! | `POST /generate` | `section`, `lesson`, `difficulty?` | `{"questions": [q1, q2, q3]}` |
//! | `POST /solve` | `question_text` | `{"solution": "..."}` |
//! | `POST /chat` | `message`, `section?`, `lesson?`, `difficulty?`, `questions?`, `history?` | `{"reply": "..."}` |
//! | `POST /lesson_content` | `section`, `lesson` | `{"lesson": "..."}` |
//!
//! Errors are always `{"error": "<message>"}`: 400 for missing fields and
//! unknown curriculum entries, 500 for completion failures.

mod api;
pub mod error;
mod server;

pub use error::ApiError;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use bacmath::CompletionService;
use bacmath::config::TutorConfig;
use tracing::info;

use crate::api::AppState;

/// Configuration for the web server.
pub struct WebConfig {
    /// Address to bind to. Default: `127.0.0.1:5000`.
    pub bind_addr: SocketAddr,
    /// Directory of extra static assets served as the router fallback.
    pub static_dir: Option<PathBuf>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            static_dir: None,
        }
    }
}

fn router(
    completion: Arc<dyn CompletionService>,
    tutor: TutorConfig,
    static_dir: Option<PathBuf>,
) -> axum::Router {
    let state = AppState {
        completion,
        tutor: Arc::new(tutor),
    };
    server::build_router(state, static_dir)
}

/// Spawn the web server on a Tokio task and return the bound address.
///
/// The server runs until the Tokio runtime shuts down. Binding to port 0
/// picks a free port.
pub async fn spawn_web(
    completion: Arc<dyn CompletionService>,
    tutor: TutorConfig,
    config: WebConfig,
) -> std::io::Result<SocketAddr> {
    let router = router(completion, tutor, config.static_dir);
    let (listener, addr) = server::bind(config.bind_addr).await?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("server error: {e}");
        }
    });

    Ok(addr)
}

/// Serve until `shutdown` resolves.
pub async fn run_web(
    completion: Arc<dyn CompletionService>,
    tutor: TutorConfig,
    config: WebConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let model = tutor.model.clone();
    let router = router(completion, tutor, config.static_dir);
    let (listener, addr) = server::bind(config.bind_addr).await?;
    info!("Tutor listening on http://{addr} (model {model})");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
