//! Axum server setup and router construction.

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{self, AppState};

/// Build the full axum router.
///
/// The router serves:
/// - the tutor page at `/`
/// - curriculum lookups at `/sections` and `/lessons/{section}`
/// - the tutoring endpoints `/generate`, `/solve`, `/chat`, `/lesson_content`
/// - optional static files as a fallback
pub fn build_router(state: AppState, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(api::index))
        .route("/sections", get(api::get_sections))
        .route("/lessons/{section}", get(api::get_lessons))
        .route("/generate", post(api::post_generate))
        .route("/solve", post(api::post_solve))
        .route("/chat", post(api::post_chat))
        .route("/lesson_content", post(api::post_lesson_content))
        .with_state(state);

    if let Some(dir) = static_dir {
        info!("Serving static files from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(cors).layer(TraceLayer::new_for_http())
}

/// Bind the listener and return it together with the bound address.
pub async fn bind(bind_addr: SocketAddr) -> std::io::Result<(tokio::net::TcpListener, SocketAddr)> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let addr = listener.local_addr()?;
    Ok((listener, addr))
}
