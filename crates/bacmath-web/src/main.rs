//! Baccalauréat maths tutor server.
//!
//! Reads the completion API key from `GROQ_API_KEY` (a `.env` file in the
//! working directory is loaded first).
//!
//! # Usage
//!
//! ```bash
//! GROQ_API_KEY=gsk_... cargo run -p bacmath-web
//! GROQ_API_KEY=gsk_... cargo run -p bacmath-web -- --port 8080 --model llama-3.3-70b-versatile
//! RUST_LOG=bacmath=debug,tower_http=debug cargo run -p bacmath-web
//! ```
//!
//! ```bash
//! curl -s localhost:5000/lessons/Mathematics
//! curl -s localhost:5000/generate -H 'content-type: application/json' \
//!   -d '{"section": "Mathematics", "lesson": "Limits", "difficulty": "hard"}'
//! ```

use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use bacmath::prelude::*;
use bacmath_web::{WebConfig, run_web};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Baccalauréat maths tutor server.
#[derive(Parser)]
#[command(name = "bacmath-web")]
struct Cli {
    /// API key for the completion service.
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Model used for every completion.
    #[arg(long, env = "BACMATH_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Chat completions endpoint (any OpenAI-compatible API).
    #[arg(long, env = "BACMATH_API_URL", default_value = GROQ_URL)]
    api_url: String,

    /// Per-request timeout for the completion service, in seconds.
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,

    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Directory of extra static assets to serve.
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = CompletionClient::with_endpoint(
        cli.api_key,
        cli.api_url,
        Duration::from_secs(cli.timeout_secs),
    )?;
    info!("Completion endpoint: {}", client.url());

    let tutor = TutorConfig::default().with_model(cli.model);
    let web_config = WebConfig {
        bind_addr: (cli.host, cli.port).into(),
        static_dir: cli.static_dir,
    };

    run_web(Arc::new(client), tutor, web_config, shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
