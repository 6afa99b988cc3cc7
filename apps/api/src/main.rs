mod config;
mod cors;
mod errors;
mod llm_client;
mod mentors;
mod roadmap;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::mentors::directory::MentorDirectory;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PathConnect API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = GeminiClient::new(config.gemini.clone())?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s, failure policy: {:?})",
        llm.model(),
        config.gemini.timeout_secs,
        config.failure_policy
    );

    // Load mentor directory
    let mentors = match &config.mentors_file {
        Some(path) => MentorDirectory::load(path)?,
        None => {
            info!("MENTORS_FILE not set; mentor directory is empty");
            MentorDirectory::default()
        }
    };

    info!("CORS allowed loopback ports: {:?}", config.cors_allowed_ports);

    let port = config.port;
    let state = AppState {
        config: Arc::new(config),
        llm: Arc::new(llm),
        mentors: Arc::new(mentors),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
