use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionClient;
use crate::mentors::directory::MentorDirectory;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Model provider behind the roadmap endpoint. Default: `GeminiClient`.
    pub llm: Arc<dyn CompletionClient>,
    pub mentors: Arc<MentorDirectory>,
}
