use std::sync::Arc;

use crate::analytics::recorder::UsageStore;
use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Generation backend. Default: `LlmClient`.
    pub llm: Arc<dyn TextGenerator>,
    /// Append-only usage log. Default: `PgUsageStore`.
    pub usage: Arc<dyn UsageStore>,
    pub config: Config,
}
