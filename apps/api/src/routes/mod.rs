pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analytics::handlers::handle_analytics_event;
use crate::generation::handlers::handle_generate_content;
use crate::state::AppState;
use crate::webhook::handlers::handle_webhook;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health::health_handler))
        // Authenticated call (caller id forwarded by the auth proxy)
        .route("/api/v1/generate", post(handle_generate_content))
        // Public webhook for integrations
        .route("/webhook", post(handle_webhook))
        // Analytics exporter → usage log
        .route("/api/v1/analytics/events", post(handle_analytics_event));

    if let Some(dir) = &state.config.pages_dir {
        router = router.merge(pages::pages_router(dir));
    }

    router.with_state(state)
}
