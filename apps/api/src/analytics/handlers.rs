use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, warn};

use crate::analytics::models::AnalyticsEvent;
use crate::analytics::recorder::{record_usage, UsageOutcome};
use crate::state::AppState;

/// POST /api/v1/analytics/events
///
/// Always 204: the event source never sees a recording failure,
/// including events it sent in a shape we cannot read.
pub async fn handle_analytics_event(
    State(state): State<AppState>,
    body: Result<Json<AnalyticsEvent>, JsonRejection>,
) -> StatusCode {
    let event = match body {
        Ok(Json(event)) => event,
        Err(e) => {
            warn!("Usage tracking error: unreadable event: {}", e.body_text());
            return StatusCode::NO_CONTENT;
        }
    };

    match record_usage(state.usage.as_ref(), &event).await {
        UsageOutcome::Recorded(record) => debug!("Usage record {} appended", record.id),
        UsageOutcome::Ignored => debug!("Ignoring analytics event {}", event.name),
        UsageOutcome::Failed(reason) => debug!("Usage record dropped: {reason}"),
    }
    StatusCode::NO_CONTENT
}
