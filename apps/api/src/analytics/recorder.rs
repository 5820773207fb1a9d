//! Usage Recorder — appends one usage row per `content_generated` event.
//!
//! Never fails outward: write errors are logged and reported as
//! `UsageOutcome::Failed` to the caller for logging only.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use crate::analytics::models::{
    AnalyticsEvent, NewUsageRecord, CONTENT_GENERATED_EVENT, CONTENT_TYPE_PARAM,
};
use crate::errors::AppError;

/// Append-only usage log. Carried in `AppState` as `Arc<dyn UsageStore>`.
#[async_trait]
pub trait UsageStore: Send + Sync {
    async fn append(&self, record: &NewUsageRecord) -> Result<(), AppError>;
}

/// PostgreSQL-backed usage log (`usage_analytics` table).
pub struct PgUsageStore {
    pool: PgPool,
}

impl PgUsageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsageStore for PgUsageStore {
    async fn append(&self, record: &NewUsageRecord) -> Result<(), AppError> {
        // Append-only: rows are never updated or read back here.
        sqlx::query(
            r#"
            INSERT INTO usage_analytics (id, user_id, content_type, event, created_at)
            VALUES ($1, $2, $3, $4, now())
            "#,
        )
        .bind(record.id)
        .bind(&record.user_id)
        .bind(&record.content_type)
        .bind(&record.event)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum UsageOutcome {
    Recorded(NewUsageRecord),
    Ignored,
    Failed(String),
}

/// Builds the usage record for `event`. A missing `content_type` param leaves the field empty.
pub fn usage_record_for(event: &AnalyticsEvent) -> NewUsageRecord {
    NewUsageRecord {
        id: Uuid::new_v4(),
        user_id: event.user_id.clone(),
        content_type: event.param(CONTENT_TYPE_PARAM),
        event: CONTENT_GENERATED_EVENT.to_string(),
    }
}

pub async fn record_usage(store: &dyn UsageStore, event: &AnalyticsEvent) -> UsageOutcome {
    if event.name != CONTENT_GENERATED_EVENT {
        return UsageOutcome::Ignored;
    }

    let record = usage_record_for(event);
    match store.append(&record).await {
        Ok(()) => {
            info!(
                "Usage tracked: {} for user {}",
                record.content_type.as_deref().unwrap_or("<none>"),
                record.user_id.as_deref().unwrap_or("<anonymous>")
            );
            UsageOutcome::Recorded(record)
        }
        Err(e) => {
            error!("Usage tracking error: {e}");
            UsageOutcome::Failed(e.to_string())
        }
    }
}
