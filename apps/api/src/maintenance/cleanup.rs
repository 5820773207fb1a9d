//! Retention sweep over generated PDFs.
//!
//! Objects are evaluated one at a time. A failure on one object is recorded
//! in the `SweepReport` and the sweep moves on.

use chrono::{DateTime, Duration, Utc};
use tracing::{error, info};

use crate::maintenance::storage::ObjectStore;

pub const CLEANUP_PREFIX: &str = "pdfs/";
pub const MAX_OBJECTS_PER_SWEEP: i32 = 1000;
pub const RETENTION_DAYS: i64 = 90;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepFailure {
    /// Object name, or the prefix when listing failed.
    pub object: String,
    pub reason: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepReport {
    pub scanned: usize,
    pub deleted: Vec<String>,
    pub retained: usize,
    pub failures: Vec<SweepFailure>,
}

/// Deletes every object under `CLEANUP_PREFIX` created before `now - RETENTION_DAYS`.
pub async fn sweep_expired_objects(store: &dyn ObjectStore, now: DateTime<Utc>) -> SweepReport {
    let cutoff = now - Duration::days(RETENTION_DAYS);
    let mut report = SweepReport::default();

    let names = match store
        .list_objects(CLEANUP_PREFIX, MAX_OBJECTS_PER_SWEEP)
        .await
    {
        Ok(names) => names,
        Err(e) => {
            error!("Cleanup error: listing {CLEANUP_PREFIX} failed: {e}");
            report.failures.push(SweepFailure {
                object: CLEANUP_PREFIX.to_string(),
                reason: e.to_string(),
            });
            return report;
        }
    };

    for name in names {
        report.scanned += 1;

        let created_at = match store.created_at(&name).await {
            Ok(ts) => ts,
            Err(e) => {
                error!("Cleanup error: reading metadata for {name}: {e}");
                report.failures.push(SweepFailure {
                    object: name,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if created_at >= cutoff {
            report.retained += 1;
            continue;
        }

        match store.delete_object(&name).await {
            Ok(()) => {
                info!("Deleted old file: {name}");
                report.deleted.push(name);
            }
            Err(e) => {
                error!("Cleanup error: deleting {name}: {e}");
                report.failures.push(SweepFailure {
                    object: name,
                    reason: e.to_string(),
                });
            }
        }
    }

    report
}
