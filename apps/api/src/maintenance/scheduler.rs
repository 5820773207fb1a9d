use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, warn};

use crate::maintenance::cleanup::sweep_expired_objects;
use crate::maintenance::storage::ObjectStore;

pub const CLEANUP_PERIOD: Duration = Duration::from_secs(24 * 60 * 60);

/// Runs the retention sweep every `period`, starting one period from now.
/// Sweeps run sequentially; nothing is reported back to the spawner.
pub fn spawn_cleanup_schedule(store: Arc<dyn ObjectStore>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let report = sweep_expired_objects(store.as_ref(), Utc::now()).await;
            if report.failures.is_empty() {
                info!(
                    "Data cleanup completed: scanned={} deleted={} retained={}",
                    report.scanned,
                    report.deleted.len(),
                    report.retained
                );
            } else {
                for failure in &report.failures {
                    warn!("Cleanup skipped {}: {}", failure.object, failure.reason);
                }
                warn!(
                    "Data cleanup completed with {} failures: scanned={} deleted={} retained={}",
                    report.failures.len(),
                    report.scanned,
                    report.deleted.len(),
                    report.retained
                );
            }
        }
    })
}
