//! Blob storage seam for the maintenance sweep.

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use chrono::{DateTime, Utc};

use crate::errors::AppError;

/// The three storage operations the sweep needs. Carried as `Arc<dyn ObjectStore>`.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Object names under `prefix`, at most `max_results` of them.
    async fn list_objects(&self, prefix: &str, max_results: i32) -> Result<Vec<String>, AppError>;

    /// Creation timestamp from the object's metadata.
    async fn created_at(&self, name: &str) -> Result<DateTime<Utc>, AppError>;

    async fn delete_object(&self, name: &str) -> Result<(), AppError>;
}

/// S3 / MinIO implementation over a single bucket.
pub struct S3ObjectStore {
    client: S3Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn list_objects(&self, prefix: &str, max_results: i32) -> Result<Vec<String>, AppError> {
        let output = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .max_keys(max_results)
            .send()
            .await
            .map_err(|e| AppError::S3(format!("list {prefix}: {e}")))?;

        Ok(output
            .contents()
            .iter()
            .filter_map(|object| object.key().map(str::to_string))
            .collect())
    }

    async fn created_at(&self, name: &str) -> Result<DateTime<Utc>, AppError> {
        let head = self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(name)
            .send()
            .await
            .map_err(|e| AppError::S3(format!("head {name}: {e}")))?;

        let modified = head
            .last_modified()
            .ok_or_else(|| AppError::S3(format!("{name} has no timestamp metadata")))?;

        DateTime::from_timestamp(modified.secs(), modified.subsec_nanos())
            .ok_or_else(|| AppError::S3(format!("{name} has an out-of-range timestamp")))
    }

    async fn delete_object(&self, name: &str) -> Result<(), AppError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(name)
            .send()
            .await
            .map_err(|e| AppError::S3(format!("delete {name}: {e}")))?;
        Ok(())
    }
}
