//! In-process fakes for the backend, usage log and blob storage seams.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::analytics::models::NewUsageRecord;
use crate::analytics::recorder::UsageStore;
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, LlmError, TextGenerator};
use crate::maintenance::storage::ObjectStore;
use crate::state::AppState;

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/nextrole_test".to_string(),
        s3_bucket: "nextrole-test".to_string(),
        s3_endpoint: "http://localhost:9000".to_string(),
        aws_access_key_id: "test".to_string(),
        aws_secret_access_key: "test".to_string(),
        openai_api_key: "sk-test".to_string(),
        openai_base_url: "http://localhost:1/v1".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
        pages_dir: None,
    }
}

pub fn test_state(llm: Arc<FakeGenerator>) -> AppState {
    test_state_with_usage(llm, Arc::new(FakeUsageStore::default()))
}

pub fn test_state_with_usage(llm: Arc<FakeGenerator>, usage: Arc<FakeUsageStore>) -> AppState {
    AppState {
        llm,
        usage,
        config: test_config(),
    }
}

enum Reply {
    Text(String),
    ApiError { status: u16, message: String },
}

/// Returns a canned completion and records every request it receives.
pub struct FakeGenerator {
    reply: Reply,
    calls: AtomicUsize,
    last: Mutex<Option<CompletionRequest>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self::new(Reply::Text(text.to_string()))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::new(Reply::ApiError {
            status,
            message: message.to_string(),
        })
    }

    fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(request.clone());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::ApiError { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

#[derive(Default)]
pub struct FakeUsageStore {
    fail: bool,
    records: Mutex<Vec<NewUsageRecord>>,
}

impl FakeUsageStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn records(&self) -> Vec<NewUsageRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl UsageStore for FakeUsageStore {
    async fn append(&self, record: &NewUsageRecord) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Bucket held in memory, keyed by object name.
#[derive(Default)]
pub struct FakeObjectStore {
    objects: Mutex<BTreeMap<String, DateTime<Utc>>>,
    fail_list: bool,
    fail_metadata: HashSet<String>,
    fail_delete: HashSet<String>,
    list_calls: Mutex<Vec<(String, i32)>>,
}

impl FakeObjectStore {
    pub fn with_objects(objects: Vec<(String, DateTime<Utc>)>) -> Self {
        Self {
            objects: Mutex::new(objects.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn failing_list() -> Self {
        Self {
            fail_list: true,
            ..Default::default()
        }
    }

    pub fn failing_metadata(mut self, name: &str) -> Self {
        self.fail_metadata.insert(name.to_string());
        self
    }

    pub fn failing_delete(mut self, name: &str) -> Self {
        self.fail_delete.insert(name.to_string());
        self
    }

    pub fn remaining(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    pub fn list_calls(&self) -> Vec<(String, i32)> {
        self.list_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn list_objects(&self, prefix: &str, max_results: i32) -> Result<Vec<String>, AppError> {
        self.list_calls
            .lock()
            .unwrap()
            .push((prefix.to_string(), max_results));
        if self.fail_list {
            return Err(AppError::S3("access denied".to_string()));
        }
        Ok(self
            .objects
            .lock()
            .unwrap()
            .keys()
            .filter(|name| name.starts_with(prefix))
            .take(max_results as usize)
            .cloned()
            .collect())
    }

    async fn created_at(&self, name: &str) -> Result<DateTime<Utc>, AppError> {
        if self.fail_metadata.contains(name) {
            return Err(AppError::S3(format!("head {name}: timeout")));
        }
        self.objects
            .lock()
            .unwrap()
            .get(name)
            .copied()
            .ok_or_else(|| AppError::S3(format!("{name} not found")))
    }

    async fn delete_object(&self, name: &str) -> Result<(), AppError> {
        if self.fail_delete.contains(name) {
            return Err(AppError::S3(format!("delete {name}: permission denied")));
        }
        self.objects.lock().unwrap().remove(name);
        Ok(())
    }
}
