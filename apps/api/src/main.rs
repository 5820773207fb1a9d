mod analytics;
mod auth;
mod config;
mod db;
mod errors;
mod generation;
mod llm_client;
mod maintenance;
mod routes;
mod state;
mod webhook;

#[cfg(test)]
mod testing;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analytics::recorder::PgUsageStore;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::maintenance::scheduler::{spawn_cleanup_schedule, CLEANUP_PERIOD};
use crate::maintenance::storage::S3ObjectStore;
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

    info!("Starting NextRole API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (usage log)
    let db = create_pool(&config.database_url).await?;

    // Initialize S3 / MinIO (generated PDFs)
    let s3 = build_s3_client(&config).await;
    info!("S3 client initialized");

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone(), &config.openai_base_url)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Daily retention sweep
    let objects = Arc::new(S3ObjectStore::new(s3, config.s3_bucket.clone()));
    let _cleanup = spawn_cleanup_schedule(objects, CLEANUP_PERIOD);
    info!("Cleanup scheduled every {}h", CLEANUP_PERIOD.as_secs() / 3600);

    if let Some(dir) = &config.pages_dir {
        info!("Serving static pages from {}", dir.display());
    }

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        usage: Arc::new(PgUsageStore::new(db)),
        config: config.clone(),
    };

    // Build router; the webhook and pages accept any origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "nextrole-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
