//! Toolify Web Server
//!
//! Entry point for the server-rendered Toolify front end.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use toolify_web::config::{AppConfig, LoggingConfig};
use toolify_web::error::AppError;
use toolify_web::server::start_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let config = AppConfig::load().map_err(AppError::Config)?;

    init_tracing(&config.logging)?;

    info!(
        name: "config.loaded",
        host = %config.server.host,
        port = config.server.port,
        json_logs = config.logging.json,
        "Configuration loaded"
    );

    start_server(Arc::new(config)).await?;
    Ok(())
}

/// Initialize tracing (M-LOG-STRUCTURED).
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("invalid log filter")?;

    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(fmt::layer().json().with_target(true)).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }

    Ok(())
}
