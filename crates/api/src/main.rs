use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use slotkeeper_api::app::{router, AppState};
use slotkeeper_api::config::Config;
use slotkeeper_api::jobs::{JobScheduler, PoolMetricsJob, RateLimitPruneJob};
use slotkeeper_api::middleware::{init_metrics, logging::init_logging};
use slotkeeper_api::services::admin_bootstrap::bootstrap_admin;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load().context("Failed to load configuration")?;

    init_logging(&config.logging);
    init_metrics().context("Failed to install Prometheus recorder")?;

    info!("Starting Slotkeeper API v{}", env!("CARGO_PKG_VERSION"));

    let pool = persistence::db::create_pool(&config.database.pool_config()).await?;

    info!("Running database migrations");
    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await?;

    bootstrap_admin(&pool, &config.admin).await?;

    let addr = config.socket_addr()?;
    let state = AppState::new(config, pool.clone())?;

    let mut scheduler = JobScheduler::new();
    scheduler.register(PoolMetricsJob::new(pool));
    if let Some(limiter) = &state.rate_limiter {
        scheduler.register(RateLimitPruneJob::new(Arc::clone(limiter)));
    }
    scheduler.start();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.shutdown();
    scheduler.wait_for_shutdown(Duration::from_secs(5)).await;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
