//! Contact RPC Server - Main Entry Point

mod config;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use config::Config;
use contact_rpc_api::RpcServer;
use contact_rpc_core::application::cancel_channel;
use contact_rpc_core::port::UuidProvider;
use contact_rpc_infra_sqlite::{
    create_pool, current_version, run_migrations, seed_demo_contacts, SqliteConnectionPool,
};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Configuration and logging
    let config = Config::parse();
    let _log_guard = logging::init(config.log_format, config.log_dir.as_deref())?;
    config.validate()?;

    info!("Contact RPC server v{} starting...", contact_rpc_core::VERSION);

    // 2. Database
    let db_path = config.db_path();
    if let Some(parent) = Path::new(&db_path).parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    info!(db_path = %db_path, pool_size = config.pool_size, "Initializing database...");
    let pool = create_pool(&db_path, &config.pool_settings())
        .await
        .context("DB pool creation failed")?;
    run_migrations(&pool).await.context("Migration failed")?;
    info!(
        schema_version = current_version(&pool).await.context("Schema check failed")?,
        "Database ready"
    );

    if config.seed_demo {
        let inserted = seed_demo_contacts(&pool)
            .await
            .context("Demo seed failed")?;
        info!(inserted, "Demo contacts seeded");
    }

    // 3. Wiring
    let (cancel_tx, cancel) = cancel_channel();
    let rpc_server = RpcServer::new(
        config.server_config(),
        Arc::new(SqliteConnectionPool::new(pool.clone())),
        Arc::new(UuidProvider),
        cancel,
    );

    let (addr, rpc_handle) = rpc_server
        .start()
        .await
        .context("RPC server start failed")?;

    info!(addr = %addr, "System ready. Press Ctrl+C to shutdown");

    // 4. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received. Exiting gracefully...");

    // In-flight calls end with Cancelled before the listener goes away
    cancel_tx.cancel();
    rpc_handle
        .stop()
        .context("RPC server stop failed")?;
    rpc_handle.stopped().await;
    pool.close().await;

    info!("Shutdown complete.");
    Ok(())
}
