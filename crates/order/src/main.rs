use anyhow::{Context, Result};
use order::{config::myconfig::Config, state::AppState};
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::{init_logger, shutdown_signal},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let (pool, state) = setup().await.context("Failed to setup application")?;

    info!("🚀 Order service ready: {:?}", state);

    shutdown_signal().await;
    info!("🛑 Shutdown signal received, closing database pool...");

    pool.close().await;

    info!("✅ Order service shutdown complete.");
    Ok(())
}

async fn setup() -> Result<(ConnectionPool, AppState)> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    init_logger("order-service", config.is_dev, config.enable_file_log);

    let db_pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("failed to migration database")?;
    }

    let state = AppState::new(db_pool.clone(), &config);

    info!("✅ Application setup completed successfully.");
    Ok((db_pool, state))
}

pub async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    info!("✅ Database migrations applied");
    Ok(())
}
