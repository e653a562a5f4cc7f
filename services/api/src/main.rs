use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog_api::{
    AppState, ServerConfig,
    config::StoreBackend,
    create_router,
};
use common::{
    database::{DatabaseConfig, health_check, init_pool},
    documents::{DocumentStoreRef, MemoryDocumentStore, PgDocumentStore},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting catalog service");

    let config = ServerConfig::from_env()?;
    let store = init_store(config.store_backend).await?;

    let app_state = AppState::new(store);
    let app = create_router(app_state, &config.cors_allowed_origin)?;

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Catalog service listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Catalog service stopped");
    Ok(())
}

async fn init_store(backend: StoreBackend) -> Result<DocumentStoreRef> {
    match backend {
        StoreBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let pool = init_pool(&db_config).await?;

            // Check database connectivity
            if health_check(&pool).await? {
                info!("Database connection successful");
            } else {
                anyhow::bail!("Failed to connect to database");
            }

            let store = PgDocumentStore::new(pool);
            store.ensure_schema().await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            info!("Using in-memory document store; data is lost on restart");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down catalog service");
}
