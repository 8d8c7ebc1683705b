use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod rest;

use config::ServerConfig;
use db::TransactionStore;
use domain::TransactionService;
use rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    info!("Loading transactions");
    let store = TransactionStore::load(config.seed_file.as_deref())?;
    info!("Loaded {} transactions", store.len());

    let app = rest::router(AppState::new(TransactionService::new(store)));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    info!("Listening on {}", config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
