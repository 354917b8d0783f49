// ABOUTME: Server bootstrap for the linkedpush binary
// ABOUTME: Logging setup, user store connection, and the HTTP listener

use std::net::SocketAddr;

use anyhow::Context;
use linkedpush_api::{create_router, AppState};
use linkedpush_config::AppConfig;
use linkedpush_users::UserStorage;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::info;

/// Structured logging, `info` unless RUST_LOG says otherwise
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();
}

/// Open the user store and bring its schema up to date
pub async fn connect_users(database_url: &str) -> anyhow::Result<UserStorage> {
    let mut options = SqlitePoolOptions::new();
    if database_url.contains(":memory:") {
        // Each connection to an in-memory database gets its own empty schema.
        options = options.max_connections(1);
    }

    let pool = options
        .connect(database_url)
        .await
        .with_context(|| format!("Failed to open database at {}", database_url))?;

    let users = UserStorage::new(pool);
    users.migrate().await.context("Failed to run user migrations")?;
    Ok(users)
}

/// Application state whose user store is never touched until first query
pub fn lazy_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = SqlitePoolOptions::new()
        .connect_lazy(&config.database_url)
        .with_context(|| format!("Invalid database URL {}", config.database_url))?;
    Ok(AppState::from_config(config, UserStorage::new(pool)))
}

pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let users = connect_users(&config.database_url).await?;
    let app = create_router(AppState::from_config(&config, users));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;

    info!(
        "Posting with {} visibility",
        if config.production { "PUBLIC" } else { "CONNECTIONS" }
    );
    info!("✅ Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
