//! Pinboard HTTP server entrypoint.
//!
//! Wires configuration, the `PostgreSQL` repository, and the axum
//! router together, then serves until ctrl-c.

use anyhow::{Context, Result};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use pinboard::config::Config;
use pinboard::http;
use pinboard::message::adapters::postgres::{self, PostgresMessageRepository};
use pinboard::message::services::MessageBoardService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("connecting to database");
    let manager = ConnectionManager::<PgConnection>::new(config.database_url());
    let pool = Pool::builder()
        .max_size(config.pool_size())
        .build(manager)
        .context("failed to build connection pool")?;

    info!("applying database migrations");
    let mut connection = pool
        .get()
        .context("failed to obtain a connection for migrations")?;
    postgres::run_migrations(&mut connection).context("failed to apply migrations")?;
    drop(connection);

    let service = Arc::new(MessageBoardService::new(Arc::new(
        PostgresMessageRepository::new(pool),
    )));
    let app = http::router(service);

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .context("failed to bind listen address")?;
    info!("pinboard listening on {}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

/// Resolves when ctrl-c is received, triggering graceful shutdown.
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install ctrl-c handler");
    }
}
