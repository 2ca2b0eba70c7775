//! Main entry point for the trivia backend.
//!
//! This file initializes tracing, loads configuration, connects the
//! database pool, and serves the Axum application. It orchestrates the
//! application's startup and defines its overall structure.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use trivia_backend::api::{self, AppState};
use trivia_backend::config::Config;
use trivia_backend::database::{self, queries::PgCategoryStore, queries::PgQuestionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trivia_backend=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = database::connect(&config.database_url).await?;

    let state = AppState::new(
        Arc::new(PgQuestionStore::new(pool.clone())),
        Arc::new(PgCategoryStore::new(pool)),
    );
    let app = api::app(state);

    let addr = config.listen;
    tracing::debug!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
