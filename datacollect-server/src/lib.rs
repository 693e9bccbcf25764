//! datacollect-server: HTTP CRUD service for data collection tables
//!
//! Users, table configs, table views and rows of free-form JSON, stored in a
//! single SQLite file. Each request runs in its own unit of work.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, DatacollectConfig};
pub use db::{DbError, UnitOfWork, UnitOfWorkFactory};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};

/// Open the database at the configured path and serve until shutdown.
pub async fn serve(config: &DatacollectConfig) -> Result<(), Error> {
    let pool = db::open(&config.database.path, config.database.max_connections).await?;

    let server_config = ServerConfig {
        bind_addr: config.server.bind,
        cors_permissive: config.server.cors_permissive,
    };
    run_server(pool, server_config).await?;
    Ok(())
}

/// Top-level error for [`serve`]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Server(#[from] ServerError),
}
