//! Database connection pool management
//!
//! Uses a sqlx `SqlitePool` over a single database file.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const SCHEMA: &str = include_str!("schema.sql");

/// Create a SQLite connection pool, creating the file if missing.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// database cannot be opened.
///
/// # Arguments
///
/// * `path` - Database file path
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    path: &Path,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal)
        // References to table_configs are checked at creation only
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Create all tables if absent.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::debug!("Applying database schema");
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Open the database file and make sure the schema exists.
pub async fn open(path: &Path, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!(path = %path.display(), "Opening database");
    let pool = create_pool_with_options(path, max_connections).await?;
    init_schema(&pool).await?;
    Ok(pool)
}
