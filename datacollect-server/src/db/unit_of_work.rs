//! Unit of work - one storage transaction per request scope
//!
//! The unit of work owns every commit. Repositories handed out by
//! [`UnitOfWork`] run inside its transaction and only stage changes:
//! nothing is durable until [`UnitOfWork::commit`] is called, and dropping
//! the unit of work without committing rolls everything back.

use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

use super::repos::{RowRepo, TableConfigRepo, TableViewRepo, UserRepo};
use super::DbResult;

/// Opens units of work; built once at startup and shared through app state.
#[derive(Debug, Clone)]
pub struct UnitOfWorkFactory {
    pool: SqlitePool,
}

impl UnitOfWorkFactory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Open a storage session and start a transaction on it.
    pub async fn begin(&self) -> DbResult<UnitOfWork> {
        let tx = self.pool.begin().await?;
        Ok(UnitOfWork { tx })
    }
}

/// Scoped transactional context binding the four repositories.
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

impl UnitOfWork {
    pub fn users(&mut self) -> UserRepo<'_> {
        UserRepo::new(&mut self.tx)
    }

    pub fn table_configs(&mut self) -> TableConfigRepo<'_> {
        TableConfigRepo::new(&mut self.tx)
    }

    pub fn table_views(&mut self) -> TableViewRepo<'_> {
        TableViewRepo::new(&mut self.tx)
    }

    pub fn rows(&mut self) -> RowRepo<'_> {
        RowRepo::new(&mut self.tx)
    }

    /// Raw access to the transaction connection.
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Make every staged change durable.
    pub async fn commit(self) -> DbResult<()> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Discard every staged change. Dropping has the same effect.
    pub async fn rollback(self) -> DbResult<()> {
        self.tx.rollback().await?;
        Ok(())
    }
}
