//! Repository implementations for database access
//!
//! Each repository borrows the connection of an open unit of work and
//! follows these patterns:
//! - Writes are staged in the caller's transaction, never committed here
//! - Inserts use RETURNING so the stored entity is read back in one query
//! - Deletes check rows affected instead of looking the record up first
//! - Every write transaction starts with its write, never a read

use async_trait::async_trait;
use sqlx::SqliteConnection;

use super::{DbError, DbResult};
use crate::models::EntityId;

pub mod users;
pub mod table_configs;
pub mod table_views;
pub mod rows;

pub use users::UserRepo;
pub use table_configs::TableConfigRepo;
pub use table_views::TableViewRepo;
pub use rows::RowRepo;

/// Capabilities shared by every repository.
#[async_trait]
pub trait Repository: Send {
    /// Stored entity
    type Entity: Send;
    /// Request body the entity is created from
    type New: Send;

    /// Persist a new record and return it with identity assigned.
    async fn add(&mut self, new: Self::New) -> DbResult<Self::Entity>;

    /// Remove a record. `NotFound` if absent; dependents are left in place.
    async fn delete(&mut self, id: EntityId) -> DbResult<()>;

    /// Fetch a record or fail with `NotFound`.
    async fn get_by_id(&mut self, id: EntityId) -> DbResult<Self::Entity>;

    /// Every record, ordered by id.
    async fn all(&mut self) -> DbResult<Vec<Self::Entity>>;
}

/// Repositories whose records carry a unique name.
#[async_trait]
pub trait NamedRepository: Repository {
    type Name: Send;

    /// Fetch the record with this name or fail with `NotFound`.
    async fn find_by_name(&mut self, name: Self::Name) -> DbResult<Self::Entity>;
}

/// Guard appended to `INSERT ... SELECT` so the reference check and the
/// write are one statement. The insert yields no row when the config is
/// missing, and the first statement of the transaction takes the write lock.
pub(crate) const WHERE_CONFIG_EXISTS: &str =
    "WHERE EXISTS (SELECT 1 FROM table_configs WHERE id = ?)";

/// Delete by id, mapping zero affected rows to `NotFound`.
pub(crate) async fn delete_by_id(
    conn: &mut SqliteConnection,
    sql: &'static str,
    field: &'static str,
    id: EntityId,
) -> DbResult<()> {
    let result = sqlx::query(sql).bind(id).execute(&mut *conn).await?;
    if result.rows_affected() == 0 {
        return Err(DbError::not_found(field, id));
    }
    Ok(())
}
