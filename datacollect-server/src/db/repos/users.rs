//! User repository

use async_trait::async_trait;
use sqlx::{FromRow, SqliteConnection};

use super::{delete_by_id, Repository};
use crate::db::{DbError, DbResult};
use crate::models::{EntityId, NewUser, User};

#[derive(FromRow)]
struct UserRecord {
    id: EntityId,
    name: String,
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
        }
    }
}

/// User repository
pub struct UserRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> UserRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> Repository for UserRepo<'c> {
    type Entity = User;
    type New = NewUser;

    async fn add(&mut self, new: NewUser) -> DbResult<User> {
        let record: UserRecord =
            sqlx::query_as("INSERT INTO users (name) VALUES (?) RETURNING id, name")
                .bind(&new.name)
                .fetch_one(&mut *self.conn)
                .await?;

        tracing::debug!(user_id = record.id, "Staged user insert");
        Ok(record.into())
    }

    async fn delete(&mut self, id: EntityId) -> DbResult<()> {
        delete_by_id(&mut *self.conn, "DELETE FROM users WHERE id = ?", "user_id", id).await?;
        tracing::debug!(user_id = id, "Staged user delete");
        Ok(())
    }

    async fn get_by_id(&mut self, id: EntityId) -> DbResult<User> {
        let record: UserRecord = sqlx::query_as("SELECT id, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::not_found("user_id", id))?;

        Ok(record.into())
    }

    async fn all(&mut self) -> DbResult<Vec<User>> {
        let records: Vec<UserRecord> = sqlx::query_as("SELECT id, name FROM users ORDER BY id")
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(records.into_iter().map(User::from).collect())
    }
}
