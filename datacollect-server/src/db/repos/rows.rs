//! Row repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, SqliteConnection};

use super::{delete_by_id, Repository, WHERE_CONFIG_EXISTS};
use crate::db::{DbError, DbResult};
use crate::models::{EntityId, JsonObject, NewRow, Row};

const COLUMNS: &str = "id, created_at, table_config_id, data";

#[derive(FromRow)]
struct RowRecord {
    id: EntityId,
    created_at: DateTime<Utc>,
    table_config_id: EntityId,
    data: Json<JsonObject>,
}

impl From<RowRecord> for Row {
    fn from(r: RowRecord) -> Self {
        Self {
            id: r.id,
            created_at: r.created_at,
            table_config_id: r.table_config_id,
            data: r.data.0,
        }
    }
}

/// Row repository
pub struct RowRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> RowRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> Repository for RowRepo<'c> {
    type Entity = Row;
    type New = NewRow;

    /// Fails with `NotFound` when the referenced config does not exist.
    async fn add(&mut self, new: NewRow) -> DbResult<Row> {
        let sql = format!(
            "INSERT INTO data_rows (created_at, table_config_id, data) \
             SELECT ?, ?, ? {WHERE_CONFIG_EXISTS} RETURNING {COLUMNS}"
        );
        let record: RowRecord = sqlx::query_as(&sql)
            .bind(Utc::now())
            .bind(new.table_config_id)
            .bind(Json(&new.data))
            .bind(new.table_config_id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::not_found("table_config_id", new.table_config_id))?;

        tracing::debug!(
            row_id = record.id,
            table_config_id = record.table_config_id,
            "Staged row insert"
        );
        Ok(record.into())
    }

    async fn delete(&mut self, id: EntityId) -> DbResult<()> {
        delete_by_id(&mut *self.conn, "DELETE FROM data_rows WHERE id = ?", "row_id", id).await?;
        tracing::debug!(row_id = id, "Staged row delete");
        Ok(())
    }

    async fn get_by_id(&mut self, id: EntityId) -> DbResult<Row> {
        let sql = format!("SELECT {COLUMNS} FROM data_rows WHERE id = ?");
        let record: RowRecord = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::not_found("row_id", id))?;

        Ok(record.into())
    }

    async fn all(&mut self) -> DbResult<Vec<Row>> {
        let sql = format!("SELECT {COLUMNS} FROM data_rows ORDER BY id");
        let records: Vec<RowRecord> = sqlx::query_as(&sql).fetch_all(&mut *self.conn).await?;

        Ok(records.into_iter().map(Row::from).collect())
    }
}
