//! Table view repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, SqliteConnection};

use super::{delete_by_id, NamedRepository, Repository, WHERE_CONFIG_EXISTS};
use crate::db::{DbError, DbResult};
use crate::models::{EntityId, JsonObject, NewTableView, TableView, TableViewName};

const COLUMNS: &str = "id, created_at, name, table_config_id, view_fields";

#[derive(FromRow)]
struct TableViewRecord {
    id: EntityId,
    created_at: DateTime<Utc>,
    name: String,
    table_config_id: EntityId,
    view_fields: Json<JsonObject>,
}

impl TryFrom<TableViewRecord> for TableView {
    type Error = DbError;

    fn try_from(r: TableViewRecord) -> Result<Self, Self::Error> {
        let name = r.name.parse::<TableViewName>().map_err(|e| {
            DbError::Corrupt {
                table: "table_views",
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            id: r.id,
            created_at: r.created_at,
            name,
            table_config_id: r.table_config_id,
            view_fields: r.view_fields.0,
        })
    }
}

/// Table view repository
pub struct TableViewRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> TableViewRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> Repository for TableViewRepo<'c> {
    type Entity = TableView;
    type New = NewTableView;

    /// Fails with `NotFound` when the referenced config does not exist.
    async fn add(&mut self, new: NewTableView) -> DbResult<TableView> {
        let sql = format!(
            "INSERT INTO table_views (created_at, name, table_config_id, view_fields) \
             SELECT ?, ?, ?, ? {WHERE_CONFIG_EXISTS} RETURNING {COLUMNS}"
        );
        let record: TableViewRecord = sqlx::query_as(&sql)
            .bind(Utc::now())
            .bind(new.name.as_str())
            .bind(new.table_config_id)
            .bind(Json(&new.view_fields))
            .bind(new.table_config_id)
            .fetch_optional(&mut *self.conn)
            .await
            .map_err(|e| DbError::on_insert(e, "table view name", new.name.as_str()))?
            .ok_or_else(|| DbError::not_found("table_config_id", new.table_config_id))?;

        tracing::debug!(
            table_view_id = record.id,
            table_config_id = record.table_config_id,
            "Staged table view insert"
        );
        record.try_into()
    }

    async fn delete(&mut self, id: EntityId) -> DbResult<()> {
        delete_by_id(
            &mut *self.conn,
            "DELETE FROM table_views WHERE id = ?",
            "table_view_id",
            id,
        )
        .await?;
        tracing::debug!(table_view_id = id, "Staged table view delete");
        Ok(())
    }

    async fn get_by_id(&mut self, id: EntityId) -> DbResult<TableView> {
        let sql = format!("SELECT {COLUMNS} FROM table_views WHERE id = ?");
        let record: TableViewRecord = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::not_found("table_view_id", id))?;

        record.try_into()
    }

    async fn all(&mut self) -> DbResult<Vec<TableView>> {
        let sql = format!("SELECT {COLUMNS} FROM table_views ORDER BY id");
        let records: Vec<TableViewRecord> =
            sqlx::query_as(&sql).fetch_all(&mut *self.conn).await?;

        records.into_iter().map(TableView::try_from).collect()
    }
}

#[async_trait]
impl<'c> NamedRepository for TableViewRepo<'c> {
    type Name = TableViewName;

    async fn find_by_name(&mut self, name: TableViewName) -> DbResult<TableView> {
        let sql = format!("SELECT {COLUMNS} FROM table_views WHERE name = ?");
        let record: TableViewRecord = sqlx::query_as(&sql)
            .bind(name.as_str())
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::not_found("table view name", name))?;

        record.try_into()
    }
}
