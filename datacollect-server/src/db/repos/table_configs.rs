//! Table config repository
//!
//! Names are unique; a second config with the same name fails with
//! `DbError::Conflict` from the UNIQUE constraint.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, SqliteConnection};

use super::{delete_by_id, NamedRepository, Repository};
use crate::db::{DbError, DbResult};
use crate::models::{EntityId, JsonObject, NewTableConfig, TableConfig, TableConfigName};

const COLUMNS: &str = "id, created_at, name, config_fields";

#[derive(FromRow)]
struct TableConfigRecord {
    id: EntityId,
    created_at: DateTime<Utc>,
    name: String,
    config_fields: Json<JsonObject>,
}

impl TryFrom<TableConfigRecord> for TableConfig {
    type Error = DbError;

    fn try_from(r: TableConfigRecord) -> Result<Self, Self::Error> {
        let name = r.name.parse::<TableConfigName>().map_err(|e| {
            DbError::Corrupt {
                table: "table_configs",
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            id: r.id,
            created_at: r.created_at,
            name,
            config_fields: r.config_fields.0,
        })
    }
}

/// Table config repository
pub struct TableConfigRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> TableConfigRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> Repository for TableConfigRepo<'c> {
    type Entity = TableConfig;
    type New = NewTableConfig;

    async fn add(&mut self, new: NewTableConfig) -> DbResult<TableConfig> {
        let sql = format!(
            "INSERT INTO table_configs (created_at, name, config_fields) VALUES (?, ?, ?) RETURNING {COLUMNS}"
        );
        let record: TableConfigRecord = sqlx::query_as(&sql)
            .bind(Utc::now())
            .bind(new.name.as_str())
            .bind(Json(&new.config_fields))
            .fetch_one(&mut *self.conn)
            .await
            .map_err(|e| DbError::on_insert(e, "table config name", new.name.as_str()))?;

        tracing::debug!(table_config_id = record.id, name = %new.name, "Staged table config insert");
        record.try_into()
    }

    async fn delete(&mut self, id: EntityId) -> DbResult<()> {
        delete_by_id(
            &mut *self.conn,
            "DELETE FROM table_configs WHERE id = ?",
            "table_config_id",
            id,
        )
        .await?;
        tracing::debug!(table_config_id = id, "Staged table config delete");
        Ok(())
    }

    async fn get_by_id(&mut self, id: EntityId) -> DbResult<TableConfig> {
        let sql = format!("SELECT {COLUMNS} FROM table_configs WHERE id = ?");
        let record: TableConfigRecord = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::not_found("table_config_id", id))?;

        record.try_into()
    }

    async fn all(&mut self) -> DbResult<Vec<TableConfig>> {
        let sql = format!("SELECT {COLUMNS} FROM table_configs ORDER BY id");
        let records: Vec<TableConfigRecord> =
            sqlx::query_as(&sql).fetch_all(&mut *self.conn).await?;

        records.into_iter().map(TableConfig::try_from).collect()
    }
}

#[async_trait]
impl<'c> NamedRepository for TableConfigRepo<'c> {
    type Name = TableConfigName;

    async fn find_by_name(&mut self, name: TableConfigName) -> DbResult<TableConfig> {
        let sql = format!("SELECT {COLUMNS} FROM table_configs WHERE name = ?");
        let record: TableConfigRecord = sqlx::query_as(&sql)
            .bind(name.as_str())
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| DbError::not_found("table config name", name))?;

        record.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{farming_config, temp_factory};

    #[tokio::test]
    async fn add_assigns_id_and_timestamp() {
        let (_dir, factory) = temp_factory().await;
        let mut uow = factory.begin().await.unwrap();

        let before = Utc::now();
        let config = uow.table_configs().add(farming_config()).await.unwrap();

        assert!(config.id > 0);
        assert!(config.created_at >= before);
        assert_eq!(config.name, TableConfigName::FarmingPracticeConfig);
        assert_eq!(config.config_fields, farming_config().config_fields);
    }

    #[tokio::test]
    async fn find_by_name() {
        let (_dir, factory) = temp_factory().await;
        let mut uow = factory.begin().await.unwrap();

        let err = uow
            .table_configs()
            .find_by_name(TableConfigName::FarmingPracticeConfig)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));

        let created = uow.table_configs().add(farming_config()).await.unwrap();
        let found = uow
            .table_configs()
            .find_by_name(TableConfigName::FarmingPracticeConfig)
            .await
            .unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn duplicate_name_is_conflict() {
        let (_dir, factory) = temp_factory().await;
        let mut uow = factory.begin().await.unwrap();

        uow.table_configs().add(farming_config()).await.unwrap();
        let err = uow.table_configs().add(farming_config()).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { .. }));
    }

    #[tokio::test]
    async fn unknown_stored_name_is_corrupt() {
        let (_dir, factory) = temp_factory().await;
        let mut uow = factory.begin().await.unwrap();

        sqlx::query("INSERT INTO table_configs (created_at, name) VALUES (?, 'Retired')")
            .bind(Utc::now())
            .execute(uow.connection())
            .await
            .unwrap();

        let err = uow.table_configs().all().await.unwrap_err();
        assert!(matches!(err, DbError::Corrupt { table: "table_configs", .. }));
    }
}
