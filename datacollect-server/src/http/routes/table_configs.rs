//! Table config endpoints

use axum::{http::StatusCode, routing::get, Json, Router};

use crate::db::{NamedRepository, Repository, UnitOfWork};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson, ValidName};
use crate::http::state::AppState;
use crate::models::{NewTableConfig, TableConfig, TableConfigName};

/// GET /table-configs - list all table configs
async fn list_table_configs(mut uow: UnitOfWork) -> Result<Json<Vec<TableConfig>>, ApiError> {
    Ok(Json(uow.table_configs().all().await?))
}

/// GET /table-configs/{id}
async fn get_table_config(
    ValidId(id): ValidId,
    mut uow: UnitOfWork,
) -> Result<Json<TableConfig>, ApiError> {
    Ok(Json(uow.table_configs().get_by_id(id).await?))
}

/// GET /table-configs/by-name/{name}
async fn find_table_config(
    ValidName(name): ValidName<TableConfigName>,
    mut uow: UnitOfWork,
) -> Result<Json<TableConfig>, ApiError> {
    Ok(Json(uow.table_configs().find_by_name(name).await?))
}

/// POST /table-configs
async fn create_table_config(
    mut uow: UnitOfWork,
    ValidJson(new): ValidJson<NewTableConfig>,
) -> Result<(StatusCode, Json<TableConfig>), ApiError> {
    let config = uow.table_configs().add(new).await?;
    uow.commit().await?;

    tracing::info!(table_config_id = config.id, name = %config.name, "Created table config");
    Ok((StatusCode::CREATED, Json(config)))
}

/// DELETE /table-configs/{id} - views and rows referencing it are kept
async fn delete_table_config(
    ValidId(id): ValidId,
    mut uow: UnitOfWork,
) -> Result<StatusCode, ApiError> {
    uow.table_configs().delete(id).await?;
    uow.commit().await?;

    tracing::info!(table_config_id = id, "Deleted table config");
    Ok(StatusCode::NO_CONTENT)
}

/// Table config routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/table-configs",
            get(list_table_configs).post(create_table_config),
        )
        .route(
            "/table-configs/{id}",
            get(get_table_config).delete(delete_table_config),
        )
        .route("/table-configs/by-name/{name}", get(find_table_config))
}
