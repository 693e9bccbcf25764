//! Table view endpoints

use axum::{http::StatusCode, routing::get, Json, Router};

use crate::db::{NamedRepository, Repository, UnitOfWork};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson, ValidName};
use crate::http::state::AppState;
use crate::models::{NewTableView, TableView, TableViewName};

/// GET /table-views - list all table views
async fn list_table_views(mut uow: UnitOfWork) -> Result<Json<Vec<TableView>>, ApiError> {
    Ok(Json(uow.table_views().all().await?))
}

/// GET /table-views/{id}
async fn get_table_view(
    ValidId(id): ValidId,
    mut uow: UnitOfWork,
) -> Result<Json<TableView>, ApiError> {
    Ok(Json(uow.table_views().get_by_id(id).await?))
}

/// GET /table-views/by-name/{name}
async fn find_table_view(
    ValidName(name): ValidName<TableViewName>,
    mut uow: UnitOfWork,
) -> Result<Json<TableView>, ApiError> {
    Ok(Json(uow.table_views().find_by_name(name).await?))
}

/// POST /table-views - 404 if the referenced table config is missing
async fn create_table_view(
    mut uow: UnitOfWork,
    ValidJson(new): ValidJson<NewTableView>,
) -> Result<(StatusCode, Json<TableView>), ApiError> {
    let view = uow.table_views().add(new).await?;
    uow.commit().await?;

    tracing::info!(
        table_view_id = view.id,
        table_config_id = view.table_config_id,
        name = %view.name,
        "Created table view"
    );
    Ok((StatusCode::CREATED, Json(view)))
}

/// DELETE /table-views/{id}
async fn delete_table_view(
    ValidId(id): ValidId,
    mut uow: UnitOfWork,
) -> Result<StatusCode, ApiError> {
    uow.table_views().delete(id).await?;
    uow.commit().await?;

    tracing::info!(table_view_id = id, "Deleted table view");
    Ok(StatusCode::NO_CONTENT)
}

/// Table view routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/table-views", get(list_table_views).post(create_table_view))
        .route(
            "/table-views/{id}",
            get(get_table_view).delete(delete_table_view),
        )
        .route("/table-views/by-name/{name}", get(find_table_view))
}
