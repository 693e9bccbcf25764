//! Row endpoints

use axum::{http::StatusCode, routing::get, Json, Router};

use crate::db::{Repository, UnitOfWork};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::state::AppState;
use crate::models::{NewRow, Row};

/// GET /rows - list all rows
async fn list_rows(mut uow: UnitOfWork) -> Result<Json<Vec<Row>>, ApiError> {
    Ok(Json(uow.rows().all().await?))
}

/// GET /rows/{id}
async fn get_row(ValidId(id): ValidId, mut uow: UnitOfWork) -> Result<Json<Row>, ApiError> {
    Ok(Json(uow.rows().get_by_id(id).await?))
}

/// POST /rows - 404 if the referenced table config is missing
async fn create_row(
    mut uow: UnitOfWork,
    ValidJson(new): ValidJson<NewRow>,
) -> Result<(StatusCode, Json<Row>), ApiError> {
    let row = uow.rows().add(new).await?;
    uow.commit().await?;

    tracing::info!(row_id = row.id, table_config_id = row.table_config_id, "Created row");
    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /rows/{id}
async fn delete_row(ValidId(id): ValidId, mut uow: UnitOfWork) -> Result<StatusCode, ApiError> {
    uow.rows().delete(id).await?;
    uow.commit().await?;

    tracing::info!(row_id = id, "Deleted row");
    Ok(StatusCode::NO_CONTENT)
}

/// Row routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rows", get(list_rows).post(create_row))
        .route("/rows/{id}", get(get_row).delete(delete_row))
}
