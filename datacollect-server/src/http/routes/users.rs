//! User endpoints

use axum::{http::StatusCode, routing::get, Json, Router};

use crate::db::{Repository, UnitOfWork};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::state::AppState;
use crate::models::{NewUser, User};

/// GET /users - list all users
async fn list_users(mut uow: UnitOfWork) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(uow.users().all().await?))
}

/// GET /users/{id}
async fn get_user(ValidId(id): ValidId, mut uow: UnitOfWork) -> Result<Json<User>, ApiError> {
    Ok(Json(uow.users().get_by_id(id).await?))
}

/// POST /users
async fn create_user(
    mut uow: UnitOfWork,
    ValidJson(new): ValidJson<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = uow.users().add(new).await?;
    uow.commit().await?;

    tracing::info!(user_id = user.id, "Created user");
    Ok((StatusCode::CREATED, Json(user)))
}

/// DELETE /users/{id}
async fn delete_user(ValidId(id): ValidId, mut uow: UnitOfWork) -> Result<StatusCode, ApiError> {
    uow.users().delete(id).await?;
    uow.commit().await?;

    tracing::info!(user_id = id, "Deleted user");
    Ok(StatusCode::NO_CONTENT)
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).delete(delete_user))
}
