//! Custom Axum extractors
//!
//! Every rejection is an [`ApiError`], so malformed input is answered with
//! 422 before a handler runs.

use std::str::FromStr;

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use super::state::AppState;
use crate::db::UnitOfWork;
use crate::models::{EntityId, ValidationError};

/// JSON request body whose rejections map to 422
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ValidJson<T>(pub T);

/// Extract and validate a numeric entity id from path
pub struct ValidId(pub EntityId);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state).await?;

        let id = id.parse::<EntityId>().map_err(|_| {
            ApiError::from(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            })
        })?;

        Ok(Self(id))
    }
}

/// Extract a closed-set name (table config or view name) from path
pub struct ValidName<N>(pub N);

impl<S, N> FromRequestParts<S> for ValidName<N>
where
    S: Send + Sync,
    N: FromStr<Err = ValidationError> + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name): Path<String> = Path::from_request_parts(parts, state).await?;

        Ok(Self(name.parse()?))
    }
}

/// Request-scoped unit of work, opened from the factory in app state.
///
/// Dropped at the end of the request; handlers that mutate must commit.
impl FromRequestParts<AppState> for UnitOfWork {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(state.units_of_work().begin().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    use crate::models::TableConfigName;

    fn unrouted_parts(uri: &str) -> Parts {
        let (parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn missing_path_params_report_the_rejection() {
        let mut parts = unrouted_parts("/users/1");
        let err = match ValidId::from_request_parts(&mut parts, &()).await {
            Err(err) => err,
            Ok(ValidId(id)) => panic!("extracted id {id} without a matched route"),
        };

        match err {
            ApiError::Validation { message } => {
                assert!(!message.is_empty());
                assert!(!message.contains("cannot be empty"), "{message}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unrouted_name_is_validation_error() {
        let mut parts = unrouted_parts("/table-configs/by-name/FarmingPracticeConfig");
        let result =
            ValidName::<TableConfigName>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Validation { .. })));
    }
}
