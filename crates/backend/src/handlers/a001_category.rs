use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_category::aggregate::{Category, CategoryId};
use contracts::shared::filter::ListQuery;
use serde_json::json;

use crate::domain::a001_category::{self, CategoryError};
use crate::shared::data::db::get_connection;

/// Map a service error to the HTTP status the client sees.
fn error_status(err: anyhow::Error) -> StatusCode {
    match err.downcast_ref::<CategoryError>() {
        Some(CategoryError::Validation(msg)) => {
            tracing::warn!("Category request rejected: {}", msg);
            StatusCode::BAD_REQUEST
        }
        Some(CategoryError::NotFound(_)) => StatusCode::NOT_FOUND,
        Some(CategoryError::AlreadyExists(_)) => StatusCode::CONFLICT,
        None => {
            tracing::error!("Category request failed: {:#}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// GET /api/categories
pub async fn list(Query(query): Query<ListQuery>) -> Result<Json<Vec<Category>>, StatusCode> {
    a001_category::service::list(get_connection(), &query)
        .await
        .map(Json)
        .map_err(error_status)
}

/// GET /api/categories/:id
pub async fn get_by_id(Path(id): Path<i32>) -> Result<Json<Category>, StatusCode> {
    match a001_category::service::get_by_id(get_connection(), CategoryId::new(id)).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(error_status(e)),
    }
}

/// POST /api/categories
pub async fn create(
    Json(dto): Json<Category>,
) -> Result<(StatusCode, Json<serde_json::Value>), StatusCode> {
    let id = a001_category::service::create(get_connection(), dto)
        .await
        .map_err(error_status)?;
    Ok((StatusCode::CREATED, Json(json!({ "ID": id }))))
}

/// PUT /api/categories/:id
pub async fn update(Path(id): Path<i32>, Json(dto): Json<Category>) -> Result<StatusCode, StatusCode> {
    a001_category::service::update(get_connection(), CategoryId::new(id), dto)
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(error_status)
}

/// DELETE /api/categories/:id
pub async fn delete(Path(id): Path<i32>) -> Result<StatusCode, StatusCode> {
    a001_category::service::delete(get_connection(), CategoryId::new(id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(error_status)
}

/// POST /api/categories/testdata
pub async fn insert_test_data() -> StatusCode {
    match a001_category::service::insert_test_data(get_connection()).await {
        Ok(n) => {
            tracing::info!("Inserted {} demo categories", n);
            StatusCode::OK
        }
        Err(e) => error_status(e),
    }
}
