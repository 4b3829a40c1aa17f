use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sqlx::SqlitePool;

use crate::api::errors::ApiError;
use crate::domain::driver::Driver;
use crate::domain::repositories::{GenericRepository, UnitOfWork};
use crate::infrastructure::SqliteUnitOfWork;

/// List every driver
///
/// GET /drivers
pub async fn list_drivers(State(pool): State<SqlitePool>) -> Result<Json<Vec<Driver>>, ApiError> {
    let uow = SqliteUnitOfWork::begin(&pool).await?;
    let drivers = uow.drivers().all().await?;

    Ok(Json(drivers))
}

/// Get a driver by ID
///
/// GET /drivers/:id
pub async fn get_driver(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Driver>, ApiError> {
    let uow = SqliteUnitOfWork::begin(&pool).await?;
    let driver = uow
        .drivers()
        .get_by_id(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(driver))
}

/// Create a driver; any ID in the body is ignored
///
/// POST /drivers
pub async fn create_driver(
    State(pool): State<SqlitePool>,
    Json(mut driver): Json<Driver>,
) -> Result<StatusCode, ApiError> {
    driver.clear_id();

    let uow = SqliteUnitOfWork::begin(&pool).await?;
    uow.drivers().add(driver).await;
    uow.complete().await?;

    Ok(StatusCode::OK)
}

/// Delete a driver
///
/// DELETE /drivers/:id
pub async fn delete_driver(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let uow = SqliteUnitOfWork::begin(&pool).await?;
    let driver = uow
        .drivers()
        .get_by_id(id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    uow.drivers().delete(driver).await;
    uow.complete().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Update name, number and team of an existing driver
///
/// PUT /drivers
pub async fn update_driver(
    State(pool): State<SqlitePool>,
    Json(driver): Json<Driver>,
) -> Result<StatusCode, ApiError> {
    let uow = SqliteUnitOfWork::begin(&pool).await?;
    let mut existing = uow
        .drivers()
        .get_by_id(driver.id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    existing.apply_changes(&driver);
    uow.drivers().update(existing).await;
    uow.complete().await?;

    Ok(StatusCode::NO_CONTENT)
}
