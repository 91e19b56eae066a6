use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::categories::dtos::{CategoryResponseDto, CreateUpdateCategoryDto};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorBody;

/// List all active categories
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let categories = service.list().await?;
    Ok(Json(categories))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 423, description = "Category is removed", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.get_by_id(id).await?;
    Ok(Json(category))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/v1/categories",
    request_body = CreateUpdateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryResponseDto),
        (status = 400, description = "Validation error", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateUpdateCategoryDto>,
) -> Result<(StatusCode, Json<CategoryResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Rename a category
#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = CreateUpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponseDto),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 423, description = "Category is removed", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<CreateUpdateCategoryDto>,
) -> Result<Json<CategoryResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = service.update_by_id(id, dto).await?;
    Ok(Json(category))
}

/// Remove a category (soft delete)
#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category removed", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 423, description = "Category is already removed", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn remove_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.remove(id).await?;
    Ok(Json(category))
}

/// Delete a category permanently
#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}/hard",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 409, description = "Category still has products", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.delete(id).await?;
    Ok(Json(category))
}

/// Restore a removed category
#[utoipa::path(
    patch,
    path = "/api/v1/categories/{id}/restore",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category restored", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 409, description = "Category is not removed", body = ErrorBody)
    ),
    tag = "categories"
)]
pub async fn restore_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.restore_by_id(id).await?;
    Ok(Json(category))
}
