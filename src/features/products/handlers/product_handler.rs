use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::products::dtos::{
    CreateUpdateProductDto, ListProductsQuery, ProductResponseDto,
};
use crate::features::products::services::ProductService;
use crate::shared::types::ErrorBody;

/// List active products
#[utoipa::path(
    get,
    path = "/api/v1/products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "List of products", body = Vec<ProductResponseDto>),
        (status = 400, description = "Invalid query", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 423, description = "Category is removed", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn list_products(
    State(service): State<Arc<ProductService>>,
    AppQuery(query): AppQuery<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let products = service.get_all(query.category_id).await?;
    Ok(Json(products))
}

/// Get product by ID
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponseDto),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 423, description = "Product is removed", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn get_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(product))
}

/// Create a product in an active category
#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateUpdateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductResponseDto),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 404, description = "Category not found", body = ErrorBody),
        (status = 423, description = "Category is removed", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn create_product(
    State(service): State<Arc<ProductService>>,
    AppJson(dto): AppJson<CreateUpdateProductDto>,
) -> Result<(StatusCode, Json<ProductResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = CreateUpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductResponseDto),
        (status = 400, description = "Validation error", body = ErrorBody),
        (status = 404, description = "Product or category not found", body = ErrorBody),
        (status = 423, description = "Product or category is removed", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn update_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<CreateUpdateProductDto>,
) -> Result<Json<ProductResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let product = service.update_by_id(id, dto).await?;
    Ok(Json(product))
}

/// Remove a product (soft delete)
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product removed", body = ProductResponseDto),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 423, description = "Product is already removed", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn remove_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.remove_by_id(id).await?;
    Ok(Json(product))
}

/// Delete a product permanently
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}/hard",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ProductResponseDto),
        (status = 404, description = "Product not found", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn delete_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.delete_by_id(id).await?;
    Ok(Json(product))
}

/// Restore a removed product
#[utoipa::path(
    patch,
    path = "/api/v1/products/{id}/restore",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product restored", body = ProductResponseDto),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 409, description = "Product is not removed", body = ErrorBody)
    ),
    tag = "products"
)]
pub async fn restore_product(
    State(service): State<Arc<ProductService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ProductResponseDto>> {
    let product = service.restore_by_id(id).await?;
    Ok(Json(product))
}
