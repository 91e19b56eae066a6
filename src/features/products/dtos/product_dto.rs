use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::products::models::{NewProduct, Product};
use crate::shared::characteristics::{validate_characteristics, Characteristics};
use crate::shared::validation::{validate_not_blank, validate_price};

/// Query params for listing products
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// Only return products of this category
    pub category_id: Option<Uuid>,
}

/// Request DTO for creating or replacing a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpdateProductDto {
    #[validate(
        length(min = 1, max = 255, message = "Title must be 1-255 characters"),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Oneplus 9R")]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: String,

    /// Exact decimal amount. JSON numbers are read digit for digit, never
    /// through a float.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64, example = 25000.00)]
    pub price: Decimal,

    /// Free-form attributes with string, number, boolean or null values
    #[serde(default)]
    #[validate(custom(function = "validate_characteristics"))]
    #[schema(value_type = Object)]
    pub characteristics: Characteristics,

    pub category_id: Uuid,
}

impl From<CreateUpdateProductDto> for NewProduct {
    fn from(dto: CreateUpdateProductDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            description: dto.description,
            price: dto.price,
            characteristics: dto.characteristics,
            category_id: dto.category_id,
        }
    }
}

/// Category summary embedded in product responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryInProductDto {
    pub id: Uuid,
    pub name: String,
}

/// Response DTO for product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseDto {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[schema(value_type = f64, example = 25000.00)]
    pub price: Decimal,
    #[schema(value_type = Object)]
    pub characteristics: Characteristics,
    pub category: CategoryInProductDto,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            created_at: p.created_at,
            updated_at: p.updated_at,
            title: p.title,
            description: p.description,
            price: p.price,
            characteristics: p.characteristics.0,
            category: CategoryInProductDto {
                id: p.category_id,
                name: p.category_name,
            },
        }
    }
}
