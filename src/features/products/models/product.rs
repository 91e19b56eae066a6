use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{types::Json, FromRow};
use uuid::Uuid;

use crate::core::error::AppError;
use crate::shared::characteristics::Characteristics;
use crate::shared::lifecycle::SoftDelete;

/// Database model for product, joined with the name of its category
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub characteristics: Json<Characteristics>,
    pub category_id: Uuid,
    pub category_name: String,
    pub is_removed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable product fields
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub characteristics: Characteristics,
    pub category_id: Uuid,
}

impl SoftDelete for Product {
    fn is_removed(&self) -> bool {
        self.is_removed
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::ProductNotFound(id)
    }

    fn removed(id: Uuid) -> AppError {
        AppError::ProductRemoved(id)
    }

    fn not_removed(id: Uuid) -> AppError {
        AppError::ProductNotRemoved(id)
    }
}
