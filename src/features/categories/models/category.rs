use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::shared::lifecycle::SoftDelete;

/// Database model for category
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub is_removed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SoftDelete for Category {
    fn is_removed(&self) -> bool {
        self.is_removed
    }

    fn not_found(id: Uuid) -> AppError {
        AppError::CategoryNotFound(id)
    }

    fn removed(id: Uuid) -> AppError {
        AppError::CategoryRemoved(id)
    }

    fn not_removed(id: Uuid) -> AppError {
        AppError::CategoryNotRemoved(id)
    }
}
