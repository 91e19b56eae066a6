use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::types::ErrorBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Category with ID = {0} not found")]
    CategoryNotFound(Uuid),

    #[error("Category with ID = {0} is removed")]
    CategoryRemoved(Uuid),

    #[error("Category with ID = {0} isn't removed")]
    CategoryNotRemoved(Uuid),

    #[error("Product with ID = {0} not found")]
    ProductNotFound(Uuid),

    #[error("Product with ID = {0} is removed")]
    ProductRemoved(Uuid),

    #[error("Product with ID = {0} is not removed")]
    ProductNotRemoved(Uuid),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::CategoryNotFound(_) | AppError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            AppError::CategoryRemoved(_) | AppError::ProductRemoved(_) => StatusCode::LOCKED,
            AppError::CategoryNotRemoved(_) | AppError::ProductNotRemoved(_) => {
                StatusCode::CONFLICT
            }
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code sent as `errorCode`
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::CategoryNotFound(_) => "CATEGORY_NOT_FOUND",
            AppError::CategoryRemoved(_) => "CATEGORY_REMOVED",
            AppError::CategoryNotRemoved(_) => "CATEGORY_NOT_REMOVED",
            AppError::ProductNotFound(_) => "PRODUCT_NOT_FOUND",
            AppError::ProductRemoved(_) => "PRODUCT_REMOVED",
            AppError::ProductNotRemoved(_) => "PRODUCT_NOT_REMOVED",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Conflict(_) => "CONFLICT",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn description(&self) -> String {
        match self {
            AppError::Database(_) => "Database error occurred".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::Validation(msg)
            | AppError::BadRequest(msg)
            | AppError::Conflict(msg)
            | AppError::PayloadTooLarge(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(ref e) => tracing::error!("Database error: {:?}", e),
            AppError::Internal(ref msg) => tracing::error!("Internal error: {}", msg),
            ref other => tracing::debug!(error_code = other.error_code(), "{}", other),
        }

        let body = Json(ErrorBody {
            error_code: self.error_code().to_string(),
            description: self.description(),
        });

        (self.status(), body).into_response()
    }
}

/// Convert a store error into a more specific AppError
pub fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // Foreign key violation (PostgreSQL error code 23503)
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23503")) {
            return AppError::Conflict(
                "Record is still referenced by other records or references a missing one"
                    .to_string(),
            );
        }
    }

    tracing::error!("Database error: {:?}", e);
    AppError::Database(e)
}

pub type Result<T> = std::result::Result<T, AppError>;
