use std::sync::Arc;

use axum::{
    routing::{delete, get, patch},
    Router,
};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature, relative to the API prefix
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/categories/{id}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::remove_category),
        )
        .route("/categories/{id}/hard", delete(handlers::delete_category))
        .route(
            "/categories/{id}/restore",
            patch(handlers::restore_category),
        )
        .with_state(service)
}
