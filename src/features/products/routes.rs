use std::sync::Arc;

use axum::{
    routing::{delete, get, patch},
    Router,
};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Create routes for the products feature, relative to the API prefix
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::remove_product),
        )
        .route("/products/{id}/hard", delete(handlers::delete_product))
        .route("/products/{id}/restore", patch(handlers::restore_product))
        .with_state(service)
}
