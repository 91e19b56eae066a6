use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, middleware::from_fn, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::products::{routes as products_routes, ProductService};
use crate::shared::constants::API_PREFIX;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Catalog API with its HTTP layers. Swagger is merged separately.
pub fn build_app(
    category_service: Arc<CategoryService>,
    product_service: Arc<ProductService>,
    config: &AppConfig,
) -> Router {
    let api = Router::new()
        .merge(categories_routes::routes(category_service))
        .merge(products_routes::routes(product_service));

    Router::new()
        .nest(API_PREFIX, api)
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
        .layer(middleware::cors_layer(&config.cors_allowed_origins))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

/// Swagger UI and the OpenAPI document, behind basic auth when configured
pub fn swagger_router(config: &SwaggerConfig) -> Router {
    let mut openapi = ApiDoc::openapi();
    SwaggerInfoModifier {
        title: config.title.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
    }
    .modify(&mut openapi);

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    match config.credentials() {
        Some(credentials) => {
            tracing::info!("Swagger UI basic auth enabled");
            swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
        }
        None => {
            tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
            swagger
        }
    }
}
