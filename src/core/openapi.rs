use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::shared::types::ErrorBody;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::remove_category,
        categories_handlers::delete_category,
        categories_handlers::restore_category,
        // Products
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::create_product,
        products_handlers::update_product,
        products_handlers::remove_product,
        products_handlers::delete_product,
        products_handlers::restore_product,
    ),
    components(
        schemas(
            ErrorBody,
            categories_dtos::CreateUpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            products_dtos::CreateUpdateProductDto,
            products_dtos::ProductResponseDto,
            products_dtos::CategoryInProductDto,
        )
    ),
    tags(
        (name = "categories", description = "Product categories"),
        (name = "products", description = "Catalog products"),
    ),
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "Product catalog with categories and soft deletion",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
