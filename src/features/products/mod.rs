//! Catalog products.
//!
//! Every product belongs to one category. Creating or editing a product
//! requires that category to exist and be active; those failures are reported
//! as category errors.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/products?categoryId=` | List active products |
//! | GET | `/api/v1/products/{id}` | Get an active product |
//! | POST | `/api/v1/products` | Create a product |
//! | PUT | `/api/v1/products/{id}` | Replace an active product |
//! | DELETE | `/api/v1/products/{id}` | Soft delete |
//! | DELETE | `/api/v1/products/{id}/hard` | Hard delete |
//! | PATCH | `/api/v1/products/{id}/restore` | Restore a soft-deleted product |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::ProductService;
