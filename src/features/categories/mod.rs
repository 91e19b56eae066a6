//! Product categories.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/v1/categories` | List active categories |
//! | GET | `/api/v1/categories/{id}` | Get an active category |
//! | POST | `/api/v1/categories` | Create a category |
//! | PUT | `/api/v1/categories/{id}` | Rename an active category |
//! | DELETE | `/api/v1/categories/{id}` | Soft delete |
//! | DELETE | `/api/v1/categories/{id}/hard` | Hard delete |
//! | PATCH | `/api/v1/categories/{id}/restore` | Restore a soft-deleted category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use services::CategoryService;
