use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::core::error::{handle_db_error, Result};
use crate::features::products::models::{NewProduct, Product};
use crate::shared::lifecycle::SoftDeleteStore;

/// Persistence interface for products
#[async_trait]
pub trait ProductRepository: SoftDeleteStore<Product> {
    /// Active products, optionally restricted to one category
    async fn find_all_active(&self, category_id: Option<Uuid>) -> Result<Vec<Product>>;

    async fn insert(&self, product: &NewProduct) -> Result<Product>;

    /// Overwrite an active product. Returns `None` when no active row matched.
    async fn update(&self, id: Uuid, product: &NewProduct) -> Result<Option<Product>>;
}

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Wraps a statement that returns `product` rows (named `p`) and joins the
/// owning category's name.
fn with_category(statement: &str) -> String {
    format!(
        r#"
        WITH p AS ({statement})
        SELECT p.id, p.title, p.description, p.price, p.characteristics,
               p.category_id, c.name AS category_name,
               p.is_removed, p.created_at, p.updated_at
        FROM p
        JOIN category c ON c.id = p.category_id
        "#
    )
}

#[async_trait]
impl SoftDeleteStore<Product> for PgProductRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>> {
        let query = with_category("SELECT * FROM product WHERE id = $1");

        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn set_removed(&self, id: Uuid, removed: bool) -> Result<Option<Product>> {
        let query = with_category(
            r#"
            UPDATE product
            SET is_removed = $2, updated_at = NOW()
            WHERE id = $1 AND is_removed <> $2
            RETURNING *
            "#,
        );

        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(removed)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Product>> {
        let query = with_category("DELETE FROM product WHERE id = $1 RETURNING *");

        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all_active(&self, category_id: Option<Uuid>) -> Result<Vec<Product>> {
        let query = format!(
            "{} ORDER BY p.created_at, p.id",
            with_category(
                r#"
                SELECT * FROM product
                WHERE is_removed = FALSE
                  AND ($1::uuid IS NULL OR category_id = $1)
                "#,
            )
        );

        sqlx::query_as::<_, Product>(&query)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product> {
        let query = with_category(
            r#"
            INSERT INTO product (title, description, price, characteristics, category_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        );

        sqlx::query_as::<_, Product>(&query)
            .bind(&product.title)
            .bind(&product.description)
            .bind(product.price)
            .bind(Json(&product.characteristics))
            .bind(product.category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn update(&self, id: Uuid, product: &NewProduct) -> Result<Option<Product>> {
        let query = with_category(
            r#"
            UPDATE product
            SET title = $2, description = $3, price = $4, characteristics = $5,
                category_id = $6, updated_at = NOW()
            WHERE id = $1 AND is_removed = FALSE
            RETURNING *
            "#,
        );

        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&product.title)
            .bind(&product.description)
            .bind(product.price)
            .bind(Json(&product.characteristics))
            .bind(product.category_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }
}
