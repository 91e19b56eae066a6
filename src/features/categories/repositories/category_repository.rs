use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{handle_db_error, Result};
use crate::features::categories::models::Category;
use crate::shared::lifecycle::SoftDeleteStore;

/// Persistence interface for categories
#[async_trait]
pub trait CategoryRepository: SoftDeleteStore<Category> {
    async fn find_all_active(&self) -> Result<Vec<Category>>;

    async fn insert(&self, name: &str) -> Result<Category>;

    /// Rename a category that is still active. Returns `None` when no active
    /// row matched.
    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<Category>>;
}

pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SoftDeleteStore<Category> for PgCategoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, is_removed, created_at, updated_at
            FROM category
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn set_removed(&self, id: Uuid, removed: bool) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE category
            SET is_removed = $2, updated_at = NOW()
            WHERE id = $1 AND is_removed <> $2
            RETURNING id, name, is_removed, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(removed)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            DELETE FROM category
            WHERE id = $1
            RETURNING id, name, is_removed, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_all_active(&self) -> Result<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, is_removed, created_at, updated_at
            FROM category
            WHERE is_removed = FALSE
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(handle_db_error)
    }

    async fn insert(&self, name: &str) -> Result<Category> {
        let mut tx = self.pool.begin().await.map_err(handle_db_error)?;

        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO category (name)
            VALUES ($1)
            RETURNING id, name, is_removed, created_at, updated_at
            "#,
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await
        .map_err(handle_db_error)?;

        tx.commit().await.map_err(handle_db_error)?;

        Ok(category)
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE category
            SET name = $2, updated_at = NOW()
            WHERE id = $1 AND is_removed = FALSE
            RETURNING id, name, is_removed, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(handle_db_error)
    }
}
