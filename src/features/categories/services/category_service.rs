use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::categories::dtos::{CategoryResponseDto, CreateUpdateCategoryDto};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::{CategoryRepository, PgCategoryRepository};
use crate::shared::lifecycle;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgCategoryRepository::new(pool)))
    }

    pub fn with_repository(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// List all active categories
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.repository.find_all_active().await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Resolve a category that must exist and not be removed.
    ///
    /// Other features call this before attaching records to a category.
    pub async fn ensure_active(&self, id: Uuid) -> Result<Category> {
        lifecycle::get_active::<Category, _>(self.repository.as_ref(), id).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CategoryResponseDto> {
        Ok(self.ensure_active(id).await?.into())
    }

    pub async fn create(&self, dto: CreateUpdateCategoryDto) -> Result<CategoryResponseDto> {
        let category = self.repository.insert(dto.name.trim()).await?;
        tracing::info!(category_id = %category.id, "Category created");
        Ok(category.into())
    }

    pub async fn update_by_id(
        &self,
        id: Uuid,
        dto: CreateUpdateCategoryDto,
    ) -> Result<CategoryResponseDto> {
        self.ensure_active(id).await?;

        match self.repository.update_name(id, dto.name.trim()).await? {
            Some(category) => Ok(category.into()),
            None => Err(
                lifecycle::explain_failed_edit::<Category, _>(self.repository.as_ref(), id).await,
            ),
        }
    }

    /// Soft delete
    pub async fn remove(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let category = lifecycle::remove::<Category, _>(self.repository.as_ref(), id).await?;
        tracing::info!(category_id = %id, "Category removed");
        Ok(category.into())
    }

    /// Hard delete, allowed whether or not the category is removed
    pub async fn delete(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let category = lifecycle::hard_delete::<Category, _>(self.repository.as_ref(), id).await?;
        tracing::info!(category_id = %id, "Category deleted");
        Ok(category.into())
    }

    pub async fn restore_by_id(&self, id: Uuid) -> Result<CategoryResponseDto> {
        let category = lifecycle::restore::<Category, _>(self.repository.as_ref(), id).await?;
        tracing::info!(category_id = %id, "Category restored");
        Ok(category.into())
    }
}
