use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::categories::CategoryService;
use crate::features::products::dtos::{CreateUpdateProductDto, ProductResponseDto};
use crate::features::products::models::{NewProduct, Product};
use crate::features::products::repositories::{PgProductRepository, ProductRepository};
use crate::shared::lifecycle;

/// Service for product operations.
///
/// Category checks go through [`CategoryService::ensure_active`], so a missing
/// or removed category surfaces as a category error.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    categories: Arc<CategoryService>,
}

impl ProductService {
    pub fn new(pool: PgPool, categories: Arc<CategoryService>) -> Self {
        Self::with_repository(Arc::new(PgProductRepository::new(pool)), categories)
    }

    pub fn with_repository(
        repository: Arc<dyn ProductRepository>,
        categories: Arc<CategoryService>,
    ) -> Self {
        Self {
            repository,
            categories,
        }
    }

    /// List active products, optionally for a single active category
    pub async fn get_all(&self, category_id: Option<Uuid>) -> Result<Vec<ProductResponseDto>> {
        if let Some(category_id) = category_id {
            self.categories.ensure_active(category_id).await?;
        }

        let products = self.repository.find_all_active(category_id).await?;
        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ProductResponseDto> {
        let product = lifecycle::get_active::<Product, _>(self.repository.as_ref(), id).await?;
        Ok(product.into())
    }

    pub async fn create(&self, dto: CreateUpdateProductDto) -> Result<ProductResponseDto> {
        self.categories.ensure_active(dto.category_id).await?;

        let product = self.repository.insert(&NewProduct::from(dto)).await?;
        tracing::info!(
            product_id = %product.id,
            category_id = %product.category_id,
            "Product created"
        );
        Ok(product.into())
    }

    pub async fn update_by_id(
        &self,
        id: Uuid,
        dto: CreateUpdateProductDto,
    ) -> Result<ProductResponseDto> {
        lifecycle::get_active::<Product, _>(self.repository.as_ref(), id).await?;
        self.categories.ensure_active(dto.category_id).await?;

        match self.repository.update(id, &NewProduct::from(dto)).await? {
            Some(product) => Ok(product.into()),
            None => Err(
                lifecycle::explain_failed_edit::<Product, _>(self.repository.as_ref(), id).await,
            ),
        }
    }

    /// Soft delete
    pub async fn remove_by_id(&self, id: Uuid) -> Result<ProductResponseDto> {
        let product = lifecycle::remove::<Product, _>(self.repository.as_ref(), id).await?;
        tracing::info!(product_id = %id, "Product removed");
        Ok(product.into())
    }

    /// Hard delete, allowed whether or not the product is removed
    pub async fn delete_by_id(&self, id: Uuid) -> Result<ProductResponseDto> {
        let product = lifecycle::hard_delete::<Product, _>(self.repository.as_ref(), id).await?;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(product.into())
    }

    pub async fn restore_by_id(&self, id: Uuid) -> Result<ProductResponseDto> {
        let product = lifecycle::restore::<Product, _>(self.repository.as_ref(), id).await?;
        tracing::info!(product_id = %id, "Product restored");
        Ok(product.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::features::categories::dtos::CreateUpdateCategoryDto;
    use crate::shared::characteristics::Characteristics;
    use crate::shared::test_helpers::InMemoryCatalog;
    use fake::{faker::lorem::en::Word, Fake};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    struct Fixture {
        categories: Arc<CategoryService>,
        products: ProductService,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryCatalog::default());
        let categories = Arc::new(CategoryService::with_repository(store.clone()));
        let products = ProductService::with_repository(store, categories.clone());
        Fixture {
            categories,
            products,
        }
    }

    impl Fixture {
        async fn category(&self) -> Uuid {
            let name: String = Word().fake();
            self.categories
                .create(CreateUpdateCategoryDto { name })
                .await
                .unwrap()
                .id
        }
    }

    fn product_dto(category_id: Uuid, price: &str) -> CreateUpdateProductDto {
        let characteristics: Characteristics =
            [("CPU", "Snapdragon"), ("RAM", "6GB")].into_iter().collect();
        CreateUpdateProductDto {
            title: "Oneplus 9R".to_string(),
            description: "descr".to_string(),
            price: Decimal::from_str(price).unwrap(),
            characteristics,
            category_id,
        }
    }

    #[tokio::test]
    async fn test_create_keeps_exact_price() {
        let f = fixture();
        let category_id = f.category().await;

        let created = f
            .products
            .create(product_dto(category_id, "25000.00"))
            .await
            .unwrap();
        let fetched = f.products.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched.price, Decimal::from_str("25000.00").unwrap());
        assert_eq!(fetched.price.to_string(), "25000.00");
        assert_eq!(fetched.category.id, category_id);
        assert_eq!(
            fetched.characteristics.get("CPU"),
            Some(&"Snapdragon".into())
        );
    }

    #[tokio::test]
    async fn test_create_with_missing_category() {
        let f = fixture();
        let category_id = Uuid::new_v4();

        let err = f
            .products
            .create(product_dto(category_id, "1.00"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::CategoryNotFound(id) if id == category_id));
    }

    #[tokio::test]
    async fn test_create_with_removed_category() {
        let f = fixture();
        let category_id = f.category().await;
        f.categories.remove(category_id).await.unwrap();

        let err = f
            .products
            .create(product_dto(category_id, "1.00"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::CategoryRemoved(_)));
    }

    #[tokio::test]
    async fn test_get_all_filters_by_category() {
        let f = fixture();
        let phones = f.category().await;
        let laptops = f.category().await;
        let phone = f.products.create(product_dto(phones, "1.00")).await.unwrap();
        let removed = f.products.create(product_dto(phones, "2.00")).await.unwrap();
        f.products.create(product_dto(laptops, "3.00")).await.unwrap();
        f.products.remove_by_id(removed.id).await.unwrap();

        let listed = f.products.get_all(Some(phones)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, phone.id);

        let all = f.products.get_all(None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_get_all_with_unknown_or_removed_category() {
        let f = fixture();
        let missing = Uuid::new_v4();
        assert!(matches!(
            f.products.get_all(Some(missing)).await,
            Err(AppError::CategoryNotFound(_))
        ));

        let removed = f.category().await;
        f.categories.remove(removed).await.unwrap();
        assert!(matches!(
            f.products.get_all(Some(removed)).await,
            Err(AppError::CategoryRemoved(_))
        ));
    }

    #[tokio::test]
    async fn test_update_checks_product_before_category() {
        let f = fixture();
        let category_id = f.category().await;
        let product = f
            .products
            .create(product_dto(category_id, "1.00"))
            .await
            .unwrap();
        f.products.remove_by_id(product.id).await.unwrap();

        let err = f
            .products
            .update_by_id(product.id, product_dto(Uuid::new_v4(), "1.00"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ProductRemoved(_)));
    }

    #[tokio::test]
    async fn test_update_moves_product_to_other_category() {
        let f = fixture();
        let phones = f.category().await;
        let laptops = f.category().await;
        let product = f.products.create(product_dto(phones, "1.00")).await.unwrap();

        let updated = f
            .products
            .update_by_id(product.id, product_dto(laptops, "1.50"))
            .await
            .unwrap();

        assert_eq!(updated.category.id, laptops);
        assert_eq!(updated.price.to_string(), "1.50");
        assert_eq!(updated.created_at, product.created_at);
        assert!(updated.updated_at > product.updated_at);
    }

    #[tokio::test]
    async fn test_update_with_removed_category() {
        let f = fixture();
        let phones = f.category().await;
        let laptops = f.category().await;
        let product = f.products.create(product_dto(phones, "1.00")).await.unwrap();
        f.categories.remove(laptops).await.unwrap();

        let err = f
            .products
            .update_by_id(product.id, product_dto(laptops, "1.00"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::CategoryRemoved(id) if id == laptops));
    }

    #[tokio::test]
    async fn test_soft_delete_lifecycle() {
        let f = fixture();
        let category_id = f.category().await;
        let product = f
            .products
            .create(product_dto(category_id, "1.00"))
            .await
            .unwrap();

        assert!(matches!(
            f.products.restore_by_id(product.id).await,
            Err(AppError::ProductNotRemoved(_))
        ));

        f.products.remove_by_id(product.id).await.unwrap();
        assert!(matches!(
            f.products.get_by_id(product.id).await,
            Err(AppError::ProductRemoved(_))
        ));
        assert!(matches!(
            f.products.remove_by_id(product.id).await,
            Err(AppError::ProductRemoved(_))
        ));

        f.products.restore_by_id(product.id).await.unwrap();
        assert!(f.products.get_by_id(product.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_hard_delete_removed_product() {
        let f = fixture();
        let category_id = f.category().await;
        let product = f
            .products
            .create(product_dto(category_id, "1.00"))
            .await
            .unwrap();
        f.products.remove_by_id(product.id).await.unwrap();

        let deleted = f.products.delete_by_id(product.id).await.unwrap();

        assert_eq!(deleted.id, product.id);
        assert!(matches!(
            f.products.get_by_id(product.id).await,
            Err(AppError::ProductNotFound(_))
        ));
    }
}
