//! In-memory catalog store used by service and router tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::types::Json;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::categories::repositories::CategoryRepository;
use crate::features::products::models::{NewProduct, Product};
use crate::features::products::repositories::ProductRepository;
use crate::shared::lifecycle::SoftDeleteStore;

/// Implements both repositories over shared maps, so a product's category can
/// be checked the same way the database foreign key does.
#[derive(Default)]
pub struct InMemoryCatalog {
    categories: Mutex<HashMap<Uuid, Category>>,
    products: Mutex<HashMap<Uuid, Product>>,
    clock: Mutex<Option<DateTime<Utc>>>,
}

impl InMemoryCatalog {
    pub fn category_count(&self) -> usize {
        self.categories.lock().unwrap().len()
    }

    /// Strictly increasing timestamps, so ordering and `updated_at` bumps are
    /// observable even within one clock tick
    fn now(&self) -> DateTime<Utc> {
        let mut last = self.clock.lock().unwrap();
        let now = match *last {
            Some(prev) if Utc::now() <= prev => prev + Duration::microseconds(1),
            _ => Utc::now(),
        };
        *last = Some(now);
        now
    }

    fn category_name(&self, id: Uuid) -> Result<String> {
        self.categories
            .lock()
            .unwrap()
            .get(&id)
            .map(|c| c.name.clone())
            .ok_or_else(|| AppError::Conflict(format!("Category with ID = {} does not exist", id)))
    }

    /// Products carry the current category name, as the join does
    fn with_category(&self, mut product: Product) -> Product {
        if let Ok(name) = self.category_name(product.category_id) {
            product.category_name = name;
        }
        product
    }
}

#[async_trait]
impl SoftDeleteStore<Category> for InMemoryCatalog {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        Ok(self.categories.lock().unwrap().get(&id).cloned())
    }

    async fn set_removed(&self, id: Uuid, removed: bool) -> Result<Option<Category>> {
        let now = self.now();
        let mut categories = self.categories.lock().unwrap();
        match categories.get_mut(&id) {
            Some(category) if category.is_removed != removed => {
                category.is_removed = removed;
                category.updated_at = now;
                Ok(Some(category.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Category>> {
        let in_use = self
            .products
            .lock()
            .unwrap()
            .values()
            .any(|p| p.category_id == id);
        if in_use {
            return Err(AppError::Conflict(
                "Record is still referenced by other records".to_string(),
            ));
        }
        Ok(self.categories.lock().unwrap().remove(&id))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn find_all_active(&self) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .categories
            .lock()
            .unwrap()
            .values()
            .filter(|c| !c.is_removed)
            .cloned()
            .collect();
        categories.sort_by_key(|c| (c.created_at, c.id));
        Ok(categories)
    }

    async fn insert(&self, name: &str) -> Result<Category> {
        let now = self.now();
        let category = Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            is_removed: false,
            created_at: now,
            updated_at: now,
        };
        self.categories
            .lock()
            .unwrap()
            .insert(category.id, category.clone());
        Ok(category)
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<Option<Category>> {
        let now = self.now();
        let mut categories = self.categories.lock().unwrap();
        match categories.get_mut(&id) {
            Some(category) if !category.is_removed => {
                category.name = name.to_string();
                category.updated_at = now;
                Ok(Some(category.clone()))
            }
            _ => Ok(None),
        }
    }
}

#[async_trait]
impl SoftDeleteStore<Product> for InMemoryCatalog {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>> {
        let product = self.products.lock().unwrap().get(&id).cloned();
        Ok(product.map(|p| self.with_category(p)))
    }

    async fn set_removed(&self, id: Uuid, removed: bool) -> Result<Option<Product>> {
        let now = self.now();
        let updated = {
            let mut products = self.products.lock().unwrap();
            match products.get_mut(&id) {
                Some(product) if product.is_removed != removed => {
                    product.is_removed = removed;
                    product.updated_at = now;
                    Some(product.clone())
                }
                _ => None,
            }
        };
        Ok(updated.map(|p| self.with_category(p)))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Product>> {
        let deleted = self.products.lock().unwrap().remove(&id);
        Ok(deleted.map(|p| self.with_category(p)))
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn find_all_active(&self, category_id: Option<Uuid>) -> Result<Vec<Product>> {
        let mut products: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .values()
            .filter(|p| !p.is_removed)
            .filter(|p| category_id.is_none_or(|id| p.category_id == id))
            .cloned()
            .collect();
        products.sort_by_key(|p| (p.created_at, p.id));
        Ok(products
            .into_iter()
            .map(|p| self.with_category(p))
            .collect())
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product> {
        let category_name = self.category_name(product.category_id)?;
        let now = self.now();
        let product = Product {
            id: Uuid::new_v4(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            characteristics: Json(product.characteristics.clone()),
            category_id: product.category_id,
            category_name,
            is_removed: false,
            created_at: now,
            updated_at: now,
        };
        self.products
            .lock()
            .unwrap()
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: Uuid, product: &NewProduct) -> Result<Option<Product>> {
        let category_name = self.category_name(product.category_id)?;
        let now = self.now();
        let mut products = self.products.lock().unwrap();
        match products.get_mut(&id) {
            Some(existing) if !existing.is_removed => {
                existing.title = product.title.clone();
                existing.description = product.description.clone();
                existing.price = product.price;
                existing.characteristics = Json(product.characteristics.clone());
                existing.category_id = product.category_id;
                existing.category_name = category_name;
                existing.updated_at = now;
                Ok(Some(existing.clone()))
            }
            _ => Ok(None),
        }
    }
}
