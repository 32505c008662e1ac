use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter, ProductInput};

pub(crate) const EMPTY_ID: &str = "Update called with empty ID field";

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product under a freshly assigned id
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// `Ok(None)` when no product has this id
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Overwrite every field of an existing product.
    ///
    /// Fails with `Validation` when `product.id` is unset (`<= 0`) and with
    /// `NotFound` when no row has that id.
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Returns whether a row was removed; a missing id is not an error.
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// Every product, in insertion order
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    /// Products matching one exact-match filter, in insertion order
    async fn find_by(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    products: BTreeMap<i32, Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let mut state = self.state.write().await;

        state.last_id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| ProductError::Database("product id sequence exhausted".to_string()))?;
        let product = Product::new(state.last_id, input);
        state.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, name = %product.name, "Created product");
        Ok(product)
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        tracing::debug!(product_id = id, "Looking up product");
        Ok(self.state.read().await.products.get(&id).cloned())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        if product.id <= 0 {
            return Err(ProductError::Validation(EMPTY_ID.to_string()));
        }

        let mut state = self.state.write().await;
        let slot = state
            .products
            .get_mut(&product.id)
            .ok_or(ProductError::NotFound(product.id))?;
        *slot = product.clone();

        tracing::info!(product_id = product.id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let removed = self.state.write().await.products.remove(&id).is_some();
        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }

    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.state.read().await.products.values().cloned().collect())
    }

    async fn find_by(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        tracing::debug!(?filter, "Filtering products");
        let state = self.state.read().await;
        Ok(state
            .products
            .values()
            .filter(|p| p.matches(&filter))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn input(name: &str, category: &str, stock: i32) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            price: 9.99,
            desc: None,
            category: category.to_string(),
            stock,
            create_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            available: true,
            likes: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let repo = InMemoryProductRepository::new();

        let a = repo.create(input("a", "tools", 1)).await.unwrap();
        let b = repo.create(input("b", "tools", 1)).await.unwrap();

        assert!(a.id > 0);
        assert_ne!(a.id, b.id);
        assert_eq!(repo.find_by_id(b.id).await.unwrap(), Some(b));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryProductRepository::new();

        let a = repo.create(input("a", "tools", 1)).await.unwrap();
        repo.delete(a.id).await.unwrap();
        let b = repo.create(input("b", "tools", 1)).await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_create_fails_once_ids_run_out() {
        let repo = InMemoryProductRepository::new();
        repo.state.write().await.last_id = i32::MAX;

        assert!(matches!(
            repo.create(input("a", "tools", 1)).await,
            Err(ProductError::Database(_))
        ));
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let repo = InMemoryProductRepository::new();
        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let repo = InMemoryProductRepository::new();
        let mut product = repo.create(input("a", "tools", 1)).await.unwrap();

        product.stock = 7;
        product.desc = Some("restocked".into());
        repo.update(product.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(product.id).await.unwrap(), Some(product));
    }

    #[tokio::test]
    async fn test_update_with_unset_id_fails() {
        let repo = InMemoryProductRepository::new();
        let product = Product::new(0, input("a", "tools", 1));

        assert_eq!(
            repo.update(product).await,
            Err(ProductError::Validation(EMPTY_ID.to_string()))
        );
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let product = Product::new(9, input("a", "tools", 1));

        assert_eq!(repo.update(product).await, Err(ProductError::NotFound(9)));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryProductRepository::new();
        let product = repo.create(input("a", "tools", 1)).await.unwrap();

        assert!(repo.delete(product.id).await.unwrap());
        assert!(!repo.delete(product.id).await.unwrap());
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_keeps_insertion_order() {
        let repo = InMemoryProductRepository::new();
        repo.create(input("a", "tools", 0)).await.unwrap();
        repo.create(input("b", "food", 5)).await.unwrap();
        repo.create(input("c", "tools", 5)).await.unwrap();

        let tools = repo
            .find_by(ProductFilter::Category("tools".into()))
            .await
            .unwrap();
        let names: Vec<_> = tools.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);

        let stocked = repo.find_by(ProductFilter::Stock(5)).await.unwrap();
        assert_eq!(stocked.len(), 2);

        let priced = repo.find_by(ProductFilter::Price(9.99)).await.unwrap();
        assert_eq!(priced.len(), 3);
    }
}
