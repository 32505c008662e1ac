use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput, ProductQuery};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Store a new product; any id the caller had in mind is ignored
    #[tracing::instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        input.validate()?;

        self.repository.create(input).await
    }

    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List products, narrowed by at most one query filter
    pub async fn list_products(&self, query: &ProductQuery) -> ProductResult<Vec<Product>> {
        match query.selected_filter()? {
            Some(filter) => self.repository.find_by(filter).await,
            None => self.repository.list_all().await,
        }
    }

    /// Replace the fields of an existing product, keeping its id.
    /// `desc` and `likes` keep their stored values when the input omits them.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_product(&self, id: i32, input: ProductInput) -> ProductResult<Product> {
        input.validate()?;

        let mut product = self.get_product(id).await?;
        product.apply(input);
        self.repository.update(product).await
    }

    /// Delete a product. Deleting a missing id succeeds.
    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            tracing::debug!(product_id = id, "Product already absent");
        }
        Ok(())
    }

    /// Take one unit of stock.
    ///
    /// Availability is checked before stock: an unavailable product is
    /// rejected even when it still has units. Selling the last unit also
    /// marks the product unavailable.
    ///
    /// The read and the write are separate repository calls, so two
    /// concurrent purchases of the same product can both succeed against the
    /// same stock level.
    #[tracing::instrument(skip(self))]
    pub async fn purchase_product(&self, id: i32) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;

        if !product.available {
            return Err(ProductError::NotAvailable(id));
        }
        if product.stock <= 0 {
            return Err(ProductError::OutOfStock(id));
        }

        product.stock -= 1;
        if product.stock == 0 {
            product.available = false;
        }

        let product = self.repository.update(product).await?;
        tracing::info!(product_id = id, stock = product.stock, "Product purchased");
        Ok(product)
    }

    #[tracing::instrument(skip(self))]
    pub async fn like_product(&self, id: i32) -> ProductResult<Product> {
        let mut product = self.get_product(id).await?;
        product.likes = product
            .likes
            .checked_add(1)
            .ok_or(ProductError::LikeLimit(id))?;
        self.repository.update(product).await
    }
}
