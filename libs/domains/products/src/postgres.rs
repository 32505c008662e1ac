use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductFilter, ProductInput},
    repository::{EMPTY_ID, ProductRepository},
};

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let model = entity::ActiveModel::from(input).insert(&self.db).await?;

        tracing::info!(product_id = model.id, name = %model.name, "Created product");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        tracing::debug!(product_id = id, "Looking up product");
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let id = product.id;
        if id <= 0 {
            return Err(ProductError::Validation(EMPTY_ID.to_string()));
        }

        let model = entity::ActiveModel::from(product)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ProductError::NotFound(id),
                other => other.into(),
            })?;

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        tracing::debug!(?filter, "Filtering products");

        let condition = match filter {
            ProductFilter::Category(category) => entity::Column::Category.eq(category),
            ProductFilter::Name(name) => entity::Column::Name.eq(name),
            ProductFilter::Available(available) => entity::Column::Available.eq(available),
            ProductFilter::Price(price) => entity::Column::Price.eq(price),
            ProductFilter::Stock(stock) => entity::Column::Stock.eq(stock),
            ProductFilter::CreateDate(date) => entity::Column::CreateDate.eq(date),
        };

        let models = entity::Entity::find()
            .filter(condition)
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
