use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Product, ProductInput};

/// Sea-ORM Entity for the `products` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub desc: Option<String>,
    pub category: String,
    pub stock: i32,
    pub create_date: Date,
    pub available: bool,
    pub likes: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// OpenAPI tag shared by every product route
    pub const TAG: &'static str = "products";
}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            desc: model.desc,
            category: model.category,
            stock: model.stock,
            create_date: model.create_date,
            available: model.available,
            likes: model.likes,
        }
    }
}

/// Insert form: the id is left to the `SERIAL` column.
impl From<ProductInput> for ActiveModel {
    fn from(input: ProductInput) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
            desc: Set(input.desc.flatten()),
            category: Set(input.category),
            stock: Set(input.stock),
            create_date: Set(input.create_date),
            available: Set(input.available),
            likes: Set(input.likes.unwrap_or(0)),
        }
    }
}

/// Full-overwrite update form keyed by `product.id`.
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        let id = product.id;
        ActiveModel {
            id: Set(id),
            ..ActiveModel::from(ProductInput::from(product))
        }
    }
}
