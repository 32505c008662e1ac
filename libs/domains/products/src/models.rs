use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{ProductError, ProductResult};

/// Keys a create/update body must carry. `desc` and `likes` are optional.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "name",
    "price",
    "category",
    "stock",
    "create_date",
    "available",
];

const BAD_DATA: &str = "Invalid Product: body of request contained bad or no data";

/// A stored product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Hat")]
    pub name: String,
    #[schema(example = 12.5)]
    pub price: f64,
    pub desc: Option<String>,
    #[schema(example = "Cloths")]
    pub category: String,
    pub stock: i32,
    /// ISO-8601 date, e.g. `2024-01-01`
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub create_date: NaiveDate,
    pub available: bool,
    pub likes: i32,
}

impl Product {
    pub fn new(id: i32, input: ProductInput) -> Self {
        Self {
            id,
            name: input.name,
            price: input.price,
            desc: input.desc.flatten(),
            category: input.category,
            stock: input.stock,
            create_date: input.create_date,
            available: input.available,
            likes: input.likes.unwrap_or(0),
        }
    }

    /// Overwrite the required fields. `desc` and `likes` change only when
    /// the body carried them; `id` is kept.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.price = input.price;
        self.category = input.category;
        self.stock = input.stock;
        self.create_date = input.create_date;
        self.available = input.available;
        if let Some(desc) = input.desc {
            self.desc = desc;
        }
        if let Some(likes) = input.likes {
            self.likes = likes;
        }
    }

    pub fn matches(&self, filter: &ProductFilter) -> bool {
        match filter {
            ProductFilter::Category(category) => &self.category == category,
            ProductFilter::Name(name) => &self.name == name,
            ProductFilter::Available(available) => self.available == *available,
            ProductFilter::Price(price) => self.price == *price,
            ProductFilter::Stock(stock) => self.stock == *stock,
            ProductFilter::CreateDate(date) => self.create_date == *date,
        }
    }
}

/// Body of create and update requests. Any `id` in the body is ignored.
///
/// Built from raw JSON with [`TryFrom<Value>`] so that a missing key or a
/// non-boolean `available` gets a message naming the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductInput {
    #[validate(length(min = 1, max = 63))]
    #[schema(example = "Hat")]
    pub name: String,
    #[schema(example = 12.5)]
    pub price: f64,
    /// `None` when the key is absent, `Some(None)` for an explicit `null`
    #[serde(
        default,
        deserialize_with = "key_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(length(max = 256))]
    #[schema(value_type = Option<String>)]
    pub desc: Option<Option<String>>,
    #[validate(length(min = 1, max = 63))]
    #[schema(example = "Cloths")]
    pub category: String,
    #[validate(range(min = 0))]
    pub stock: i32,
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub create_date: NaiveDate,
    pub available: bool,
    /// Starts at 0 on create; left untouched on update when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub likes: Option<i32>,
}

/// Wraps whatever the key held, `null` included, so absence stays `None`.
fn key_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl TryFrom<Value> for ProductInput {
    type Error = ProductError;

    fn try_from(value: Value) -> ProductResult<Self> {
        let Value::Object(map) = value else {
            return Err(ProductError::Validation(BAD_DATA.to_string()));
        };

        if let Some(missing) = REQUIRED_FIELDS.iter().find(|key| !map.contains_key(**key)) {
            return Err(ProductError::Validation(format!(
                "Invalid Product: missing {missing}"
            )));
        }

        if let Some(available) = map.get("available").filter(|v| !v.is_boolean()) {
            return Err(ProductError::Validation(format!(
                "Invalid Attribute: available must be a boolean: {}",
                json_type(available)
            )));
        }

        serde_json::from_value(Value::Object(map))
            .map_err(|e| ProductError::Validation(format!("{BAD_DATA} {e}")))
    }
}

impl From<Product> for ProductInput {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            desc: Some(product.desc),
            category: product.category,
            stock: product.stock,
            create_date: product.create_date,
            available: product.available,
            likes: Some(product.likes),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single exact-match filter over the product collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductFilter {
    Category(String),
    Name(String),
    Available(bool),
    Price(f64),
    Stock(i32),
    CreateDate(NaiveDate),
}

/// Query string of `GET /products`.
///
/// Only one filter is ever applied. When several are given the first present
/// one wins in this order: `category`, `name`, `available`, `price`, `stock`,
/// `create_date`. Empty values count as absent.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub name: Option<String>,
    /// `true`/`yes`/`1` or `false`/`no`/`0`
    pub available: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    /// ISO-8601 date
    pub create_date: Option<String>,
}

impl ProductQuery {
    pub fn selected_filter(&self) -> ProductResult<Option<ProductFilter>> {
        if let Some(category) = present(&self.category) {
            return Ok(Some(ProductFilter::Category(category.to_string())));
        }
        if let Some(name) = present(&self.name) {
            return Ok(Some(ProductFilter::Name(name.to_string())));
        }
        if let Some(raw) = present(&self.available) {
            return parse_bool(raw).map(|b| Some(ProductFilter::Available(b)));
        }
        if let Some(raw) = present(&self.price) {
            return raw
                .parse()
                .map(|p| Some(ProductFilter::Price(p)))
                .map_err(|_| invalid_param("price", raw));
        }
        if let Some(raw) = present(&self.stock) {
            return raw
                .parse()
                .map(|s| Some(ProductFilter::Stock(s)))
                .map_err(|_| invalid_param("stock", raw));
        }
        if let Some(raw) = present(&self.create_date) {
            return raw
                .parse()
                .map(|d| Some(ProductFilter::CreateDate(d)))
                .map_err(|_| invalid_param("create_date", raw));
        }
        Ok(None)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_bool(raw: &str) -> ProductResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(invalid_param("available", raw)),
    }
}

fn invalid_param(name: &str, raw: &str) -> ProductError {
    ProductError::Validation(format!("Invalid query parameter {name}: '{raw}'"))
}
